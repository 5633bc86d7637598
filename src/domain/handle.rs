// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/handle.rs
//
// Resize handle descriptors: position on the crop rect, which edges each
// handle drags, and which point stays anchored while it does.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandleType {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Which part of an axis stays fixed while the other side moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAnchor {
    /// Min edge (left / top) stays put.
    Start,
    /// Max edge (right / bottom) stays put.
    End,
    Center,
}

impl AxisAnchor {
    /// Place a span of `length` on this axis, keeping the anchored part of
    /// `(start, old_length)` where it was. Returns the new start.
    pub fn place(self, start: f32, old_length: f32, length: f32) -> f32 {
        match self {
            Self::Start => start,
            Self::End => start + old_length - length,
            Self::Center => start + (old_length - length) / 2.0,
        }
    }
}

impl HandleType {
    /// Hit-test priority order: corners first, then edge midpoints.
    pub const ALL: [HandleType; 8] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::TopCenter,
        Self::BottomCenter,
        Self::MiddleLeft,
        Self::MiddleRight,
    ];

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    pub fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::MiddleLeft | Self::BottomLeft)
    }

    pub fn moves_right(self) -> bool {
        matches!(self, Self::TopRight | Self::MiddleRight | Self::BottomRight)
    }

    pub fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
    }

    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomCenter | Self::BottomRight)
    }

    /// Handle center on `rect`.
    pub fn position(self, rect: &Rect) -> Point {
        let x = if self.moves_left() {
            rect.x
        } else if self.moves_right() {
            rect.right()
        } else {
            rect.x + rect.width / 2.0
        };
        let y = if self.moves_top() {
            rect.y
        } else if self.moves_bottom() {
            rect.bottom()
        } else {
            rect.y + rect.height / 2.0
        };
        Point::new(x, y)
    }

    /// Horizontal anchor while this handle resizes. Edge handles that do not
    /// drag horizontally stay centered on that axis.
    pub fn horizontal_anchor(self) -> AxisAnchor {
        if self.moves_left() {
            AxisAnchor::End
        } else if self.moves_right() {
            AxisAnchor::Start
        } else {
            AxisAnchor::Center
        }
    }

    pub fn vertical_anchor(self) -> AxisAnchor {
        if self.moves_top() {
            AxisAnchor::End
        } else if self.moves_bottom() {
            AxisAnchor::Start
        } else {
            AxisAnchor::Center
        }
    }

    /// Corner handle that drags away from `origin` toward a point at
    /// `(dx, dy)`, used when drawing a fresh crop.
    pub fn corner_toward(dx: f32, dy: f32) -> Self {
        match (dx < 0.0, dy < 0.0) {
            (false, false) => Self::BottomRight,
            (true, false) => Self::BottomLeft,
            (false, true) => Self::TopRight,
            (true, true) => Self::TopLeft,
        }
    }

    /// Apply a pointer delta to the edges this handle drags.
    ///
    /// The result may have negative size when an edge is dragged past its
    /// opposite; the constraint solver normalizes that.
    pub fn apply_delta(self, start: &Rect, dx: f32, dy: f32) -> Rect {
        let mut rect = *start;
        if self.moves_left() {
            rect.x += dx;
            rect.width -= dx;
        } else if self.moves_right() {
            rect.width += dx;
        }
        if self.moves_top() {
            rect.y += dy;
            rect.height -= dy;
        } else if self.moves_bottom() {
            rect.height += dy;
        }
        rect
    }
}
