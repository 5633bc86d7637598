// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/constraint.rs
//
// Constraint solver: aspect-ratio lock, minimum size, and boundary clamping
// applied to a candidate crop rect, in that order.

use super::aspect::AspectRatioMode;
use super::geometry::Rect;
use super::handle::{AxisAnchor, HandleType};

/// Turns a candidate crop rect into a valid one.
///
/// The passes run in a fixed order:
/// 1. aspect-ratio enforcement (locked mode with an active handle only),
/// 2. minimum size, growing away from the handle's anchor,
/// 3. boundary clamping: shift back inside, shrink only if larger than the bounds.
///
/// The ratio survives pass 3 because a locked rect is shrunk uniformly. It is
/// lost only when the bounds are smaller than the minimum crop itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintSolver {
    min_size: f32,
}

impl ConstraintSolver {
    pub fn new(min_size: f32) -> Self {
        Self { min_size }
    }

    pub fn min_size(&self) -> f32 {
        self.min_size
    }

    pub fn constrain(
        &self,
        candidate: &Rect,
        bounds: &Rect,
        mode: AspectRatioMode,
        handle: Option<HandleType>,
    ) -> Rect {
        if bounds.is_empty() {
            return Rect::ZERO;
        }

        let anchors = handle.map_or((AxisAnchor::Start, AxisAnchor::Start), |h| {
            (h.horizontal_anchor(), h.vertical_anchor())
        });

        let mut rect = *candidate;
        if let (Some(ratio), Some(handle)) = (mode.target_ratio(), handle) {
            rect = enforce_ratio(&rect, ratio, handle);
        }
        rect = self.enforce_min_size(&rect, mode, anchors);
        clamp_to_bounds(&rect, bounds, mode, anchors)
    }

    fn enforce_min_size(
        &self,
        rect: &Rect,
        mode: AspectRatioMode,
        (h_anchor, v_anchor): (AxisAnchor, AxisAnchor),
    ) -> Rect {
        let (width, height) = match mode.target_ratio() {
            None => (rect.width.max(self.min_size), rect.height.max(self.min_size)),
            Some(ratio) => {
                let min_width = self.min_size.max(self.min_size * ratio);
                let min_height = min_width / ratio;
                if rect.width <= 0.0 || rect.height <= 0.0 {
                    (min_width, min_height)
                } else if rect.width < min_width || rect.height < min_height {
                    let scale = (min_width / rect.width).max(min_height / rect.height);
                    (rect.width * scale, rect.height * scale)
                } else {
                    (rect.width, rect.height)
                }
            }
        };

        Rect::new(
            h_anchor.place(rect.x, rect.width, width),
            v_anchor.place(rect.y, rect.height, height),
            width,
            height,
        )
    }
}

/// Recompute one dimension from the other so `width / height == ratio`,
/// keeping the handle's opposite corner or edge fixed.
fn enforce_ratio(rect: &Rect, ratio: f32, handle: HandleType) -> Rect {
    let width = rect.width.max(0.0);
    let height = rect.height.max(0.0);

    let (new_width, new_height) = if handle.is_corner() {
        // The dimension that outgrew the ratio drives the other.
        if width >= height * ratio {
            (width, width / ratio)
        } else {
            (height * ratio, height)
        }
    } else if handle.moves_top() || handle.moves_bottom() {
        (height * ratio, height)
    } else {
        (width, width / ratio)
    };

    Rect::new(
        handle.horizontal_anchor().place(rect.x, rect.width, new_width),
        handle.vertical_anchor().place(rect.y, rect.height, new_height),
        new_width,
        new_height,
    )
}

fn clamp_to_bounds(
    rect: &Rect,
    bounds: &Rect,
    mode: AspectRatioMode,
    (h_anchor, v_anchor): (AxisAnchor, AxisAnchor),
) -> Rect {
    let (mut width, mut height) = (rect.width, rect.height);
    if mode.is_locked() {
        let scale = (bounds.width / width).min(bounds.height / height).min(1.0);
        width *= scale;
        height *= scale;
    } else {
        width = width.min(bounds.width);
        height = height.min(bounds.height);
    }

    let x = h_anchor.place(rect.x, rect.width, width);
    let y = v_anchor.place(rect.y, rect.height, height);
    Rect::new(
        shift_into(x, width, bounds.x, bounds.right()),
        shift_into(y, height, bounds.y, bounds.bottom()),
        width,
        height,
    )
}

fn shift_into(start: f32, length: f32, min: f32, max: f32) -> f32 {
    if start < min {
        min
    } else if start + length > max {
        max - length
    } else {
        start
    }
}
