// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/overlay.rs
//
// Crop overlay contract: what a toolkit draws (dimming mask, border, handles,
// grid) derived from session state, plus a painter over any fill surface.

use crate::app::crop::CropSession;
use crate::config::CropConfig;
use crate::constant::GRID_MIN_EXTENT;
use crate::domain::geometry::{Point, Rect, Size};
use crate::domain::handle::HandleType;

const BORDER_WIDTH: f32 = 2.0;
const GRID_WIDTH: f32 = 1.0;

/// Straight RGBA color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

pub const OVERLAY_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
pub const HANDLE_COLOR: Color = Color::WHITE;
pub const ACTIVE_HANDLE_COLOR: Color = Color::from_rgba(1.0, 0.8, 0.0, 1.0);
pub const BORDER_COLOR: Color = Color::WHITE;
pub const GRID_COLOR: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.3);

/// Anything that can fill an axis-aligned rect with a color.
pub trait OverlaySurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    pub handle: HandleType,
    pub bounds: Rect,
    pub active: bool,
}

/// Everything the overlay needs for one frame, in container coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayModel {
    pub container: Size,
    pub crop: Rect,
    /// Dimmed regions around the crop: top, bottom, left, right. Empty ones are omitted.
    pub mask: Vec<Rect>,
    pub border: [Rect; 4],
    pub grid: Vec<Rect>,
    pub handles: Vec<HandleMarker>,
}

impl OverlayModel {
    pub fn new(session: &CropSession, config: &CropConfig) -> Self {
        let container = session.container();
        let crop = if session.is_ready() { session.crop_view() } else { Rect::ZERO };
        let bounds = Rect::from_origin_size(Point::default(), container);

        Self {
            container,
            crop,
            mask: mask_rects(&bounds, &crop),
            border: border_rects(&crop),
            grid: if config.show_grid { grid_lines(&crop) } else { Vec::new() },
            handles: handle_markers(&crop, config.handle_size, session.active_handle()),
        }
    }
}

fn mask_rects(bounds: &Rect, crop: &Rect) -> Vec<Rect> {
    if crop.is_empty() {
        return vec![*bounds];
    }

    let candidates = [
        // Top
        Rect::new(bounds.x, bounds.y, bounds.width, crop.y - bounds.y),
        // Bottom
        Rect::new(bounds.x, crop.bottom(), bounds.width, bounds.bottom() - crop.bottom()),
        // Left
        Rect::new(bounds.x, crop.y, crop.x - bounds.x, crop.height),
        // Right
        Rect::new(crop.right(), crop.y, bounds.right() - crop.right(), crop.height),
    ];
    candidates.into_iter().filter(|rect| !rect.is_empty()).collect()
}

fn border_rects(crop: &Rect) -> [Rect; 4] {
    let (x, y, w, h) = (crop.x, crop.y, crop.width, crop.height);
    [
        Rect::new(x, y, w, BORDER_WIDTH),
        Rect::new(x, y + h - BORDER_WIDTH, w, BORDER_WIDTH),
        Rect::new(x, y, BORDER_WIDTH, h),
        Rect::new(x + w - BORDER_WIDTH, y, BORDER_WIDTH, h),
    ]
}

fn grid_lines(crop: &Rect) -> Vec<Rect> {
    if crop.width <= GRID_MIN_EXTENT || crop.height <= GRID_MIN_EXTENT {
        return Vec::new();
    }

    let third_w = crop.width / 3.0;
    let third_h = crop.height / 3.0;
    let mut lines = Vec::with_capacity(4);

    // 2 vertical
    for i in 1..3 {
        let line_x = crop.x + third_w * i as f32;
        lines.push(Rect::new(line_x, crop.y, GRID_WIDTH, crop.height));
    }

    // 2 horizontal
    for i in 1..3 {
        let line_y = crop.y + third_h * i as f32;
        lines.push(Rect::new(crop.x, line_y, crop.width, GRID_WIDTH));
    }

    lines
}

fn handle_markers(crop: &Rect, size: f32, active: Option<HandleType>) -> Vec<HandleMarker> {
    if crop.is_empty() {
        return Vec::new();
    }

    let half = size / 2.0;
    HandleType::ALL
        .into_iter()
        .map(|handle| {
            let center = handle.position(crop);
            HandleMarker {
                handle,
                bounds: Rect::new(center.x - half, center.y - half, size, size),
                active: active == Some(handle),
            }
        })
        .collect()
}

/// Draw the model back to front: mask, border, grid, handles.
pub fn paint<S: OverlaySurface>(model: &OverlayModel, surface: &mut S) {
    for rect in &model.mask {
        surface.fill_rect(*rect, OVERLAY_COLOR);
    }

    if model.crop.is_empty() {
        return;
    }

    for rect in model.border {
        surface.fill_rect(rect, BORDER_COLOR);
    }
    for rect in &model.grid {
        surface.fill_rect(*rect, GRID_COLOR);
    }
    for marker in &model.handles {
        let color = if marker.active { ACTIVE_HANDLE_COLOR } else { HANDLE_COLOR };
        surface.fill_rect(marker.bounds, color);
    }
}
