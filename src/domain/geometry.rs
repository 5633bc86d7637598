// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry.rs
//
// Geometry primitives, aspect-fit display rect, and view <-> video-pixel
// coordinate conversion.

use serde::{Deserialize, Serialize};

use crate::constant::GEOMETRY_EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True unless both dimensions are strictly positive and finite.
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Axis-aligned rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// True if `other` lies inside `self`, allowing [`GEOMETRY_EPSILON`] slack.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x - GEOMETRY_EPSILON
            && other.y >= self.y - GEOMETRY_EPSILON
            && other.right() <= self.right() + GEOMETRY_EPSILON
            && other.bottom() <= self.bottom() + GEOMETRY_EPSILON
    }

    /// Shrink by `margin` on every side, never below zero size.
    pub fn inset(&self, margin: f32) -> Rect {
        let width = (self.width - 2.0 * margin).max(0.0);
        let height = (self.height - 2.0 * margin).max(0.0);
        let center = self.center();
        Rect::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Clamp a point into the rectangle.
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.x, self.right().max(self.x)),
            point.y.clamp(self.y, self.bottom().max(self.y)),
        )
    }

    pub fn approx_eq(&self, other: &Rect, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

/// Natural pixel size of the decoded source video.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoFrame {
    pub natural_size: Size,
}

impl VideoFrame {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { natural_size: Size::new(width, height) }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::default(), self.natural_size)
    }
}

/// Size of the view presenting the video preview.
pub type ContainerBounds = Size;

/// Aspect-fit `video` inside `container`, centered on the letterbox axis.
///
/// Degenerate (zero, negative, non-finite) input yields [`Rect::ZERO`].
pub fn compute_display_rect(video: &VideoFrame, container: ContainerBounds) -> Rect {
    let natural = video.natural_size;
    if natural.is_empty() || container.is_empty() {
        return Rect::ZERO;
    }

    if natural.aspect() > container.aspect() {
        // Wider than the container: full width, letterbox top and bottom.
        let height = container.width / natural.aspect();
        Rect::new(0.0, (container.height - height) / 2.0, container.width, height)
    } else {
        // Pillarbox left and right.
        let width = container.height * natural.aspect();
        Rect::new((container.width - width) / 2.0, 0.0, width, container.height)
    }
}

/// Map a view-space rect into video-pixel space, clamped to the frame.
///
/// Returns [`Rect::ZERO`] while `display` or the video is empty.
pub fn view_to_video(rect: &Rect, display: &Rect, video: &VideoFrame) -> Rect {
    let natural = video.natural_size;
    if display.is_empty() || natural.is_empty() {
        return Rect::ZERO;
    }

    let scale_x = natural.width / display.width;
    let scale_y = natural.height / display.height;
    let x = ((rect.x - display.x) * scale_x).clamp(0.0, natural.width);
    let y = ((rect.y - display.y) * scale_y).clamp(0.0, natural.height);
    let width = (rect.width * scale_x).min(natural.width - x).max(0.0);
    let height = (rect.height * scale_y).min(natural.height - y).max(0.0);

    Rect::new(x, y, width, height)
}

/// Exact inverse of [`view_to_video`] for rects inside the frame.
pub fn video_to_view(rect: &Rect, display: &Rect, video: &VideoFrame) -> Rect {
    let natural = video.natural_size;
    if display.is_empty() || natural.is_empty() {
        return Rect::ZERO;
    }

    let scale_x = display.width / natural.width;
    let scale_y = display.height / natural.height;
    Rect::new(
        display.x + rect.x * scale_x,
        display.y + rect.y * scale_y,
        rect.width * scale_x,
        rect.height * scale_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 0.01;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= TOLERANCE
    }

    #[test]
    fn portrait_phone_letterboxes_landscape_video() {
        let video = VideoFrame::new(1920.0, 1080.0);
        let display = compute_display_rect(&video, Size::new(390.0, 844.0));

        assert!(approx(display.x, 0.0));
        assert!(approx(display.width, 390.0));
        assert!(approx(display.height, 219.375));
        assert!(approx(display.y, (844.0 - 219.375) / 2.0));
    }

    #[test]
    fn aspect_fit_properties() {
        let videos = [(1920.0, 1080.0), (1080.0, 1920.0), (640.0, 640.0), (4000.0, 3.0)];
        let containers = [(390.0, 844.0), (844.0, 390.0), (500.0, 500.0), (1.0, 1000.0)];

        for (vw, vh) in videos {
            for (cw, ch) in containers {
                let video = VideoFrame::new(vw, vh);
                let container = Size::new(cw, ch);
                let display = compute_display_rect(&video, container);

                let bounds = Rect::new(0.0, 0.0, cw, ch);
                assert!(bounds.contains_rect(&display), "{display:?} outside {bounds:?}");

                let touches_horizontal = approx(display.x, 0.0) && approx(display.right(), cw);
                let touches_vertical = approx(display.y, 0.0) && approx(display.bottom(), ch);
                assert!(touches_horizontal || touches_vertical);

                let ratio_error = (display.width / display.height) / (vw / vh) - 1.0;
                assert!(ratio_error.abs() < 1e-3, "ratio drift for {vw}x{vh} in {cw}x{ch}");
            }
        }
    }

    #[test]
    fn degenerate_inputs_yield_zero() {
        let container = Size::new(390.0, 844.0);
        assert_eq!(compute_display_rect(&VideoFrame::new(0.0, 0.0), container), Rect::ZERO);
        assert_eq!(compute_display_rect(&VideoFrame::new(-5.0, 10.0), container), Rect::ZERO);
        assert_eq!(
            compute_display_rect(&VideoFrame::new(1920.0, 1080.0), Size::new(0.0, 844.0)),
            Rect::ZERO
        );
        assert_eq!(
            compute_display_rect(&VideoFrame::new(f32::NAN, 1080.0), container),
            Rect::ZERO
        );
    }

    #[test]
    fn view_to_video_scales_by_display_fraction() {
        let video = VideoFrame::new(1920.0, 1080.0);
        let display = Rect::new(0.0, 312.3125, 390.0, 219.375);

        let full = view_to_video(&display, &display, &video);
        assert!(full.approx_eq(&video.bounds(), TOLERANCE));

        let quarter = Rect::new(97.5, 312.3125 + 54.84375, 195.0, 109.6875);
        let mapped = view_to_video(&quarter, &display, &video);
        assert!(mapped.approx_eq(&Rect::new(480.0, 270.0, 960.0, 540.0), TOLERANCE));
    }

    #[test]
    fn view_to_video_clamps_origin_then_size() {
        let video = VideoFrame::new(100.0, 100.0);
        let display = Rect::new(0.0, 0.0, 100.0, 100.0);

        let left_overflow = view_to_video(&Rect::new(-10.0, 0.0, 50.0, 50.0), &display, &video);
        assert_eq!(left_overflow, Rect::new(0.0, 0.0, 50.0, 50.0));

        let right_overflow = view_to_video(&Rect::new(80.0, 90.0, 50.0, 50.0), &display, &video);
        assert_eq!(right_overflow, Rect::new(80.0, 90.0, 20.0, 10.0));
    }

    #[test]
    fn view_to_video_with_empty_display_is_zero() {
        let video = VideoFrame::new(1920.0, 1080.0);
        let rect = Rect::new(10.0, 10.0, 50.0, 50.0);
        assert_eq!(view_to_video(&rect, &Rect::ZERO, &video), Rect::ZERO);
        assert_eq!(video_to_view(&rect, &Rect::ZERO, &video), Rect::ZERO);
    }

    #[test]
    fn conversions_round_trip() {
        let video = VideoFrame::new(1920.0, 1080.0);
        let display = compute_display_rect(&video, Size::new(390.0, 844.0));

        let view_rects = [
            Rect::new(display.x, display.y, display.width, display.height),
            Rect::new(20.0, display.y + 20.0, 350.0, 179.375),
            Rect::new(100.0, display.y + 5.5, 33.3, 80.1),
        ];
        for rect in view_rects {
            let back = video_to_view(&view_to_video(&rect, &display, &video), &display, &video);
            assert!(back.approx_eq(&rect, TOLERANCE), "{rect:?} came back as {back:?}");
        }

        let video_rect = Rect::new(123.0, 45.0, 678.0, 901.0 - 45.0);
        let back = view_to_video(&video_to_view(&video_rect, &display, &video), &display, &video);
        assert!(back.approx_eq(&video_rect, 0.1));
    }
}
