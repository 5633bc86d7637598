// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/crop/hit_test.rs
//
// Classify a gesture start point against the current crop rect.

use super::session::InteractionState;
use crate::domain::geometry::{Point, Rect};
use crate::domain::handle::HandleType;

/// Decide what a press at `point` does to `crop`.
///
/// Handle centers come from [`HandleType::position`] on `crop`. Handles are
/// tested in [`HandleType::ALL`] order (corners before edges), each with a
/// square hit target of side `touch_size`. A press inside the crop body moves
/// it only when it is at least `touch_size` from every handle center; anything
/// else draws a new crop.
pub fn classify(point: Point, crop: &Rect, touch_size: f32) -> InteractionState {
    if crop.is_empty() {
        return InteractionState::DrawingNew;
    }

    let half = touch_size / 2.0;
    if let Some(handle) = HandleType::ALL
        .into_iter()
        .find(|handle| point_in_handle(point, handle.position(crop), half))
    {
        return InteractionState::Resizing(handle);
    }

    let clear_of_handles = HandleType::ALL
        .into_iter()
        .all(|handle| point.distance(handle.position(crop)) >= touch_size);

    if crop.contains(point) && clear_of_handles {
        InteractionState::Moving
    } else {
        InteractionState::DrawingNew
    }
}

fn point_in_handle(point: Point, handle_center: Point, half: f32) -> bool {
    point.x >= handle_center.x - half
        && point.x <= handle_center.x + half
        && point.y >= handle_center.y - half
        && point.y <= handle_center.y + half
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::HANDLE_TOUCH_SIZE;

    fn crop() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 200.0)
    }

    fn at(x: f32, y: f32) -> InteractionState {
        classify(Point::new(x, y), &crop(), HANDLE_TOUCH_SIZE)
    }

    #[test]
    fn corner_handles() {
        assert_eq!(at(100.0, 100.0), InteractionState::Resizing(HandleType::TopLeft));
        assert_eq!(at(300.0, 100.0), InteractionState::Resizing(HandleType::TopRight));
        assert_eq!(at(100.0, 300.0), InteractionState::Resizing(HandleType::BottomLeft));
        assert_eq!(at(300.0, 300.0), InteractionState::Resizing(HandleType::BottomRight));
    }

    #[test]
    fn corner_hit_target_is_generous() {
        assert_eq!(at(121.0, 79.0), InteractionState::Resizing(HandleType::TopLeft));
        assert_eq!(at(278.5, 321.5), InteractionState::Resizing(HandleType::BottomRight));
    }

    #[test]
    fn edge_handles() {
        assert_eq!(at(200.0, 100.0), InteractionState::Resizing(HandleType::TopCenter));
        assert_eq!(at(200.0, 300.0), InteractionState::Resizing(HandleType::BottomCenter));
        assert_eq!(at(100.0, 200.0), InteractionState::Resizing(HandleType::MiddleLeft));
        assert_eq!(at(300.0, 200.0), InteractionState::Resizing(HandleType::MiddleRight));
    }

    #[test]
    fn body_moves() {
        assert_eq!(at(200.0, 200.0), InteractionState::Moving);
        assert_eq!(at(140.0, 250.0), InteractionState::Moving);
    }

    #[test]
    fn body_near_handle_draws_new() {
        // Outside every hit square, but inside the touch radius of a handle.
        assert_eq!(at(125.0, 125.0), InteractionState::DrawingNew);
        assert_eq!(at(270.0, 220.0), InteractionState::DrawingNew);
        assert_eq!(at(200.0, 140.0), InteractionState::DrawingNew);
        // Just clear of the top-center handle.
        assert_eq!(at(200.0, 145.0), InteractionState::Moving);
    }

    #[test]
    fn small_crop_body_cannot_move() {
        let small = Rect::new(100.0, 100.0, 60.0, 60.0);
        let state = classify(Point::new(130.0, 130.0), &small, HANDLE_TOUCH_SIZE);
        assert_eq!(state, InteractionState::DrawingNew);
    }

    #[test]
    fn outside_draws_new() {
        assert_eq!(at(50.0, 50.0), InteractionState::DrawingNew);
        assert_eq!(at(350.0, 200.0), InteractionState::DrawingNew);
        assert_eq!(at(200.0, 330.0), InteractionState::DrawingNew);
    }

    #[test]
    fn small_crop_prefers_corners() {
        // Handle zones overlap; the top-center zone also covers both points.
        let small = Rect::new(100.0, 100.0, 20.0, 20.0);
        let state = classify(Point::new(110.0, 100.0), &small, HANDLE_TOUCH_SIZE);
        assert_eq!(state, InteractionState::Resizing(HandleType::TopLeft));

        let state = classify(Point::new(125.0, 95.0), &small, HANDLE_TOUCH_SIZE);
        assert_eq!(state, InteractionState::Resizing(HandleType::TopRight));
    }

    #[test]
    fn empty_crop_draws_new() {
        let state = classify(Point::new(0.0, 0.0), &Rect::ZERO, HANDLE_TOUCH_SIZE);
        assert_eq!(state, InteractionState::DrawingNew);
    }

    #[test]
    fn classify_is_pure() {
        let points = [(100.0, 100.0), (200.0, 200.0), (5.0, 5.0), (300.0, 210.0)];
        for (x, y) in points {
            assert_eq!(at(x, y), at(x, y));
        }
    }
}
