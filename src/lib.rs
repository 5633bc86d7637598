// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Interactive video crop engine: maps pointer and pinch gestures over a
// letterboxed preview into a constrained crop rect in video-pixel space.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
pub mod replay;
pub mod ui;

pub use app::crop::{CropSession, GestureChannel, GestureEvent, InteractionState, classify};
pub use config::CropConfig;
pub use domain::aspect::AspectRatioMode;
pub use domain::constraint::ConstraintSolver;
pub use domain::geometry::{
    ContainerBounds, Point, Rect, Size, VideoFrame, compute_display_rect, video_to_view,
    view_to_video,
};
pub use domain::handle::HandleType;
