// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/crop/mod.rs
//
// Crop interaction module: gesture stream, hit-testing, and the session
// state machine.

mod gesture;
mod hit_test;
mod session;

pub use gesture::{GestureChannel, GestureEvent};
pub use hit_test::classify;
pub use session::{CropObserver, CropSession, InteractionState};
