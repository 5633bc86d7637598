// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/crop/gesture.rs
//
// Gesture event stream fed into the crop session.

use serde::{Deserialize, Serialize};

use crate::domain::geometry::Point;

/// Input channel that owns an in-flight gesture.
///
/// Only one channel drives the crop at a time; ownership is taken when a
/// gesture begins and released when it ends or is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureChannel {
    /// Single pointer drag (touch or mouse).
    Pointer,
    /// Two-finger pinch.
    Pinch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Began(Point),
    Changed(Point),
    Ended,
    /// Cancels whichever channel owns the gesture.
    Cancelled,
    PinchBegan,
    /// Scale relative to the pinch start.
    PinchChanged(f32),
    PinchEnded,
}

impl GestureEvent {
    /// Channel this event belongs to, `None` for channel-agnostic events.
    pub fn channel(&self) -> Option<GestureChannel> {
        match self {
            Self::Began(_) | Self::Changed(_) | Self::Ended => Some(GestureChannel::Pointer),
            Self::PinchBegan | Self::PinchChanged(_) | Self::PinchEnded => {
                Some(GestureChannel::Pinch)
            }
            Self::Cancelled => None,
        }
    }
}
