// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure crop domain: geometry, ratio modes, handles, and the constraint solver.
// No interaction state, no rendering.

pub mod aspect;
pub mod constraint;
pub mod geometry;
pub mod handle;
