// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Interactive layer: gesture handling and crop session state.

pub mod crop;
