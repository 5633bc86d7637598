// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// Overlay render contract and surfaces.

pub mod overlay;
#[cfg(feature = "raster")]
pub mod raster;

// Re-exports for convenience
pub use overlay::{OverlayModel, OverlaySurface, paint};
#[cfg(feature = "raster")]
pub use raster::RasterSurface;
