// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Engine constants that should not be changed by the user.

/// Minimum crop width and height in view points.
pub const MIN_CROP_SIZE: f32 = 20.0;

/// Side of the square touch target centered on each handle.
pub const HANDLE_TOUCH_SIZE: f32 = 44.0;

/// Visual side of a drawn handle marker.
pub const HANDLE_SIZE: f32 = 14.0;

/// Margin between the display rect and the default crop rect.
pub const INITIAL_INSET: f32 = 20.0;

/// Tolerance for float comparisons (ratio checks, change detection).
pub const GEOMETRY_EPSILON: f32 = 0.001;

/// Crop must exceed this in both dimensions before grid lines are drawn.
pub const GRID_MIN_EXTENT: f32 = 10.0;

/// Largest overlay side, in pixels, the raster surface will allocate.
pub const MAX_RASTER_SIDE: u32 = 16_384;

/// Config directory name below the platform config dir.
pub const CONFIG_DIR: &str = "vidcrop";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";
