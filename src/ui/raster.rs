// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/raster.rs
//
// Software overlay surface backed by an RGBA image buffer.

use std::path::Path;

use anyhow::{Context, bail};
use image::{Rgba, RgbaImage};

use super::overlay::{Color, OverlayModel, OverlaySurface, paint};
use crate::constant::MAX_RASTER_SIDE;
use crate::domain::geometry::Rect;

pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Transparent surface of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Surface sized to the model's container, with the overlay painted on it.
    ///
    /// Fails for containers that are empty, non-finite or larger than
    /// [`MAX_RASTER_SIDE`] on either side.
    pub fn render(model: &OverlayModel) -> anyhow::Result<Self> {
        let container = model.container;
        if container.is_empty() {
            bail!(
                "Cannot render overlay for container {} x {}",
                container.width,
                container.height
            );
        }
        let limit = MAX_RASTER_SIDE as f32;
        if container.width > limit || container.height > limit {
            bail!(
                "Overlay {} x {} exceeds {MAX_RASTER_SIDE} pixels per side",
                container.width,
                container.height
            );
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mut surface = Self::new(
            container.width.ceil() as u32,
            container.height.ceil() as u32,
        );
        paint(model, &mut surface);
        Ok(surface)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write overlay {}", path.display()))
    }
}

impl OverlaySurface for RasterSurface {
    /// Covers every pixel whose center lies inside `rect`, blending source-over.
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (width, height) = self.image.dimensions();
        let x0 = pixel_start(rect.x, width);
        let x1 = pixel_start(rect.right(), width);
        let y0 = pixel_start(rect.y, height);
        let y1 = pixel_start(rect.bottom(), height);

        for y in y0..y1 {
            for x in x0..x1 {
                let pixel = self.image.get_pixel_mut(x, y);
                *pixel = blend(*pixel, color);
            }
        }
    }
}

/// First pixel whose center is at or after `edge`, clamped to `0..=limit`.
fn pixel_start(edge: f32, limit: u32) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (edge - 0.5).ceil().max(0.0) as u32;
    index.min(limit)
}

fn blend(dst: Rgba<u8>, src: Color) -> Rgba<u8> {
    let [dr, dg, db, da] = dst.0.map(|c| f32::from(c) / 255.0);
    let sa = src.a.clamp(0.0, 1.0);
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: f32, d: f32| (s * sa + d * da * (1.0 - sa)) / out_a;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([
        to_u8(channel(src.r, dr)),
        to_u8(channel(src.g, dg)),
        to_u8(channel(src.b, db)),
        to_u8(out_a),
    ])
}
