// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/aspect.rs
//
// Aspect-ratio lock modes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// User-selected aspect-ratio lock for the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AspectRatioMode {
    #[default]
    Free,
    /// 1:1
    Square,
    /// 9:16
    Portrait,
    /// 16:9
    Landscape,
}

impl AspectRatioMode {
    pub const ALL: [AspectRatioMode; 4] = [Self::Free, Self::Square, Self::Portrait, Self::Landscape];

    /// Width / height target, or `None` when unlocked.
    pub fn target_ratio(self) -> Option<f32> {
        match self {
            Self::Free => None,
            Self::Square => Some(1.0),
            Self::Portrait => Some(9.0 / 16.0),
            Self::Landscape => Some(16.0 / 9.0),
        }
    }

    pub fn is_locked(self) -> bool {
        self.target_ratio().is_some()
    }

    /// Largest rect of the target ratio centered inside `area`.
    /// Returns `area` unchanged when unlocked.
    pub fn fit_centered(self, area: &Rect) -> Rect {
        let Some(ratio) = self.target_ratio() else {
            return *area;
        };
        let (width, height) = if area.width / area.height > ratio {
            (area.height * ratio, area.height)
        } else {
            (area.width, area.width / ratio)
        };
        let center = area.center();
        Rect::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }
}

impl fmt::Display for AspectRatioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "Free"),
            Self::Square => write!(f, "1:1"),
            Self::Portrait => write!(f, "9:16"),
            Self::Landscape => write!(f, "16:9"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_centered_keeps_ratio_inside_area() {
        let area = Rect::new(20.0, 332.3125, 350.0, 179.375);
        for mode in AspectRatioMode::ALL {
            let fitted = mode.fit_centered(&area);
            assert!(area.contains_rect(&fitted), "{mode}: {fitted:?}");
            if let Some(ratio) = mode.target_ratio() {
                assert!((fitted.width / fitted.height - ratio).abs() < 1e-3);
                assert!((fitted.center().x - area.center().x).abs() < 1e-3);
                assert!((fitted.center().y - area.center().y).abs() < 1e-3);
            } else {
                assert_eq!(fitted, area);
            }
        }
    }

    #[test]
    fn square_in_wide_area_uses_height() {
        let fitted = AspectRatioMode::Square.fit_centered(&Rect::new(0.0, 0.0, 300.0, 100.0));
        assert_eq!(fitted, Rect::new(100.0, 0.0, 100.0, 100.0));
    }
}
