// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// User-tunable crop configuration, loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constant::{
    CONFIG_DIR, CONFIG_FILE, HANDLE_SIZE, HANDLE_TOUCH_SIZE, INITIAL_INSET, MIN_CROP_SIZE,
};

/// Configuration for the crop engine and its overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Minimum crop width and height in view points.
    pub min_crop_size: f32,
    /// Side of the square hit target around each handle.
    pub handle_touch_size: f32,
    /// Visual side of a drawn handle marker.
    pub handle_size: f32,
    /// Margin between the display rect and the default crop.
    pub initial_inset: f32,
    /// Whether the rule-of-thirds grid is drawn.
    pub show_grid: bool,
    /// Whether a cancelled gesture restores the pre-gesture crop.
    pub cancel_reverts: bool,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            min_crop_size: MIN_CROP_SIZE,
            handle_touch_size: HANDLE_TOUCH_SIZE,
            handle_size: HANDLE_SIZE,
            initial_inset: INITIAL_INSET,
            show_grid: true,
            cancel_reverts: true,
        }
    }
}

impl CropConfig {
    /// Load the config from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => match default_path().filter(|p| p.exists()) {
                Some(path) => Self::load_from_path(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config.sanitized())
    }

    pub fn save_to_path(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Replace non-positive sizes with their defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fields = [
            ("min_crop_size", &mut self.min_crop_size, defaults.min_crop_size),
            ("handle_touch_size", &mut self.handle_touch_size, defaults.handle_touch_size),
            ("handle_size", &mut self.handle_size, defaults.handle_size),
        ];
        for (name, value, default) in fields {
            if !value.is_finite() || *value <= 0.0 {
                log::warn!("Invalid {name} {value}, using {default}");
                *value = default;
            }
        }
        if !self.initial_inset.is_finite() || self.initial_inset < 0.0 {
            log::warn!("Invalid initial_inset {}, using {}", self.initial_inset, defaults.initial_inset);
            self.initial_inset = defaults.initial_inset;
        }
        self
    }
}

/// `<config_dir>/vidcrop/config.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "min_crop_size = 32.0\nshow_grid = false\n").unwrap();

        let config = CropConfig::load(Some(&path)).unwrap();
        assert_eq!(config.min_crop_size, 32.0);
        assert!(!config.show_grid);
        assert_eq!(config.handle_touch_size, HANDLE_TOUCH_SIZE);
        assert!(config.cancel_reverts);
    }

    #[test]
    fn invalid_sizes_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "min_crop_size = -4.0\nhandle_touch_size = 0.0\n").unwrap();

        let config = CropConfig::load(Some(&path)).unwrap();
        assert_eq!(config.min_crop_size, MIN_CROP_SIZE);
        assert_eq!(config.handle_touch_size, HANDLE_TOUCH_SIZE);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = CropConfig {
            initial_inset: 8.0,
            cancel_reverts: false,
            ..CropConfig::default()
        };
        config.save_to_path(&path).unwrap();
        assert_eq!(CropConfig::load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CropConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "min_crop_size = \"big\"").unwrap();
        assert!(CropConfig::load(Some(&path)).is_err());
    }
}
