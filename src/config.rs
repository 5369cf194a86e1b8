use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::Dimensions;
use crate::element::common::{DEFAULT_BACKGROUND_COLOR, DUPLICATE_OFFSET};
use crate::error::ConfigError;

/// Bounds and step for the zoom control, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: 25,
            max: 200,
            step: 25,
            default: 100,
        }
    }
}

impl ZoomSettings {
    pub fn clamp(&self, zoom: u32) -> u32 {
        // A misconfigured max below min must not panic in `clamp`.
        zoom.clamp(self.min, self.max.max(self.min))
    }
}

/// Editor settings. Missing fields fall back to their defaults, so older
/// config files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Size of the blank canvas
    pub default_dimensions: Dimensions,
    /// Fill of the blank canvas background
    pub blank_background: String,
    pub zoom: ZoomSettings,
    pub show_grid: bool,
    /// Shift applied to duplicates on both axes
    pub duplicate_offset: i32,
    /// JPEG quality sent with export requests (1..=100)
    pub export_quality: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_dimensions: Dimensions::default(),
            blank_background: DEFAULT_BACKGROUND_COLOR.to_string(),
            zoom: ZoomSettings::default(),
            show_grid: true,
            duplicate_offset: DUPLICATE_OFFSET,
            export_quality: 100,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
