//! Directory configuration.
//!
//! Every field has a default, so an empty TOML file is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::view::LatLng;

/// Map settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial center (Brasília)
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: u8,
    /// Zoom used when centering on a single lab
    pub focus_zoom: u8,
    /// Fraction of the marker bounding box added on each side when fitting
    pub fit_padding: f64,
    /// Tile URL template
    pub tile_url: String,
    /// Tile attribution text
    pub attribution: String,
    /// Marker diameter in pixels
    pub marker_size: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(-15.7939869, -47.8828),
            zoom: 4,
            focus_zoom: 10,
            fit_padding: 0.1,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            marker_size: 20,
        }
    }
}

/// Top-level configuration for a directory page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub map: MapConfig,
    /// Widest window (in CSS pixels) that still uses the collapsible menu
    pub menu_breakpoint: u32,
    /// How long a notification stays on screen
    pub notification_ms: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            menu_breakpoint: 1023,
            notification_ms: 3000,
        }
    }
}

impl DirectoryConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(DirectoryConfig::from_toml_str("").unwrap(), DirectoryConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = DirectoryConfig::from_toml_str(
            r#"
            notification_ms = 1500

            [map]
            focus_zoom = 12
            center = { lat = -23.55, lng = -46.63 }
            "#,
        )
        .unwrap();
        assert_eq!(config.notification_ms, 1500);
        assert_eq!(config.menu_breakpoint, 1023);
        assert_eq!(config.map.focus_zoom, 12);
        assert_eq!(config.map.center, LatLng::new(-23.55, -46.63));
        assert_eq!(config.map.zoom, 4);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            DirectoryConfig::from_toml_str("map = 3"),
            Err(ConfigError::Toml(_))
        ));
    }
}
