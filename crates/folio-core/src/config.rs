//! Interaction thresholds and delays, loadable from `folio.toml`.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! [overlay]
//! close_delay_ms = 250
//!
//! [presentation]
//! autoplay_interval_ms = 8000
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the positionable shape widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Smallest allowed diameter in pixels.
    pub min_size: f64,
    /// Diameter on mount.
    pub initial_size: f64,
    /// Edge length of the square resize-handle hit target.
    pub handle_size: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            min_size: 50.0,
            initial_size: 200.0,
            handle_size: 8.0,
        }
    }
}

/// Settings for the control-center overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Downward scroll (px) after which the handle hides.
    pub scroll_hide_threshold: f64,
    /// Downward handle drag (px) that opens the panel.
    pub drag_open_threshold: f64,
    /// Delay between mounting the panel and making it visible.
    pub open_delay_ms: u64,
    /// Exit transition length; the panel unmounts after it.
    pub close_delay_ms: u64,
    /// Viewports narrower than this use the fullscreen layout.
    pub mobile_breakpoint: f64,
    /// Panel top offset used before the handle has been measured.
    pub fallback_top: f64,
    /// Panel right offset used before the handle has been measured.
    pub fallback_right: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            scroll_hide_threshold: 20.0,
            drag_open_threshold: 50.0,
            open_delay_ms: 10,
            close_delay_ms: 300,
            mobile_breakpoint: 768.0,
            fallback_top: 64.0,
            fallback_right: 16.0,
        }
    }
}

impl OverlayConfig {
    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.open_delay_ms)
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }
}

/// Settings for the slide presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Autoplay advance period.
    pub autoplay_interval_ms: u64,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5000,
        }
    }
}

impl PresentationConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

/// Complete interaction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub shape: ShapeConfig,
    pub overlay: OverlayConfig,
    pub presentation: PresentationConfig,
}

impl InteractionConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Load the config file if it exists, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or invalid one is logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }
}

/// Config path from `FOLIO_CONFIG`, or `folio.toml` in the working directory.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = InteractionConfig::default();

        assert!((config.shape.min_size - 50.0).abs() < f64::EPSILON);
        assert!((config.overlay.scroll_hide_threshold - 20.0).abs() < f64::EPSILON);
        assert!((config.overlay.drag_open_threshold - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.overlay.close_delay(), Duration::from_millis(300));
        assert_eq!(config.overlay.open_delay(), Duration::from_millis(10));
        assert!((config.overlay.mobile_breakpoint - 768.0).abs() < f64::EPSILON);
        assert_eq!(
            config.presentation.autoplay_interval(),
            Duration::from_millis(5000)
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = InteractionConfig::from_toml_str(
            r#"
            [overlay]
            close_delay_ms = 250

            [presentation]
            autoplay_interval_ms = 8000
            "#,
        )
        .unwrap();

        assert_eq!(config.overlay.close_delay_ms, 250);
        assert_eq!(config.overlay.open_delay_ms, 10);
        assert_eq!(config.presentation.autoplay_interval_ms, 8000);
        assert_eq!(config.shape, ShapeConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = InteractionConfig::from_toml_str("[shape]\nmin_size = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[shape]\nmin_size = 80.0").unwrap();

        let config = InteractionConfig::load(file.path()).unwrap();
        assert!((config.shape.min_size - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        assert!(matches!(
            InteractionConfig::load(&path),
            Err(ConfigError::Io { .. })
        ));
        assert_eq!(
            InteractionConfig::load_or_default(&path),
            InteractionConfig::default()
        );
    }

    #[test]
    fn test_load_or_default_with_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [").unwrap();

        assert_eq!(
            InteractionConfig::load_or_default(file.path()),
            InteractionConfig::default()
        );
    }
}
