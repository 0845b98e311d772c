//! Feature configuration.
//!
//! An explicit configuration value passed to the feature at construction;
//! there is no process-wide configuration object. Loadable from an INI file
//! with defaults-overlay semantics: a missing file yields defaults, present
//! keys override them.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

/// Default minimum zoom level passed through to the map view layer.
pub const DEFAULT_MINIMUM_ZOOM: f32 = 0.0;

/// Default maximum zoom level passed through to the map view layer.
pub const DEFAULT_MAXIMUM_ZOOM: f32 = 100.0;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// Invalid configuration value.
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

/// Configuration for the offline tile feature.
#[derive(Debug, Clone)]
pub struct FeatureConfig {
    /// Directory scanned for offline tile archives.
    pub offline_dir: PathBuf,

    /// Verbose per-candidate scan logging.
    pub debug: bool,

    /// Minimum zoom level, stored for the map view layer; not enforced here.
    pub minimum_zoom: f32,

    /// Maximum zoom level, stored for the map view layer; not enforced here.
    pub maximum_zoom: f32,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            offline_dir: default_offline_dir(),
            debug: false,
            minimum_zoom: DEFAULT_MINIMUM_ZOOM,
            maximum_zoom: DEFAULT_MAXIMUM_ZOOM,
        }
    }
}

impl FeatureConfig {
    /// Create a configuration scanning the given directory.
    pub fn new(offline_dir: impl Into<PathBuf>) -> Self {
        Self {
            offline_dir: offline_dir.into(),
            ..Default::default()
        }
    }

    /// Enable or disable verbose scan logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the zoom bounds passed through to the map view layer.
    pub fn with_zoom_bounds(mut self, minimum: f32, maximum: f32) -> Self {
        self.minimum_zoom = minimum;
        self.maximum_zoom = maximum;
        self
    }

    /// Load configuration from the default path (~/.offlinelayer/config.ini).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        parse_ini(&ini)
    }
}

/// Parse an `Ini` object into a `FeatureConfig`.
///
/// Starts from `FeatureConfig::default()` and overlays any values found.
fn parse_ini(ini: &Ini) -> Result<FeatureConfig, ConfigError> {
    let mut config = FeatureConfig::default();

    if let Some(section) = ini.section(Some("tiles")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.offline_dir = PathBuf::from(v);
            }
        }
        if let Some(v) = section.get("debug") {
            config.debug = match v.trim().to_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        section: "tiles".to_string(),
                        key: "debug".to_string(),
                        value: v.to_string(),
                        reason: "must be 'true' or 'false'".to_string(),
                    })
                }
            };
        }
    }

    if let Some(section) = ini.section(Some("zoom")) {
        if let Some(v) = section.get("minimum") {
            config.minimum_zoom = parse_zoom(v, "minimum")?;
        }
        if let Some(v) = section.get("maximum") {
            config.maximum_zoom = parse_zoom(v, "maximum")?;
        }
    }

    Ok(config)
}

fn parse_zoom(value: &str, key: &str) -> Result<f32, ConfigError> {
    value
        .trim()
        .parse::<f32>()
        .map_err(|_| ConfigError::InvalidValue {
            section: "zoom".to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected a numeric zoom level".to_string(),
        })
}

/// Default offline tiles directory under the platform data directory.
pub fn default_offline_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("offlinelayer")
        .join("offline_tiles")
}

/// Path to the config directory (~/.offlinelayer).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".offlinelayer")
}

/// Path to the config file (~/.offlinelayer/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FeatureConfig::default();

        assert_eq!(config.offline_dir, default_offline_dir());
        assert!(!config.debug);
        assert_eq!(config.minimum_zoom, DEFAULT_MINIMUM_ZOOM);
        assert_eq!(config.maximum_zoom, DEFAULT_MAXIMUM_ZOOM);
    }

    #[test]
    fn test_builder_setters() {
        let config = FeatureConfig::new("/sdcard/tiles")
            .with_debug(true)
            .with_zoom_bounds(3.0, 17.0);

        assert_eq!(config.offline_dir, PathBuf::from("/sdcard/tiles"));
        assert!(config.debug);
        assert_eq!(config.minimum_zoom, 3.0);
        assert_eq!(config.maximum_zoom, 17.0);
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.ini");

        let config = FeatureConfig::load_from(&path).unwrap();

        assert_eq!(config.offline_dir, default_offline_dir());
        assert!(!config.debug);
    }

    #[test]
    fn test_load_overlays_present_keys() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        std::fs::write(
            &path,
            "[tiles]\ndirectory = /data/offline_tiles\ndebug = true\n\n[zoom]\nminimum = 2\n",
        )
        .unwrap();

        let config = FeatureConfig::load_from(&path).unwrap();

        assert_eq!(config.offline_dir, PathBuf::from("/data/offline_tiles"));
        assert!(config.debug);
        assert_eq!(config.minimum_zoom, 2.0);
        // Untouched key keeps its default.
        assert_eq!(config.maximum_zoom, DEFAULT_MAXIMUM_ZOOM);
    }

    #[test]
    fn test_load_rejects_invalid_debug() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        std::fs::write(&path, "[tiles]\ndebug = maybe\n").unwrap();

        let err = FeatureConfig::load_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(err.to_string().contains("tiles.debug"));
    }

    #[test]
    fn test_load_rejects_invalid_zoom() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        std::fs::write(&path, "[zoom]\nmaximum = high\n").unwrap();

        let err = FeatureConfig::load_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_empty_directory_value_keeps_default() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        std::fs::write(&path, "[tiles]\ndirectory =\n").unwrap();

        let config = FeatureConfig::load_from(&path).unwrap();

        assert_eq!(config.offline_dir, default_offline_dir());
    }
}
