//! Configuration file handling for GCodePlot
//!
//! Supports JSON and TOML files; the format follows the file extension.
//! Values resolve in layers: built-in defaults, then the configuration file,
//! then command-line overrides.
//!
//! ```toml
//! [conversion]
//! feed_rate = 3000.0
//! accuracy = 90
//! decimal_places = 3
//!
//! [machine]
//! width = 300.0
//! height = 200.0
//! ```

use gcodeplot_core::params::{
    DEFAULT_ACCURACY, DEFAULT_FEED_RATE, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DECIMAL_PLACES,
    MIN_ACCURACY,
};
use gcodeplot_core::ConversionParameters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "gcodeplot";
/// File name of the default configuration
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat(
                "config file must be .json or .toml".to_string(),
            )),
        }
    }
}

/// Conversion defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// Feed rate for cutting moves
    pub feed_rate: f64,
    /// Straight segments per circle
    pub accuracy: u32,
    /// Fixed decimals for coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<usize>,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            feed_rate: DEFAULT_FEED_RATE,
            accuracy: DEFAULT_ACCURACY,
            decimal_places: None,
        }
    }
}

/// Print area of the machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    /// Print area width in mm
    pub width: f64,
    /// Print area height in mm
    pub height: f64,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub feed_rate: Option<f64>,
    pub accuracy: Option<u32>,
    pub decimal_places: Option<usize>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Conversion defaults
    #[serde(default)]
    pub conversion: ConversionSettings,
    /// Machine print area
    #[serde(default)]
    pub machine: MachineSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform configuration directory for GCodePlot.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// `<config dir>/gcodeplot/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads the default configuration file if there is one.
    pub fn load_default() -> SettingsResult<Option<Self>> {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                debug!("Skipping default config: {}", e);
                return Ok(None);
            }
        };
        if !path.is_file() {
            debug!("No config file at {}", path.display());
            return Ok(None);
        }
        Self::load_from_file(&path).map(Some)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML). Missing parent directories are created.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        let write_err = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, content).map_err(write_err)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let conversion = &self.conversion;
        if !conversion.feed_rate.is_finite() || conversion.feed_rate <= 0.0 {
            return Err(ConfigError::out_of_range(
                "conversion.feed_rate",
                conversion.feed_rate,
                "must be > 0",
            ));
        }

        if conversion.accuracy < MIN_ACCURACY {
            return Err(ConfigError::out_of_range(
                "conversion.accuracy",
                conversion.accuracy,
                format!("must be at least {}", MIN_ACCURACY),
            ));
        }

        if let Some(places) = conversion.decimal_places {
            if places > MAX_DECIMAL_PLACES {
                return Err(ConfigError::out_of_range(
                    "conversion.decimal_places",
                    places,
                    format!("must be at most {}", MAX_DECIMAL_PLACES),
                ));
            }
        }

        for (key, value) in [
            ("machine.width", self.machine.width),
            ("machine.height", self.machine.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::out_of_range(key, value, "must be > 0"));
            }
        }

        Ok(())
    }

    /// Layers command-line values over this configuration.
    pub fn merge(&mut self, overrides: &SettingsOverrides) {
        if let Some(feed_rate) = overrides.feed_rate {
            self.conversion.feed_rate = feed_rate;
        }
        if let Some(accuracy) = overrides.accuracy {
            self.conversion.accuracy = accuracy;
        }
        if overrides.decimal_places.is_some() {
            self.conversion.decimal_places = overrides.decimal_places;
        }
        if let Some(width) = overrides.width {
            self.machine.width = width;
        }
        if let Some(height) = overrides.height {
            self.machine.height = height;
        }
    }

    /// Parameters for one conversion run.
    pub fn to_parameters(&self, debug: bool) -> ConversionParameters {
        ConversionParameters {
            feed_rate: self.conversion.feed_rate,
            accuracy: self.conversion.accuracy,
            width: self.machine.width,
            height: self.machine.height,
            decimal_places: self.conversion.decimal_places,
            debug,
        }
    }
}
