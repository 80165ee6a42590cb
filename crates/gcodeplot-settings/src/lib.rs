//! GCodePlot Settings Crate
//!
//! Loads, validates and saves the configuration file, and layers command-line
//! values over it.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, ConversionSettings, MachineSettings, SettingsOverrides};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
