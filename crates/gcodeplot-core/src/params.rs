//! Conversion parameters
//!
//! The values that shape one conversion run. They are resolved once at
//! startup (defaults, config file, command line) and handed to the toolpath
//! generator and the G-code emitter by reference. Nothing in the engine
//! mutates them.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Default cutting feed rate
pub const DEFAULT_FEED_RATE: f64 = 5000.0;
/// Default number of straight segments per circle
pub const DEFAULT_ACCURACY: u32 = 60;
/// Smallest accuracy that still leaves a feed move after positioning
pub const MIN_ACCURACY: u32 = 3;
/// Default print area width
pub const DEFAULT_WIDTH: f64 = 200.0;
/// Default print area height
pub const DEFAULT_HEIGHT: f64 = 200.0;
/// Largest fixed precision accepted for coordinates
pub const MAX_DECIMAL_PLACES: usize = 10;

/// Immutable parameters for one conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParameters {
    /// Feed rate written on every cutting move
    pub feed_rate: f64,
    /// Angular subdivision count used when sampling circles
    pub accuracy: u32,
    /// Print area width. Carried for reporting only, never enforced.
    pub width: f64,
    /// Print area height. Carried for reporting only, never enforced.
    pub height: f64,
    /// Fixed number of decimals for coordinates; `None` prints the shortest form
    pub decimal_places: Option<usize>,
    /// Verbose tracing of the conversion
    pub debug: bool,
}

impl Default for ConversionParameters {
    fn default() -> Self {
        Self {
            feed_rate: DEFAULT_FEED_RATE,
            accuracy: DEFAULT_ACCURACY,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            decimal_places: None,
            debug: false,
        }
    }
}

impl ConversionParameters {
    /// Create parameters with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed_rate(mut self, feed_rate: f64) -> Self {
        self.feed_rate = feed_rate;
        self
    }

    pub fn with_accuracy(mut self, accuracy: u32) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: Option<usize>) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<()> {
        if !self.feed_rate.is_finite() || self.feed_rate <= 0.0 {
            return Err(ConvertError::invalid_parameter(
                "feed_rate",
                format!("must be a positive number, got {}", self.feed_rate),
            ));
        }

        if self.accuracy < MIN_ACCURACY {
            return Err(ConvertError::invalid_parameter(
                "accuracy",
                format!("must be at least {}, got {}", MIN_ACCURACY, self.accuracy),
            ));
        }

        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ConvertError::invalid_parameter(
                "width",
                format!("must be a positive number, got {}", self.width),
            ));
        }

        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ConvertError::invalid_parameter(
                "height",
                format!("must be a positive number, got {}", self.height),
            ));
        }

        if let Some(places) = self.decimal_places {
            if places > MAX_DECIMAL_PLACES {
                return Err(ConvertError::invalid_parameter(
                    "decimal_places",
                    format!("must be at most {}, got {}", MAX_DECIMAL_PLACES, places),
                ));
            }
        }

        Ok(())
    }
}
