//! Error handling for GCodePlot
//!
//! Two layers of errors exist:
//! - [`ShapeError`] describes why a single SVG element could not be turned
//!   into a shape. These are recoverable: the element is skipped and the
//!   conversion continues.
//! - [`ConvertError`] describes failures that end a conversion run
//!   (unreadable input, unwritable output, invalid parameters).
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Per-element error type
///
/// Raised while reading the attributes of one SVG element. The element that
/// produced it contributes no motion to the program.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A required attribute is absent or empty
    #[error("Missing required attribute '{attribute}'")]
    MissingAttribute {
        /// The attribute name.
        attribute: String,
    },

    /// An attribute is present but is not a finite number
    #[error("Invalid number for attribute '{attribute}': '{value}'")]
    InvalidNumber {
        /// The attribute name.
        attribute: String,
        /// The raw attribute value.
        value: String,
    },

    /// A token of a `points` list is not an `x,y` pair
    #[error("Invalid point '{token}'")]
    InvalidPoint {
        /// The offending token.
        token: String,
    },

    /// A polyline or polygon has too few points
    #[error("Not enough points: got {count}, need at least {required}")]
    NotEnoughPoints {
        /// Number of points found.
        count: usize,
        /// Minimum number of points accepted.
        required: usize,
    },
}

/// Fatal conversion error type
///
/// Any of these aborts the run after the output destination (if it was
/// opened) has been released.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input document could not be read
    #[error("Failed to read input {}: {source}", .path.display())]
    InputRead {
        /// Path of the input document.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The input document is not well-formed XML
    #[error("Failed to parse input document: {reason}")]
    InputParse {
        /// Parser diagnostic.
        reason: String,
    },

    /// The output destination could not be opened for writing
    #[error("Failed to open output {}: {source}", .path.display())]
    OutputOpen {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Writing a program line failed mid-stream
    #[error("Failed to write G-code: {0}")]
    Write(#[from] io::Error),

    /// A conversion parameter is outside its valid range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConvertError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error came from reading or parsing the input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConvertError::InputRead { .. } | ConvertError::InputParse { .. }
        )
    }

    /// Check if this error came from the output destination
    pub fn is_output_error(&self) -> bool {
        matches!(self, ConvertError::OutputOpen { .. } | ConvertError::Write(_))
    }
}

/// Result type using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;
