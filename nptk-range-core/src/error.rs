//! # Range Error Types
//!
//! Errors produced while loading or validating a [RangeConfig](crate::config::RangeConfig).
//! Conversions themselves never fail; they fall back to zero instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring a range slider.
#[derive(Error, Debug)]
pub enum RangeError {
    /// Configuration file was not found.
    #[error("Range config file not found: {path:?}")]
    ConfigNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a configuration file or string.
    #[error("Failed to parse range config {path:?}: {details}")]
    ConfigParse {
        /// The path of the file that failed to parse, if any.
        path: Option<PathBuf>,
        /// Details about the parse error.
        details: String,
    },

    /// The bounds are not finite or `min` is not below `max`.
    #[error("Invalid range bounds: min {min} must be below max {max}")]
    InvalidBounds {
        /// The configured minimum.
        min: f64,
        /// The configured maximum.
        max: f64,
    },

    /// The step is not a positive finite number.
    #[error("Invalid step {step}: must be a positive finite number")]
    InvalidStep {
        /// The configured step.
        step: f64,
    },

    /// A configured value has the wrong shape for the slider mode.
    #[error("Configured value does not match the slider mode (multi: {multi})")]
    ValueShapeMismatch {
        /// Whether the slider is in multi-value mode.
        multi: bool,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing range data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for range configuration operations.
pub type RangeResult<T> = Result<T, RangeError>;

impl RangeError {
    /// Create a config not found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a config parse error.
    pub fn parse_error(path: Option<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParse {
            path,
            details: details.into(),
        }
    }

    /// Create an invalid bounds error.
    pub fn invalid_bounds(min: f64, max: f64) -> Self {
        Self::InvalidBounds { min, max }
    }

    /// Create an invalid step error.
    pub fn invalid_step(step: f64) -> Self {
        Self::InvalidStep { step }
    }
}
