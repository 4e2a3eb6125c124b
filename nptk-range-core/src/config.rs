//! # Range Configuration
//!
//! [RangeConfig] describes the domain of a slider: its bounds, step, scale
//! and current value(s). It is owned by the widget and only ever read by the
//! [ValueTransformer](crate::transform::ValueTransformer).
//!
//! ## Configuration File Format
//!
//! ```toml
//! min_value = 1
//! max_value = 100000
//! step = 1
//! log_scale = true
//! multi = true
//!
//! [value]
//! min = 10
//! max = 2500
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RangeError, RangeResult};
use crate::values::HandleId;

/// A configured slider value: one number, or one number per handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// The value of a single-value slider.
    Number(f64),
    /// The values of a multi-value slider, keyed by handle.
    Map(IndexMap<HandleId, f64>),
}

impl ConfigValue {
    /// Returns the number if this is a finite [ConfigValue::Number].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    /// Returns the map if this is a non-empty [ConfigValue::Map] of finite numbers.
    pub fn as_map(&self) -> Option<&IndexMap<HandleId, f64>> {
        match self {
            Self::Map(map) if !map.is_empty() && map.values().all(|v| v.is_finite()) => Some(map),
            _ => None,
        }
    }

    fn matches_mode(&self, multi: bool) -> bool {
        matches!((self, multi), (Self::Number(_), false) | (Self::Map(_), true))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<IndexMap<HandleId, f64>> for ConfigValue {
    fn from(map: IndexMap<HandleId, f64>) -> Self {
        Self::Map(map)
    }
}

/// Configuration of a range slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// The lowest selectable value.
    pub min_value: f64,
    /// The highest selectable value.
    pub max_value: f64,
    /// Granularity values snap to.
    pub step: f64,
    /// Map the track logarithmically instead of linearly.
    pub log_scale: bool,
    /// Use named handles instead of a single value.
    pub multi: bool,
    /// The current value(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ConfigValue>,
    /// Used when [RangeConfig::value] is missing or unusable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ConfigValue>,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 100.0,
            step: 1.0,
            log_scale: false,
            multi: false,
            value: None,
            default_value: None,
        }
    }
}

impl RangeConfig {
    /// Create a linear single-value configuration spanning `min_value..=max_value`.
    pub fn new(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
            ..Default::default()
        }
    }

    /// Sets the step and returns itself.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Enables or disables the logarithmic scale and returns itself.
    pub fn with_log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = log_scale;
        self
    }

    /// Sets the current single value and returns itself.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(ConfigValue::Number(value));
        self
    }

    /// Switches to multi-value mode with the given handle values and returns itself.
    pub fn with_values<K: Into<HandleId>>(mut self, values: impl IntoIterator<Item = (K, f64)>) -> Self {
        self.multi = true;
        self.value = Some(ConfigValue::Map(
            values.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        ));
        self
    }

    /// Sets the default value(s) and returns itself.
    pub fn with_default_value(mut self, default_value: impl Into<ConfigValue>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Sets multi-value mode and returns itself.
    pub fn with_multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// The distance between the bounds.
    pub fn span(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Check the configuration for values the conversions cannot use meaningfully.
    pub fn validate(&self) -> RangeResult<()> {
        if !self.min_value.is_finite() || !self.max_value.is_finite() || self.min_value >= self.max_value {
            return Err(RangeError::invalid_bounds(self.min_value, self.max_value));
        }

        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(RangeError::invalid_step(self.step));
        }

        for value in [&self.value, &self.default_value].into_iter().flatten() {
            if !value.matches_mode(self.multi) {
                return Err(RangeError::ValueShapeMismatch { multi: self.multi });
            }
        }

        Ok(())
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> RangeResult<Self> {
        Self::parse(content, None)
    }

    /// Load and validate a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> RangeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RangeError::not_found(path));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content, Some(path.to_path_buf()))?;
        log::debug!("Loaded range config from {}", path.display());
        Ok(config)
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml_string(&self) -> RangeResult<String> {
        toml::to_string(self).map_err(|e| RangeError::Serialization(e.to_string()))
    }

    fn parse(content: &str, path: Option<PathBuf>) -> RangeResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| RangeError::parse_error(path, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
