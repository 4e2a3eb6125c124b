#![warn(missing_docs)]

//! Core functionality for nptk range sliders => See the `nptk-range` crate for more.
//!
//! The crate converts between pixel positions on a slider track, fractions of
//! the track and values of the slider's domain. It draws nothing and holds no
//! state; widgets feed it their [RangeConfig](config::RangeConfig) and
//! [TrackGeometry](geometry::TrackGeometry) on every interaction.
//!
//! ```rust
//! use nptk_range_core::config::RangeConfig;
//! use nptk_range_core::geometry::TrackGeometry;
//! use nptk_range_core::transform::ValueTransformer;
//!
//! let config = RangeConfig::new(0.0, 100.0);
//! let track = TrackGeometry::new(200.0, 0.0);
//! let transformer = ValueTransformer::new(&config);
//!
//! let position = transformer.position_from_value(&track, 50.0);
//! assert_eq!(position.x, 100.0);
//! assert_eq!(transformer.value_from_position(&track, position), 50.0);
//! ```

/// Slider configuration and its TOML loader.
pub mod config;

/// Error types for configuration loading and validation.
pub mod error;

/// Pointer and touch events.
pub mod event;

/// Track geometry and points.
pub mod geometry;

/// Conversions between positions, percentages and values.
pub mod transform;

/// Handle ids and handle values.
pub mod values;
