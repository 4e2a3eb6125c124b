//! # Value Transformer
//!
//! Converts between the three coordinate spaces of a slider:
//!
//! - **position**: pixels along the track, `0..=track.width`
//! - **percentage**: the fraction of the track, `0..=1`
//! - **value**: the configured domain, `min_value..=max_value`
//!
//! Every conversion is a pure function of the configuration, the track
//! geometry and its input. Degenerate inputs never fail: a conversion that
//! cannot produce a meaningful result returns `0`. The `checked_*` variants
//! return [None] in those cases instead.

mod log_scale;

use indexmap::IndexMap;

use self::log_scale::LogScale;
use crate::config::{ConfigValue, RangeConfig};
use crate::event::{self, PointerEvent};
use crate::geometry::{clamp, track_point, Point, TrackGeometry};
use crate::values::{Handles, Range, RangeValues};

/// Stateless conversions for one slider configuration.
#[derive(Debug, Clone, Copy)]
pub struct ValueTransformer<'a> {
    config: &'a RangeConfig,
}

impl<'a> ValueTransformer<'a> {
    /// Create a transformer reading from `config`.
    pub fn new(config: &'a RangeConfig) -> Self {
        Self { config }
    }

    /// The configuration this transformer reads from.
    pub fn config(&self) -> &'a RangeConfig {
        self.config
    }

    /// The fraction of the track at `position`, or [None] for a track without width.
    pub fn checked_percentage_from_position(&self, track: &TrackGeometry, position: Point) -> Option<f64> {
        finite(position.x / track.width)
    }

    /// The fraction (`0..=1`, not `0..=100`) of the track at `position`.
    pub fn percentage_from_position(&self, track: &TrackGeometry, position: Point) -> f64 {
        self.checked_percentage_from_position(track, position)
            .unwrap_or_else(|| zero("percentage_from_position"))
    }

    /// The fraction of the track at which `value` sits, after clamping it into bounds.
    pub fn checked_percentage_from_value(&self, value: f64) -> Option<f64> {
        let config = self.config;
        let value = clamp(value, config.min_value, config.max_value);

        if config.log_scale {
            // Values below the logarithmic floor of 1 would land before the track start.
            return self
                .checked_percentage_from_log_value(value)
                .map(|fraction| clamp(fraction, 0.0, 1.0));
        }

        finite((value - config.min_value) / config.span())
    }

    /// The fraction of the track at which `value` sits.
    pub fn percentage_from_value(&self, value: f64) -> f64 {
        self.checked_percentage_from_value(value)
            .unwrap_or_else(|| zero("percentage_from_value"))
    }

    /// Applies [ValueTransformer::percentage_from_value] to every handle.
    ///
    /// The ordering of the handles is not checked.
    pub fn percentages_from_values(&self, values: &RangeValues) -> RangeValues {
        values.map(|value| self.percentage_from_value(*value))
    }

    /// The track position of `value`.
    pub fn position_from_value(&self, track: &TrackGeometry, value: f64) -> Point {
        track_point(self.percentage_from_value(value) * track.width)
    }

    /// Applies [ValueTransformer::position_from_value] to every handle.
    pub fn positions_from_values(&self, track: &TrackGeometry, values: &RangeValues) -> Handles<Point> {
        values.map(|value| self.position_from_value(track, *value))
    }

    /// Inverse of [ValueTransformer::position_from_value].
    pub fn checked_value_from_position(&self, track: &TrackGeometry, position: Point) -> Option<f64> {
        let config = self.config;
        let fraction = self.percentage_from_position(track, position);

        if config.log_scale {
            return self.checked_log_value_from_percentage(fraction * 100.0);
        }

        finite(config.min_value + config.span() * fraction)
    }

    /// The value under `position`.
    ///
    /// On a logarithmic track the very start maps to `0` rather than the minimum;
    /// use [ValueTransformer::value_from_event] for a value that is always in bounds.
    pub fn value_from_position(&self, track: &TrackGeometry, position: Point) -> f64 {
        self.checked_value_from_position(track, position)
            .unwrap_or_else(|| zero("value_from_position"))
    }

    /// The value at `percentage` (`0..=100`) of a logarithmic track.
    ///
    /// Returns [None] for a zero or NaN percentage.
    pub fn checked_log_value_from_percentage(&self, percentage: f64) -> Option<f64> {
        if percentage == 0.0 || percentage.is_nan() {
            return None;
        }

        finite(LogScale::new(self.config).value_at(percentage / 100.0))
    }

    /// The value at `percentage` of a logarithmic track.
    ///
    /// Takes a percentage in `0..=100`, whereas
    /// [ValueTransformer::percentage_from_log_value] returns one in `0..=1`.
    pub fn log_value_from_percentage(&self, percentage: f64) -> f64 {
        self.checked_log_value_from_percentage(percentage)
            .unwrap_or_else(|| zero("log_value_from_percentage"))
    }

    /// The fraction (`0..=1`) of a logarithmic track at which `value` sits.
    ///
    /// Returns [None] for a zero, NaN or negative value.
    pub fn checked_percentage_from_log_value(&self, value: f64) -> Option<f64> {
        if value == 0.0 || value.is_nan() {
            return None;
        }

        finite(LogScale::new(self.config).fraction_of(value))
    }

    /// The fraction of a logarithmic track at which `value` sits.
    ///
    /// Returns a percentage in `0..=1`; multiply by `100` before feeding it
    /// back into [ValueTransformer::log_value_from_percentage].
    pub fn percentage_from_log_value(&self, value: f64) -> f64 {
        self.checked_percentage_from_log_value(value)
            .unwrap_or_else(|| zero("percentage_from_log_value"))
    }

    /// The track position of a pointer event, clamped to the track.
    pub fn position_from_event(&self, track: &TrackGeometry, event: &PointerEvent) -> Point {
        event::position_from_event(track, event)
    }

    /// The handle values described by the configuration.
    ///
    /// The result is an owned copy; changing it never affects the configuration.
    pub fn values_from_config(&self) -> RangeValues {
        let config = self.config;

        if config.multi {
            let map = config
                .value
                .as_ref()
                .and_then(ConfigValue::as_map)
                .or(match &config.default_value {
                    Some(ConfigValue::Map(map)) => Some(map),
                    _ => None,
                });

            return match map {
                Some(map) => Handles::Multi(map.clone()),
                None => {
                    log::warn!("Multi-value slider has no usable value or default value");
                    Handles::Multi(IndexMap::new())
                },
            };
        }

        let max = config
            .value
            .as_ref()
            .and_then(ConfigValue::as_number)
            .or_else(|| config.default_value.as_ref().and_then(ConfigValue::as_number))
            .unwrap_or_else(|| {
                log::warn!("Slider has no usable value or default value, using the minimum");
                config.min_value
            });

        Handles::Single(Range::new(config.min_value, max))
    }

    /// Snap `value` to the nearest multiple of the step. Does not clamp.
    ///
    /// A step that is not a positive finite number leaves `value` unchanged.
    pub fn step_value_from_value(&self, value: f64) -> f64 {
        match self.step() {
            Some(step) => (value / step).round() * step,
            None => value,
        }
    }

    /// Clamp `value` into `min_value..=max_value`.
    pub fn clamp_value(&self, value: f64) -> f64 {
        clamp(value, self.config.min_value, self.config.max_value)
    }

    /// One step up from `value`, kept in bounds.
    pub fn increment(&self, value: f64) -> f64 {
        self.clamp_value(value + self.step().unwrap_or(0.0))
    }

    /// One step down from `value`, kept in bounds.
    pub fn decrement(&self, value: f64) -> f64 {
        self.clamp_value(value - self.step().unwrap_or(0.0))
    }

    /// The stepped, in-bounds value a drag event points at.
    pub fn value_from_event(&self, track: &TrackGeometry, event: &PointerEvent) -> f64 {
        let position = self.position_from_event(track, event);
        let value = self.value_from_position(track, position);
        self.clamp_value(self.step_value_from_value(value))
    }

    /// Returns `true` if `values` can be applied to the slider.
    ///
    /// Every handle must lie within bounds. Multi-value handles must also be
    /// strictly increasing in handle order.
    pub fn is_within_range(&self, values: &RangeValues) -> bool {
        let config = self.config;
        let in_bounds = |value: &f64| *value >= config.min_value && *value <= config.max_value;

        match values {
            Handles::Single(range) => in_bounds(&range.max),
            Handles::Multi(map) => {
                map.values().all(in_bounds)
                    && map.values().zip(map.values().skip(1)).all(|(low, high)| low < high)
            },
        }
    }

    /// Returns `true` if any handle in `values` is at least one step away from
    /// the configured values.
    ///
    /// Handles that are not configured yet always count as moved.
    pub fn has_step_difference(&self, values: &RangeValues) -> bool {
        let current = self.values_from_config();
        let step = self.step().unwrap_or(0.0);

        values.iter().any(|(key, value)| match current.get(key.as_str()) {
            Some(previous) => (value - previous).abs() >= step,
            None => true,
        })
    }

    fn step(&self) -> Option<f64> {
        let step = self.config.step;
        (step.is_finite() && step > 0.0).then_some(step)
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn zero(operation: &str) -> f64 {
    log::trace!("{operation} has no finite result, falling back to 0");
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::HandleId;

    fn linear() -> RangeConfig {
        RangeConfig::new(0.0, 100.0)
    }

    #[test]
    fn test_position_and_value_example() {
        let config = linear();
        let transformer = ValueTransformer::new(&config);
        let track = TrackGeometry::new(200.0, 0.0);

        assert_eq!(transformer.position_from_value(&track, 50.0), Point::new(100.0, 0.0));
        assert_eq!(transformer.value_from_position(&track, Point::new(100.0, 0.0)), 50.0);
    }

    #[test]
    fn test_percentage_from_value_clamps() {
        let config = RangeConfig::new(10.0, 20.0);
        let transformer = ValueTransformer::new(&config);

        assert_eq!(transformer.percentage_from_value(-100.0), 0.0);
        assert_eq!(transformer.percentage_from_value(15.0), 0.5);
        assert_eq!(transformer.percentage_from_value(100.0), 1.0);
    }

    #[test]
    fn test_degenerate_inputs_fall_back_to_zero() {
        let config = RangeConfig::new(5.0, 5.0);
        let transformer = ValueTransformer::new(&config);
        assert_eq!(transformer.checked_percentage_from_value(5.0), None);
        assert_eq!(transformer.percentage_from_value(5.0), 0.0);

        let config = linear();
        let transformer = ValueTransformer::new(&config);
        let empty = TrackGeometry::new(0.0, 0.0);
        assert_eq!(transformer.percentage_from_position(&empty, Point::new(0.0, 0.0)), 0.0);
        assert_eq!(transformer.percentage_from_position(&empty, Point::new(10.0, 0.0)), 0.0);
        assert_eq!(transformer.value_from_position(&empty, Point::new(10.0, 0.0)), 0.0);
    }

    #[test]
    fn test_log_value_from_percentage() {
        let config = RangeConfig::new(1.0, 1000.0).with_log_scale(true);
        let transformer = ValueTransformer::new(&config);

        assert!((transformer.log_value_from_percentage(50.0) - 31.6227766).abs() < 1e-6);
        assert!((transformer.log_value_from_percentage(100.0) - 1000.0).abs() < 1e-9);
        assert_eq!(transformer.log_value_from_percentage(0.0), 0.0);
        assert_eq!(transformer.log_value_from_percentage(f64::NAN), 0.0);
    }

    #[test]
    fn test_percentage_from_log_value() {
        let config = RangeConfig::new(1.0, 1000.0).with_log_scale(true);
        let transformer = ValueTransformer::new(&config);

        assert!((transformer.percentage_from_log_value(10.0) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(transformer.percentage_from_log_value(0.0), 0.0);
        assert_eq!(transformer.percentage_from_log_value(-3.0), 0.0);
    }

    #[test]
    fn test_log_track_positions() {
        let config = RangeConfig::new(1.0, 10000.0).with_log_scale(true);
        let transformer = ValueTransformer::new(&config);
        let track = TrackGeometry::new(400.0, 0.0);

        assert!((transformer.position_from_value(&track, 100.0).x - 200.0).abs() < 1e-9);
        let value = transformer.value_from_position(&track, Point::new(300.0, 0.0));
        assert!((value - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_log_scale_below_floor_is_clamped() {
        let config = RangeConfig::new(0.0, 100.0).with_log_scale(true);
        let transformer = ValueTransformer::new(&config);

        assert_eq!(transformer.percentage_from_value(0.0), 0.0);
        assert_eq!(transformer.percentage_from_value(0.5), 0.0);
        assert_eq!(transformer.percentage_from_value(1.0), 0.0);
        assert!(transformer.percentage_from_value(10.0) > 0.0);
    }

    #[test]
    fn test_step_value_from_value() {
        let config = linear().with_step(5.0);
        let transformer = ValueTransformer::new(&config);

        assert_eq!(transformer.step_value_from_value(7.0), 5.0);
        assert_eq!(transformer.step_value_from_value(8.0), 10.0);
        // No clamping
        assert_eq!(transformer.step_value_from_value(203.0), 205.0);

        let config = linear().with_step(0.0);
        assert_eq!(ValueTransformer::new(&config).step_value_from_value(7.3), 7.3);
    }

    #[test]
    fn test_values_from_config_single() {
        let config = RangeConfig::new(2.0, 10.0).with_value(4.0).with_default_value(6.0);
        assert_eq!(
            ValueTransformer::new(&config).values_from_config(),
            Handles::Single(Range::new(2.0, 4.0))
        );

        let config = RangeConfig::new(2.0, 10.0).with_default_value(6.0);
        assert_eq!(
            ValueTransformer::new(&config).values_from_config(),
            Handles::Single(Range::new(2.0, 6.0))
        );

        let config = RangeConfig::new(2.0, 10.0);
        assert_eq!(
            ValueTransformer::new(&config).values_from_config(),
            Handles::Single(Range::new(2.0, 2.0))
        );
    }

    #[test]
    fn test_values_from_config_multi_falls_back_to_default() {
        let default: IndexMap<HandleId, f64> =
            [(HandleId::min(), 1.0), (HandleId::max(), 9.0)].into_iter().collect();
        let config = RangeConfig::new(0.0, 10.0)
            .with_values(Vec::<(HandleId, f64)>::new())
            .with_default_value(default.clone());

        assert_eq!(
            ValueTransformer::new(&config).values_from_config(),
            Handles::Multi(default)
        );
    }

    #[test]
    fn test_values_from_config_is_a_copy() {
        let config = RangeConfig::new(0.0, 10.0).with_values([("a", 3.0)]);
        let transformer = ValueTransformer::new(&config);

        let moved = transformer.values_from_config().with_value(&HandleId::from("a"), 7.0);
        assert_eq!(moved.get("a"), Some(&7.0));
        assert_eq!(transformer.values_from_config().get("a"), Some(&3.0));
    }

    #[test]
    fn test_increment_and_decrement_stay_in_bounds() {
        let config = linear().with_step(10.0);
        let transformer = ValueTransformer::new(&config);

        assert_eq!(transformer.increment(50.0), 60.0);
        assert_eq!(transformer.increment(95.0), 100.0);
        assert_eq!(transformer.decrement(5.0), 0.0);
    }

    #[test]
    fn test_value_from_event() {
        let config = linear().with_step(10.0);
        let transformer = ValueTransformer::new(&config);
        let track = TrackGeometry::new(200.0, 100.0);

        assert_eq!(transformer.value_from_event(&track, &PointerEvent::mouse(187.0, 0.0)), 40.0);
        assert_eq!(transformer.value_from_event(&track, &PointerEvent::mouse(-1000.0, 0.0)), 0.0);
        assert_eq!(transformer.value_from_event(&track, &PointerEvent::touch(0, 5000.0, 0.0)), 100.0);
    }

    #[test]
    fn test_value_from_event_on_log_track_starts_at_minimum() {
        let config = RangeConfig::new(10.0, 1000.0).with_log_scale(true);
        let transformer = ValueTransformer::new(&config);
        let track = TrackGeometry::new(100.0, 0.0);

        assert_eq!(transformer.value_from_event(&track, &PointerEvent::mouse(0.0, 0.0)), 10.0);
    }

    #[test]
    fn test_is_within_range() {
        let config = linear();
        let transformer = ValueTransformer::new(&config);

        assert!(transformer.is_within_range(&Handles::Single(Range::new(0.0, 0.0))));
        assert!(!transformer.is_within_range(&Handles::Single(Range::new(0.0, 101.0))));

        let ordered = Handles::Multi([(HandleId::from("a"), 10.0), (HandleId::from("b"), 20.0)].into_iter().collect());
        let crossed = Handles::Multi([(HandleId::from("a"), 20.0), (HandleId::from("b"), 10.0)].into_iter().collect());
        assert!(transformer.is_within_range(&ordered));
        assert!(!transformer.is_within_range(&crossed));
    }

    #[test]
    fn test_has_step_difference() {
        let config = linear().with_step(5.0).with_value(50.0);
        let transformer = ValueTransformer::new(&config);

        assert!(!transformer.has_step_difference(&Handles::Single(Range::new(0.0, 52.0))));
        assert!(transformer.has_step_difference(&Handles::Single(Range::new(0.0, 55.0))));
    }
}
