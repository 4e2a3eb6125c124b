use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A pixel position relative to the track origin.
///
/// Sliders move along a single axis, so `y` is always `0.0`.
pub type Point = Point2<f64>;

/// Create a [Point] on the track at the given `x`.
pub fn track_point(x: f64) -> Point {
    Point::new(x, 0.0)
}

/// Snapshot of the rendered track's bounding box.
///
/// Owned by the widget and refreshed after every layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackGeometry {
    /// The rendered width of the track in pixels.
    pub width: f64,
    /// The left edge of the track in window coordinates.
    pub left: f64,
}

impl TrackGeometry {
    /// Create a new track geometry from its width and left offset.
    pub fn new(width: f64, left: f64) -> Self {
        Self { width, left }
    }

    /// Create a track geometry from the horizontal extent of a layout rect.
    pub fn from_rect(left: f64, width: f64) -> Self {
        Self { width, left }
    }

    /// Returns `true` if the track has a usable, positive width.
    pub fn has_width(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }

    /// Returns `true` if the window-space `x` lies on the track.
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.left && x <= self.left + self.width
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [f64::clamp] this never panics: inverted or NaN bounds resolve
/// towards `max`.
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
