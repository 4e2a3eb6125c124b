//! Handle values of a range slider.
//!
//! A slider either has a single live value ([Handles::Single], where `min` is
//! pinned to the configured minimum) or any number of named handles
//! ([Handles::Multi]).

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Identifier of a slider handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleId(String);

impl HandleId {
    /// Create a new handle id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The lower handle of a two-ended range.
    pub fn min() -> Self {
        Self::new("min")
    }

    /// The upper handle of a two-ended range, and the only movable handle in
    /// single-value mode.
    pub fn max() -> Self {
        Self::new("max")
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HandleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for HandleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for HandleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pair of values: two percentages, two domain values or two positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range<T> {
    /// The lower end.
    pub min: T,
    /// The upper end.
    pub max: T,
}

impl<T> Range<T> {
    /// Create a new range.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Apply `f` to both ends.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Range<U> {
        Range {
            min: f(self.min),
            max: f(self.max),
        }
    }
}

/// The handles of a slider, either a fixed pair or a named set.
#[derive(Debug, Clone, PartialEq)]
pub enum Handles<T> {
    /// Single-value mode: `min` is the configured minimum, `max` the live value.
    Single(Range<T>),
    /// Multi-value mode: one entry per handle, in insertion order.
    Multi(IndexMap<HandleId, T>),
}

/// Domain values (or percentages) of every handle.
pub type RangeValues = Handles<f64>;

impl<T> Handles<T> {
    /// Apply `f` to every handle, keeping the shape.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Handles<U> {
        match self {
            Self::Single(range) => Handles::Single(Range::new(f(&range.min), f(&range.max))),
            Self::Multi(map) => {
                Handles::Multi(map.iter().map(|(key, value)| (key.clone(), f(value))).collect())
            },
        }
    }

    /// Look up a handle. `Single` answers to `"min"` and `"max"`.
    pub fn get(&self, key: &str) -> Option<&T> {
        match self {
            Self::Single(range) => match key {
                "min" => Some(&range.min),
                "max" => Some(&range.max),
                _ => None,
            },
            Self::Multi(map) => map.get(key),
        }
    }

    /// Iterate over `(handle, value)` pairs in order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (HandleId, &T)> + '_> {
        match self {
            Self::Single(range) => Box::new(
                [(HandleId::min(), &range.min), (HandleId::max(), &range.max)].into_iter(),
            ),
            Self::Multi(map) => Box::new(map.iter().map(|(key, value)| (key.clone(), value))),
        }
    }

    /// Number of handles.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 2,
            Self::Multi(map) => map.len(),
        }
    }

    /// Returns `true` for a multi-value set without handles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Handles<T> {
    /// Returns an owned copy with the handle `key` set to `value`.
    ///
    /// Unknown keys are appended in multi mode and ignored in single mode.
    pub fn with_value(&self, key: &HandleId, value: T) -> Self {
        let mut next = self.clone();
        match &mut next {
            Self::Single(range) => match key.as_str() {
                "min" => range.min = value,
                "max" => range.max = value,
                other => log::warn!("Ignoring unknown handle '{other}' on a single-value slider"),
            },
            Self::Multi(map) => {
                map.insert(key.clone(), value);
            },
        }
        next
    }
}

impl Handles<Point> {
    /// The handle a press at `position` should grab.
    ///
    /// Single-value sliders always move `max`. Multi-value sliders pick the
    /// closest handle; ties go to the later one. Returns [None] when there
    /// are no handles.
    pub fn nearest_handle(&self, position: Point) -> Option<HandleId> {
        match self {
            Self::Single(_) => Some(HandleId::max()),
            Self::Multi(map) => {
                let mut nearest: Option<(&HandleId, f64)> = None;
                for (key, point) in map {
                    let distance = nalgebra::distance(point, &position);
                    if nearest.map_or(true, |(_, best)| distance <= best) {
                        nearest = Some((key, distance));
                    }
                }
                nearest.map(|(key, _)| key.clone())
            },
        }
    }
}
