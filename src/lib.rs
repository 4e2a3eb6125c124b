#![warn(missing_docs)]

//! Value and position conversion for nptk range sliders.

pub use indexmap;
pub use nalgebra as math;

pub use nptk_range_core as core;

/// A "prelude" for users of nptk range sliders.
///
/// Importing this module brings into scope the types needed to convert
/// between slider positions and values.
///
/// ```rust
/// use nptk_range::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::config::{ConfigValue, RangeConfig};
    pub use crate::core::error::{RangeError, RangeResult};
    pub use crate::core::event::{PointerEvent, TouchPoint};
    pub use crate::core::geometry::{track_point, Point, TrackGeometry};
    pub use crate::core::transform::ValueTransformer;
    pub use crate::core::values::{HandleId, Handles, Range, RangeValues};

    // Math
    pub use nalgebra::Point2;
}
