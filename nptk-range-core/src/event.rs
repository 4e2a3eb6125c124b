//! Pointer input as seen by the slider.

use crate::geometry::{clamp, track_point, Point, TrackGeometry};

/// A single contact of a touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// The touch id reported by the platform.
    pub id: i32,
    /// Horizontal window coordinate.
    pub client_x: f64,
    /// Vertical window coordinate.
    pub client_y: f64,
}

/// A pointer event delivered to the slider during a press or drag.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// A mouse (or pen) event.
    Mouse {
        /// Horizontal window coordinate.
        client_x: f64,
        /// Vertical window coordinate.
        client_y: f64,
    },
    /// A touch event with all of its current contacts.
    Touch {
        /// Active contacts, in the order the platform reported them.
        touches: Vec<TouchPoint>,
    },
}

impl PointerEvent {
    /// Create a mouse event at the given window coordinates.
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self::Mouse { client_x, client_y }
    }

    /// Create a touch event with a single contact.
    pub fn touch(id: i32, client_x: f64, client_y: f64) -> Self {
        Self::Touch {
            touches: vec![TouchPoint {
                id,
                client_x,
                client_y,
            }],
        }
    }

    /// The horizontal window coordinate of the pointer.
    ///
    /// Touch events use their first contact. Returns [None] for a touch event
    /// without contacts.
    pub fn client_x(&self) -> Option<f64> {
        match self {
            Self::Mouse { client_x, .. } => Some(*client_x),
            Self::Touch { touches } => touches.first().map(|touch| touch.client_x),
        }
    }
}

/// Extract the track position of a pointer event.
///
/// The result is clamped to `[0, track.width]`, so dragging far outside the
/// track pins the handle to the nearest end.
pub fn checked_position_from_event(track: &TrackGeometry, event: &PointerEvent) -> Option<Point> {
    let client_x = event.client_x()?;
    Some(track_point(clamp(client_x - track.left, 0.0, track.width)))
}

/// Like [checked_position_from_event], falling back to the track origin.
pub fn position_from_event(track: &TrackGeometry, event: &PointerEvent) -> Point {
    checked_position_from_event(track, event).unwrap_or_else(|| {
        log::trace!("Pointer event without coordinates, using track origin");
        track_point(0.0)
    })
}
