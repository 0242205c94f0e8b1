//! Scan point type.

use serde::{Deserialize, Serialize};

/// A Cartesian scan sample together with the beam angle it came from.
///
/// Coordinates are in meters, the angle in radians. Coordinate frame follows
/// ROS REP-103 (X-forward, Y-left, CCW positive). The line extractor never
/// mutates a point; it only moves points around inside the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanPoint {
    /// X coordinate in meters (forward)
    pub x: f32,
    /// Y coordinate in meters (left)
    pub y: f32,
    /// Beam angle in radians
    pub angle: f32,
}

impl ScanPoint {
    /// Create a new scan point
    #[inline]
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }

    /// Create a point from a polar reading (angle in radians, range in meters).
    #[inline]
    pub fn from_polar(angle: f32, range: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(range * cos, range * sin, angle)
    }

    /// Distance from the sensor origin
    #[inline]
    pub fn range(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}
