//! Raw scan samples and their conversion into [`ScanPoint`]s.
//!
//! This module provides:
//! - [`RawSample`]: conversion contract for whatever the sensor driver emits
//! - [`PolarSample`]: a `(angle, distance, quality)` lidar reading
//! - [`PolarScan`]: a full sweep of polar readings
//!
//! The line extractor only consumes [`ScanPoint`]s; these types sit in front of
//! it and are the one place that knows about the sensor's native layout.

use serde::{Deserialize, Serialize};

use super::point::ScanPoint;

/// A raw sensor sample that can be turned into a Cartesian point.
///
/// Implementations must be pure: the same sample always yields the same point.
pub trait RawSample {
    /// Convert this sample into a point with its originating angle.
    fn to_scan_point(&self) -> ScanPoint;
}

/// Single lidar reading in polar coordinates.
///
/// Coordinate frame follows ROS REP-103:
/// - Angle 0 is forward (X-axis)
/// - Positive angles are counter-clockwise (toward Y-axis)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarSample {
    /// Angle from X-axis in radians, CCW positive
    pub angle: f32,
    /// Range in meters
    pub distance: f32,
    /// Measurement quality (0-255, higher is better)
    pub quality: u8,
}

impl PolarSample {
    /// Create a new polar sample
    #[inline]
    pub fn new(angle: f32, distance: f32, quality: u8) -> Self {
        Self {
            angle,
            distance,
            quality,
        }
    }
}

impl RawSample for PolarSample {
    #[inline]
    fn to_scan_point(&self) -> ScanPoint {
        ScanPoint::from_polar(self.angle, self.distance)
    }
}

/// Raw lidar sweep in polar coordinates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PolarScan {
    /// Readings in acquisition order
    pub samples: Vec<PolarSample>,
}

impl PolarScan {
    /// Create a new empty polar scan.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Create a polar scan with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Add a reading to the scan.
    #[inline]
    pub fn push(&mut self, angle: f32, distance: f32, quality: u8) {
        self.samples.push(PolarSample::new(angle, distance, quality));
    }

    /// Number of readings in the scan.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the scan is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Convert to scan points sorted ascending by angle.
    ///
    /// Filters by quality threshold and valid range. The returned order is the
    /// order the line fitter expects as input.
    ///
    /// # Arguments
    /// * `min_quality` - Minimum quality value to include
    /// * `min_range` - Minimum valid range in meters
    /// * `max_range` - Maximum valid range in meters
    pub fn to_scan_points(&self, min_quality: u8, min_range: f32, max_range: f32) -> Vec<ScanPoint> {
        let mut points: Vec<ScanPoint> = self
            .samples
            .iter()
            .filter(|s| s.quality >= min_quality && s.distance >= min_range && s.distance <= max_range)
            .map(RawSample::to_scan_point)
            .collect();

        points.sort_by(|a, b| a.angle.total_cmp(&b.angle));
        points
    }
}

impl FromIterator<PolarSample> for PolarScan {
    fn from_iter<I: IntoIterator<Item = PolarSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polar_sample_conversion() {
        let p = PolarSample::new(0.0, 3.0, 200).to_scan_point();
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn test_to_scan_points_filters_invalid() {
        let mut scan = PolarScan::new();
        scan.push(0.0, 1.0, 100); // valid
        scan.push(0.1, 0.05, 100); // too close
        scan.push(0.2, 20.0, 100); // too far
        scan.push(0.3, 1.0, 5); // low quality

        let points = scan.to_scan_points(10, 0.15, 8.0);
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 1.0);
    }

    #[test]
    fn test_to_scan_points_sorted_by_angle() {
        let scan: PolarScan = [0.5, -1.0, 2.0, 0.0]
            .into_iter()
            .map(|a| PolarSample::new(a, 1.0, 255))
            .collect();

        let points = scan.to_scan_points(0, 0.0, 10.0);
        let angles: Vec<f32> = points.iter().map(|p| p.angle).collect();
        assert_eq!(angles, vec![-1.0, 0.0, 0.5, 2.0]);
    }
}
