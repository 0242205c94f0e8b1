//! Infinite line in slope-intercept form.

use serde::{Deserialize, Serialize};

/// Line `y = slope * x + intercept`.
///
/// Only the infinite line is represented; extracted lines carry no endpoints.
/// Vertical lines cannot be expressed and are never produced by the fitter.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    /// Slope (dy/dx)
    pub slope: f32,
    /// Y-axis intercept in meters
    pub intercept: f32,
}

impl Line {
    /// Create a new line
    #[inline]
    pub fn new(slope: f32, intercept: f32) -> Self {
        Self { slope, intercept }
    }

    /// Y coordinate of the line at `x`.
    #[inline]
    pub fn y_at(&self, x: f32) -> f32 {
        self.slope * x + self.intercept
    }

    /// X coordinate of the line at `y`.
    ///
    /// A horizontal line has no unique answer; `0.0` is returned when the
    /// slope is exactly zero.
    #[inline]
    pub fn x_at(&self, y: f32) -> f32 {
        if self.slope == 0.0 {
            return 0.0;
        }
        (y - self.intercept) / self.slope
    }

    /// Scaled squared distance from `(x, y)` to the line:
    /// `|-slope*x + y - intercept|^2 / (slope^2 + 1)`.
    ///
    /// This is the inlier test metric used during association.
    #[inline]
    pub fn scaled_distance_squared(&self, x: f32, y: f32) -> f32 {
        let numerator = (-self.slope * x + y - self.intercept).abs();
        (numerator * numerator) / (self.slope * self.slope + 1.0)
    }
}
