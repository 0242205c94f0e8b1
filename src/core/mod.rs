//! Core types for line extraction.
//!
//! - [`ScanPoint`]: Cartesian sample plus its beam angle
//! - [`Line`]: Infinite line in slope-intercept form
//! - [`PolarScan`], [`PolarSample`], [`RawSample`]: raw sensor input and conversion

mod line;
mod point;
mod scan;

pub use line::Line;
pub use point::ScanPoint;
pub use scan::{PolarSample, PolarScan, RawSample};
