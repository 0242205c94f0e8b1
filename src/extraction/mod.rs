//! Line extraction from ordered scan points.
//!
//! The RANSAC fitter works on a single partitioned buffer and is split into
//! four pieces:
//!
//! - [`buffer`]: active/consumed partition with `remove` and `restore`
//! - [`sampler`]: seed group selection around a random reference point
//! - [`regression`]: ordinary least-squares line estimation
//! - [`consensus`]: inlier association against a candidate line
//!
//! [`LineFitter`] drives them trial by trial.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rekha::config::FitterConfig;
//! use rekha::extraction::LineFitter;
//!
//! let mut fitter = LineFitter::new(FitterConfig::load_default()?)?;
//!
//! for scan in scans {
//!     let lines = fitter.compute_scan(&scan, 10, 0.15, 8.0)?;
//!     // lines borrowed from the fitter; scratch reused for the next scan
//! }
//! ```

pub mod buffer;
pub mod consensus;
pub mod error;
pub mod fitter;
pub mod regression;
pub mod sampler;

pub use buffer::PointBuffer;
pub use consensus::associate_inliers;
pub use error::{FitError, TrialFailure};
pub use fitter::{FitSummary, LineFitter};
pub use regression::fit_regression_line;
pub use sampler::sample_seed_group;
