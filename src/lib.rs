//! # Rekha: RANSAC line extraction for 2D lidar scans
//!
//! Pulls straight lines out of one ordered lidar sweep with a randomized
//! sample-and-consensus search. Every accepted line is backed by a minimum
//! number of scan points; points that fit no line are left over as outliers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rekha::config::FitterConfig;
//! use rekha::core::PolarScan;
//! use rekha::diagnostics::LogSink;
//! use rekha::extraction::LineFitter;
//!
//! let config = FitterConfig::load_default().unwrap();
//! let mut fitter = LineFitter::new(config).unwrap().with_sink(LogSink);
//!
//! let mut scan = PolarScan::new();
//! scan.push(0.00, 2.00, 200);
//! scan.push(0.05, 2.01, 200);
//! scan.push(0.10, 2.02, 200);
//!
//! for line in fitter.compute_scan(&scan, 10, 0.15, 8.0).unwrap() {
//!     println!("y = {:.3}x + {:.3}", line.slope, line.intercept);
//! }
//! ```
//!
//! ## Data Flow
//!
//! ```text
//!   PolarScan ──to_scan_points()──► [ScanPoint] (ascending angle)
//!                                        │
//!                                        ▼
//!                                   LineFitter
//!                      ┌─────────────────────────────────┐
//!                      │ sample ► fit ► associate ► vote │──► Vec<Line>
//!                      │   ▲                       │     │
//!                      │   └──── rollback ◄────────┘     │
//!                      └─────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Scan points, lines, polar input
//! - [`config`]: YAML-backed fitter configuration
//! - [`extraction`]: The RANSAC fitter and its building blocks
//! - [`diagnostics`]: Leveled diagnostic sinks

pub mod config;
pub mod core;
pub mod diagnostics;
pub mod extraction;

pub use config::{ConfigError, FitterConfig};
pub use core::{Line, PolarSample, PolarScan, RawSample, ScanPoint};
pub use diagnostics::{DiagnosticSink, LogSink, NullSink};
pub use extraction::{FitError, FitSummary, LineFitter, PointBuffer, TrialFailure};
