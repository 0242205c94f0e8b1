//! RANSAC multi-line fitter.
//!
//! [`LineFitter`] runs a bounded number of trials over one scan. Each trial
//! walks through the same stages:
//!
//! ```text
//!  Sampling ──► Estimating ──► Associating ──► Confirming ──┬─► Commit
//!     │              │                              │       │
//!     └──────────────┴──────── failure ─────────────┴───────┴─► Rollback
//! ```
//!
//! - **Sampling**: pull a seed group around a random reference point
//! - **Estimating**: least-squares line through the seed group
//! - **Associating**: pull in every active point close to that line
//! - **Confirming**: check the support count, refit over all supporters
//! - **Commit**: keep the line, supporters stay consumed for good
//! - **Rollback**: put the trial's points back into the active region
//!
//! Failures are [`TrialFailure`] values local to one trial. The loop stops
//! when no active points remain or the trial budget is spent.
//!
//! # Example
//! ```
//! use rekha::config::FitterConfig;
//! use rekha::core::ScanPoint;
//! use rekha::extraction::LineFitter;
//!
//! let config = FitterConfig::default()
//!     .with_capacity(64)
//!     .with_sample_deviation(0.2)
//!     .with_line_consensus(4)
//!     .with_seed(42);
//! let mut fitter = LineFitter::new(config).unwrap();
//!
//! // Wall at y = 2, scanned left to right
//! let mut points: Vec<ScanPoint> = (0..10)
//!     .map(|i| {
//!         let x = -1.0 + i as f32 * 0.2;
//!         ScanPoint::new(x, 2.0, 2.0_f32.atan2(x))
//!     })
//!     .rev()
//!     .collect();
//!
//! let remaining = fitter.compute(&mut points).unwrap();
//! assert_eq!(remaining, 0);
//! assert_eq!(fitter.lines().len(), 1);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ConfigError, FitterConfig};
use crate::core::{Line, PolarScan, ScanPoint};
use crate::diagnostics::{DiagnosticSink, Level, NullSink, diag};

use super::buffer::PointBuffer;
use super::consensus::associate_inliers;
use super::error::{FitError, TrialFailure};
use super::regression::fit_regression_line;
use super::sampler::sample_seed_group;

/// Counters describing the last `compute` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FitSummary {
    /// Trials run (committed + rolled back)
    pub trials: usize,
    /// Trials rolled back for lack of regression points
    pub insufficient_points: usize,
    /// Trials rolled back on a degenerate regression
    pub degenerate_fits: usize,
    /// Trials rolled back below the consensus threshold
    pub consensus_not_met: usize,
    /// Support count of every accepted line, in acceptance order
    pub supports: Vec<usize>,
}

impl FitSummary {
    /// Number of accepted lines.
    #[inline]
    pub fn committed(&self) -> usize {
        self.supports.len()
    }

    /// Number of trials that were rolled back.
    #[inline]
    pub fn rolled_back(&self) -> usize {
        self.insufficient_points + self.degenerate_fits + self.consensus_not_met
    }

    fn reset(&mut self) {
        self.trials = 0;
        self.insufficient_points = 0;
        self.degenerate_fits = 0;
        self.consensus_not_met = 0;
        self.supports.clear();
    }

    fn record_failure(&mut self, failure: &TrialFailure) {
        match failure {
            TrialFailure::InsufficientPoints { .. } => self.insufficient_points += 1,
            TrialFailure::DegenerateFit => self.degenerate_fits += 1,
            TrialFailure::ConsensusNotMet { .. } => self.consensus_not_met += 1,
        }
    }
}

/// Successful trial outcome.
struct Accepted {
    line: Line,
    support: usize,
}

/// RANSAC line extractor with a reusable scratch buffer.
///
/// Construct once per sensor and call [`compute`](Self::compute) for every
/// scan. The scratch buffer is allocated up front to `config.capacity`.
pub struct LineFitter<R = StdRng> {
    config: FitterConfig,
    scratch: PointBuffer,
    lines: Vec<Line>,
    summary: FitSummary,
    rng: R,
    sink: Box<dyn DiagnosticSink>,
}

impl LineFitter<StdRng> {
    /// Create a fitter seeded from `config.seed` (0 = OS entropy).
    pub fn new(config: FitterConfig) -> Result<Self, ConfigError> {
        let rng = if config.seed == 0 {
            StdRng::from_os_rng()
        } else {
            StdRng::seed_from_u64(config.seed)
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> LineFitter<R> {
    /// Create a fitter drawing reference points from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: FitterConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            scratch: PointBuffer::with_capacity(config.capacity),
            lines: Vec::with_capacity(32),
            summary: FitSummary::default(),
            rng,
            sink: Box::new(NullSink),
            config,
        })
    }

    /// Replace the diagnostics sink.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &FitterConfig {
        &self.config
    }

    /// Lines accepted by the last `compute`, in discovery order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Counters from the last `compute`.
    pub fn summary(&self) -> &FitSummary {
        &self.summary
    }

    /// Extract lines from `points`.
    ///
    /// `points` must be sorted ascending by angle. All of them start active.
    /// On return the slice holds the final buffer order: the points no line
    /// claimed come first, followed by the consumed points. Returns the number
    /// of unclaimed points; the accepted lines are available from
    /// [`lines`](Self::lines).
    ///
    /// # Errors
    /// [`FitError::CapacityExceeded`] if `points` is longer than the configured
    /// capacity. Nothing is modified in that case except that the previous
    /// results are cleared.
    pub fn compute(&mut self, points: &mut [ScanPoint]) -> Result<usize, FitError> {
        self.lines.clear();
        self.summary.reset();
        self.scratch.load(points)?;

        let remaining = self.run();

        points.copy_from_slice(self.scratch.points());
        Ok(remaining)
    }

    /// Convert a polar scan and extract lines from it.
    ///
    /// Readings are filtered like [`PolarScan::to_scan_points`].
    pub fn compute_scan(
        &mut self,
        scan: &PolarScan,
        min_quality: u8,
        min_range: f32,
        max_range: f32,
    ) -> Result<&[Line], FitError> {
        let mut points = scan.to_scan_points(min_quality, min_range, max_range);
        self.compute(&mut points)?;
        Ok(&self.lines)
    }

    fn run(&mut self) -> usize {
        let sink = &*self.sink;
        self.scratch.dump(sink, Level::Trace);
        diag!(
            sink,
            Level::Debug,
            "Starting up to {} trials on {} points",
            self.config.max_trials,
            self.scratch.size()
        );

        while self.scratch.size() > 0 && self.summary.trials < self.config.max_trials {
            let trial_start = self.scratch.size();

            match Self::run_trial(&mut self.scratch, &mut self.rng, &self.config, sink) {
                Ok(accepted) => {
                    diag!(
                        sink,
                        Level::Debug,
                        "Trial {}: accepted y = {:.4}x + {:.4} with {} points",
                        self.summary.trials,
                        accepted.line.slope,
                        accepted.line.intercept,
                        accepted.support
                    );
                    self.lines.push(accepted.line);
                    self.summary.supports.push(accepted.support);
                    self.scratch.dump(sink, Level::Trace);
                }
                Err(failure) => {
                    diag!(
                        sink,
                        Level::Trace,
                        "Trial {} rolled back: {}",
                        self.summary.trials,
                        failure
                    );
                    self.summary.record_failure(&failure);
                    self.scratch.restore(trial_start);
                }
            }
            self.summary.trials += 1;
        }

        diag!(
            sink,
            Level::Debug,
            "Finished after {} trials: {} lines, {} points unclaimed",
            self.summary.trials,
            self.lines.len(),
            self.scratch.size()
        );
        self.scratch.size()
    }

    /// One trial. On error the buffer still holds the trial's displaced
    /// points in its consumed region; the caller restores them.
    fn run_trial(
        buffer: &mut PointBuffer,
        rng: &mut R,
        config: &FitterConfig,
        sink: &dyn DiagnosticSink,
    ) -> Result<Accepted, TrialFailure> {
        let trial_start = buffer.size();

        // Sampling
        let seeded = sample_seed_group(buffer, rng, config.sample_size, config.sample_deviation);
        diag!(sink, Level::Trace, "Seed group of {} points", seeded);

        // Estimating
        if seeded < 2 {
            return Err(TrialFailure::InsufficientPoints { found: seeded });
        }
        let estimate = fit_regression_line(buffer.span(buffer.size(), trial_start))?;

        // Associating
        let associated = associate_inliers(buffer, &estimate, config.proximity_epsilon);
        diag!(sink, Level::Trace, "{} points associated to raw line", associated);

        // Confirming
        let support = trial_start - buffer.size();
        if support < config.line_consensus {
            return Err(TrialFailure::ConsensusNotMet {
                support,
                required: config.line_consensus,
            });
        }
        let line = fit_regression_line(buffer.span(buffer.size(), trial_start))?;

        Ok(Accepted { line, support })
    }
}
