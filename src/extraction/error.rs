//! Extraction error and trial failure types.

use thiserror::Error;

/// Errors returned by [`LineFitter::compute`](super::LineFitter::compute).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// More points were passed than the fitter was configured for.
    #[error("{len} points exceed fitter capacity of {capacity}")]
    CapacityExceeded {
        /// Number of points passed in
        len: usize,
        /// Configured capacity
        capacity: usize,
    },
}

/// Why a single trial was rolled back.
///
/// Trial failures never escape `compute`; they are tallied in
/// [`FitSummary`](super::FitSummary) and the loop moves on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialFailure {
    /// Fewer than two points were available for a regression.
    #[error("insufficient points for regression ({found} < 2)")]
    InsufficientPoints {
        /// Points in the regression span
        found: usize,
    },

    /// Regression denominator was zero or the result was not finite.
    #[error("degenerate least-squares fit")]
    DegenerateFit,

    /// The fitted line did not gather enough supporting points.
    #[error("consensus not met ({support} < {required})")]
    ConsensusNotMet {
        /// Points moved out during the trial
        support: usize,
        /// Configured line consensus
        required: usize,
    },
}

impl TrialFailure {
    /// Short code for logging and tallies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InsufficientPoints { .. } => "INSUFFICIENT_POINTS",
            Self::DegenerateFit => "DEGENERATE_FIT",
            Self::ConsensusNotMet { .. } => "CONSENSUS_NOT_MET",
        }
    }
}
