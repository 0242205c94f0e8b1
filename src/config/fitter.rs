//! Line fitter configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigError;

/// Default location searched by [`FitterConfig::load_default`].
pub const DEFAULT_CONFIG_PATH: &str = "configs/fitter.yaml";

/// Configuration for RANSAC multi-line extraction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitterConfig {
    /// Maximum number of points a single `compute` call may receive.
    /// The fitter pre-allocates its scratch buffer to this size.
    /// Default: 400
    #[serde(default = "defaults::capacity")]
    pub capacity: usize,

    /// Trial budget per `compute` call. Committed and rolled back trials
    /// both count.
    /// Default: 200
    #[serde(default = "defaults::max_trials")]
    pub max_trials: usize,

    /// Number of neighbour candidates examined around the reference point,
    /// alternating left and right.
    /// Default: 6
    #[serde(default = "defaults::sample_size")]
    pub sample_size: usize,

    /// Maximum angular distance (radians) between a neighbour and the
    /// reference point for the neighbour to join the seed group.
    /// Default: 5° (0.0873 rad)
    #[serde(default = "defaults::sample_deviation")]
    pub sample_deviation: f32,

    /// Inlier threshold (meters). Compared squared against the scaled
    /// squared point-to-line distance.
    /// Default: 0.03m (3cm)
    #[serde(default = "defaults::proximity_epsilon")]
    pub proximity_epsilon: f32,

    /// Minimum number of points (seed + associated) required to accept a line.
    /// Default: 8
    #[serde(default = "defaults::line_consensus")]
    pub line_consensus: usize,

    /// Random seed for reproducibility.
    /// 0 = use entropy-based seed (non-deterministic).
    /// Default: 0
    #[serde(default)]
    pub seed: u64,
}

impl Default for FitterConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::capacity(),
            max_trials: defaults::max_trials(),
            sample_size: defaults::sample_size(),
            sample_deviation: defaults::sample_deviation(),
            proximity_epsilon: defaults::proximity_epsilon(),
            line_consensus: defaults::line_consensus(),
            seed: 0,
        }
    }
}

impl FitterConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder-style setter for the trial budget.
    pub fn with_max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Builder-style setter for sample size.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Builder-style setter for sample deviation (radians).
    pub fn with_sample_deviation(mut self, deviation: f32) -> Self {
        self.sample_deviation = deviation;
        self
    }

    /// Builder-style setter for proximity epsilon (meters).
    pub fn with_proximity_epsilon(mut self, epsilon: f32) -> Self {
        self.proximity_epsilon = epsilon;
        self
    }

    /// Builder-style setter for line consensus.
    pub fn with_line_consensus(mut self, consensus: usize) -> Self {
        self.line_consensus = consensus;
        self
    }

    /// Builder-style setter for random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::invalid("capacity", "must be at least 1"));
        }
        if !self.sample_deviation.is_finite() || self.sample_deviation < 0.0 {
            return Err(ConfigError::invalid(
                "sample_deviation",
                format!("must be finite and non-negative, got {}", self.sample_deviation),
            ));
        }
        if !self.proximity_epsilon.is_finite() || self.proximity_epsilon < 0.0 {
            return Err(ConfigError::invalid(
                "proximity_epsilon",
                format!("must be finite and non-negative, got {}", self.proximity_epsilon),
            ));
        }
        if self.line_consensus < 2 {
            return Err(ConfigError::invalid(
                "line_consensus",
                format!("a line needs at least 2 points, got {}", self.line_consensus),
            ));
        }
        Ok(())
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        log::debug!("Loading fitter config from {}", path.display());
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/fitter.yaml), falling back
    /// to built-in defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("{} not found, using default fitter config", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
