//! Fitter configuration loading.
//!
//! All parameters live in one YAML document; missing keys fall back to the
//! defaults in `defaults.rs`.

mod defaults;
mod error;
mod fitter;

pub use error::ConfigError;
pub use fitter::{DEFAULT_CONFIG_PATH, FitterConfig};
