//! Default value functions for serde deserialization.
//!
//! Tuned for a single 360-point sweep from a 2D lidar at ~1° resolution.

pub fn capacity() -> usize {
    400
}

pub fn max_trials() -> usize {
    200
}

pub fn sample_size() -> usize {
    6
}

pub fn sample_deviation() -> f32 {
    5.0_f32.to_radians()
}

pub fn proximity_epsilon() -> f32 {
    0.03
}

pub fn line_consensus() -> usize {
    8
}
