//! Test utilities for line extraction.
//!
//! Synthetic scans of a rectangular room rotated so that no wall is vertical.

#![allow(dead_code)]

use std::f32::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rekha::{FitterConfig, Line, ScanPoint};

/// Rotation of the room relative to the sensor frame (radians).
const ROOM_ROTATION: f32 = 0.5;

/// The four walls of the test room. The sensor sits at the origin, inside.
pub fn room_walls() -> [Line; 4] {
    let along = ROOM_ROTATION.tan();
    let across = -1.0 / along;
    [
        Line::new(along, 2.0),
        Line::new(along, -2.0),
        Line::new(across, 3.0),
        Line::new(across, -3.0),
    ]
}

/// Range from the origin along `angle` to the nearest wall.
fn cast_ray(walls: &[Line], angle: f32) -> f32 {
    let (sin, cos) = angle.sin_cos();
    walls
        .iter()
        .filter_map(|wall| {
            // t*sin = slope*t*cos + intercept
            let denom = sin - wall.slope * cos;
            if denom.abs() < 1e-9 {
                return None;
            }
            let t = wall.intercept / denom;
            (t > 0.0).then_some(t)
        })
        .fold(f32::INFINITY, f32::min)
}

/// Noise-free room scan, `num_points` beams over a full turn, ascending angle.
pub fn room_scan(num_points: usize) -> Vec<ScanPoint> {
    let walls = room_walls();
    let increment = 2.0 * PI / num_points as f32;
    (0..num_points)
        .map(|i| {
            let angle = -PI + i as f32 * increment;
            ScanPoint::from_polar(angle, cast_ray(&walls, angle))
        })
        .collect()
}

/// Room scan with uniform range noise and every `outlier_every`-th beam
/// replaced by clutter somewhere between the sensor and the wall.
pub fn noisy_room_scan(
    num_points: usize,
    noise: f32,
    outlier_every: usize,
    seed: u64,
) -> Vec<ScanPoint> {
    let walls = room_walls();
    let mut rng = StdRng::seed_from_u64(seed);
    let increment = 2.0 * PI / num_points as f32;
    (0..num_points)
        .map(|i| {
            let angle = -PI + i as f32 * increment;
            let mut range = cast_ray(&walls, angle) + rng.random_range(-noise..=noise);
            if outlier_every > 0 && i % outlier_every == 0 {
                range *= rng.random_range(0.3..0.8);
            }
            ScanPoint::from_polar(angle, range)
        })
        .collect()
}

/// Fitter settings for a 360-beam room scan.
pub fn room_config(seed: u64) -> FitterConfig {
    FitterConfig::default()
        .with_capacity(400)
        .with_max_trials(200)
        .with_sample_size(6)
        .with_sample_deviation(0.1)
        .with_proximity_epsilon(0.03)
        .with_line_consensus(20)
        .with_seed(seed)
}

/// Signed distance from the origin to `line` along its normal.
fn normal_offset(line: &Line) -> f32 {
    line.intercept / (1.0 + line.slope * line.slope).sqrt()
}

/// Whether some line in `lines` matches `wall` in direction (radians) and
/// distance from the origin (meters).
pub fn has_line_near(lines: &[Line], wall: &Line, angle_tol: f32, offset_tol: f32) -> bool {
    lines.iter().any(|l| {
        (l.slope.atan() - wall.slope.atan()).abs() <= angle_tol
            && (normal_offset(l) - normal_offset(wall)).abs() <= offset_tol
    })
}

/// Fitter settings tolerant of a few millimeters of range noise.
pub fn noisy_room_config(seed: u64) -> FitterConfig {
    room_config(seed)
        .with_sample_size(10)
        .with_sample_deviation(0.2)
}

/// Coordinates sorted lexicographically, for multiset comparison.
pub fn sorted_coords(points: &[ScanPoint]) -> Vec<(f32, f32, f32)> {
    let mut coords: Vec<(f32, f32, f32)> = points.iter().map(|p| (p.x, p.y, p.angle)).collect();
    coords.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then(a.1.total_cmp(&b.1))
            .then(a.2.total_cmp(&b.2))
    });
    coords
}
