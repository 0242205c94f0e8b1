//! End-to-end extraction tests on synthetic room scans.

mod common;

use std::fmt;
use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rekha::diagnostics::{Level, LogSink};
use rekha::{DiagnosticSink, LineFitter, ScanPoint};

use common::{
    has_line_near, noisy_room_config, noisy_room_scan, room_config, room_scan, room_walls,
    sorted_coords,
};

/// Sink that keeps every message, shared with the test through an `Arc`.
#[derive(Clone, Default)]
struct RecordingSink {
    messages: Arc<Mutex<Vec<(Level, String)>>>,
}

impl DiagnosticSink for RecordingSink {
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

// ============================================================================
// Room scans
// ============================================================================

#[test]
fn test_clean_room_finds_all_walls() {
    let mut fitter = LineFitter::new(room_config(7)).unwrap();
    let mut points = room_scan(360);

    let remaining = fitter.compute(&mut points).unwrap();

    println!(
        "lines: {:?}, remaining: {}, summary: {:?}",
        fitter.lines(),
        remaining,
        fitter.summary()
    );

    for wall in room_walls() {
        assert!(
            has_line_near(fitter.lines(), &wall, 0.005, 0.01),
            "wall {:?} not found in {:?}",
            wall,
            fitter.lines()
        );
    }
}

#[test]
fn test_noisy_room_finds_all_walls() {
    let mut fitter = LineFitter::new(noisy_room_config(21)).unwrap();
    let mut points = noisy_room_scan(360, 0.005, 15, 5);

    fitter.compute(&mut points).unwrap();

    for wall in room_walls() {
        assert!(
            has_line_near(fitter.lines(), &wall, 0.05, 0.05),
            "wall {:?} not found in {:?}",
            wall,
            fitter.lines()
        );
    }
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_every_line_meets_consensus() {
    let config = room_config(3);
    let consensus = config.line_consensus;
    let mut fitter = LineFitter::new(config).unwrap();
    let mut points = noisy_room_scan(360, 0.01, 10, 9);

    fitter.compute(&mut points).unwrap();

    let summary = fitter.summary();
    assert_eq!(summary.supports.len(), fitter.lines().len());
    assert!(summary.supports.iter().all(|&s| s >= consensus));
}

#[test]
fn test_supports_account_for_consumed_points() {
    let mut fitter = LineFitter::new(room_config(13)).unwrap();
    let mut points = noisy_room_scan(360, 0.01, 10, 2);
    let total = points.len();

    let remaining = fitter.compute(&mut points).unwrap();

    let supported: usize = fitter.summary().supports.iter().sum();
    assert_eq!(remaining + supported, total);
}

#[test]
fn test_points_are_only_reordered() {
    let mut fitter = LineFitter::new(room_config(17)).unwrap();
    let original = noisy_room_scan(360, 0.02, 7, 4);
    let mut points = original.clone();

    fitter.compute(&mut points).unwrap();

    assert_eq!(points.len(), original.len());
    assert_eq!(sorted_coords(&points), sorted_coords(&original));
}

#[test]
fn test_trial_budget_respected() {
    let config = room_config(1).with_max_trials(5);
    let mut fitter = LineFitter::new(config).unwrap();
    let mut points = noisy_room_scan(360, 0.01, 10, 1);

    fitter.compute(&mut points).unwrap();

    let summary = fitter.summary();
    assert!(summary.trials <= 5);
    assert_eq!(summary.trials, summary.committed() + summary.rolled_back());
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_seed_same_result() {
    let scan = noisy_room_scan(360, 0.01, 12, 8);

    let mut a = LineFitter::new(room_config(1234)).unwrap();
    let mut b = LineFitter::new(room_config(1234)).unwrap();
    let mut points_a = scan.clone();
    let mut points_b = scan;

    let remaining_a = a.compute(&mut points_a).unwrap();
    let remaining_b = b.compute(&mut points_b).unwrap();

    assert_eq!(a.lines(), b.lines());
    assert_eq!(a.summary(), b.summary());
    assert_eq!(remaining_a, remaining_b);
    assert_eq!(points_a, points_b);
}

#[test]
fn test_injected_rng_matches_seeded_config() {
    let scan = room_scan(360);

    let mut from_config = LineFitter::new(room_config(55)).unwrap();
    let mut injected =
        LineFitter::with_rng(room_config(0), StdRng::seed_from_u64(55)).unwrap();

    let mut points_a = scan.clone();
    let mut points_b = scan;
    from_config.compute(&mut points_a).unwrap();
    injected.compute(&mut points_b).unwrap();

    assert_eq!(from_config.lines(), injected.lines());
}

#[test]
fn test_reuse_clears_previous_results() {
    let mut fitter = LineFitter::new(room_config(77)).unwrap();

    let mut points = room_scan(360);
    fitter.compute(&mut points).unwrap();
    assert!(!fitter.lines().is_empty());

    // Too few points to reach consensus
    let mut few: Vec<ScanPoint> = room_scan(360).into_iter().take(5).collect();
    let remaining = fitter.compute(&mut few).unwrap();

    assert_eq!(remaining, 5);
    assert!(fitter.lines().is_empty());
    assert!(fitter.summary().supports.is_empty());
    assert_eq!(fitter.summary().trials, 200);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_sink_does_not_change_results() {
    let scan = noisy_room_scan(360, 0.01, 10, 6);
    let sink = RecordingSink::default();

    let mut quiet = LineFitter::new(room_config(42)).unwrap();
    let mut chatty = LineFitter::new(room_config(42))
        .unwrap()
        .with_sink(sink.clone());

    let mut points_a = scan.clone();
    let mut points_b = scan;
    quiet.compute(&mut points_a).unwrap();
    chatty.compute(&mut points_b).unwrap();

    assert_eq!(quiet.lines(), chatty.lines());
    assert_eq!(points_a, points_b);

    let messages = sink.messages.lock().unwrap();
    assert!(!messages.is_empty());
    let accepted = messages
        .iter()
        .filter(|(level, msg)| *level == Level::Debug && msg.contains("accepted"))
        .count();
    assert_eq!(accepted, chatty.lines().len());
    // Buffer dumps list every point at trace level
    assert!(
        messages
            .iter()
            .any(|(level, msg)| *level == Level::Trace && msg.starts_with("Point [x:"))
    );
}

#[test]
fn test_log_sink_forwards_to_logger() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut fitter = LineFitter::new(room_config(8)).unwrap().with_sink(LogSink);
    let mut points: Vec<ScanPoint> = room_scan(360);

    let remaining = fitter.compute(&mut points).unwrap();

    assert!(remaining <= points.len());
    assert!(!fitter.lines().is_empty());
}
