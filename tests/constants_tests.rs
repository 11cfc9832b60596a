// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn simulation_defaults_match_reference_tuning() {
    assert_eq!(PARTICLE_COUNT, 15_000);
    assert_eq!(EMISSION_RADIUS_FACTOR, 0.8);
    assert_eq!(CAPTURE_RADIUS, 100.0);
    assert_eq!(ATTRACTION_STRENGTH, 0.05);
    assert_eq!(DRIFT_STRENGTH, 0.01);
    assert_eq!(RESPAWN_THRESHOLD, 100.0);
    assert_eq!(GRADIENT_RADIUS_FACTOR, 0.6);
    assert_eq!(TRAIL_FADE_ALPHA, 0.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn strengths_are_fractions() {
    // Each frame must close part of the gap without overshooting the target
    assert!(ATTRACTION_STRENGTH > 0.0 && ATTRACTION_STRENGTH < 1.0);
    assert!(DRIFT_STRENGTH > 0.0 && DRIFT_STRENGTH < 1.0);
    assert!(ATTRACTION_STRENGTH > DRIFT_STRENGTH);
    assert!(ORANGE_PROBABILITY > 0.0 && ORANGE_PROBABILITY < 1.0);
    assert!(TRAIL_FADE_ALPHA > 0.0 && TRAIL_FADE_ALPHA <= 1.0);
    assert!(DRIFT_OPACITY > 0.0 && DRIFT_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sizes_and_extents_are_positive() {
    assert!(SIZE_MIN > 0.0 && SIZE_SPAN > 0.0);
    assert!((SIZE_MIN + SIZE_SPAN - 1.0).abs() < 1e-6);
    assert!(DRIFT_SIZE_MIN > 0.0 && DRIFT_SIZE_SPAN > 0.0);
    assert!(DRIFT_SPEED_MIN > 0.0 && DRIFT_SPEED_SPAN > 0.0);
    assert!(MIN_EXTENT > 0.0);
    assert!(ORB_DIAMETER_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_have_logical_relationships() {
    // The throttle must be far shorter than the moving window or the orb flickers idle
    assert!(POINTER_THROTTLE_MS * 4.0 < ORB_MOVING_WINDOW_MS);
    assert!(ORB_TRANSITION_SEC < TWEEN_TRANSITION_SEC);
    assert!(ORB_SCALE_MOVING > 1.0);
    assert!(STATS_LOG_INTERVAL_FRAMES > 0);
}

#[test]
fn element_ids_are_distinct() {
    assert_ne!(CANVAS_ELEMENT_ID, TWEEN_CONTAINER_ID);
    assert!(!CANVAS_ELEMENT_ID.is_empty());
}
