// Host-side tests for the declarative tween model and pointer plumbing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod drift {
        include!("../src/core/drift.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
}

use crate::core::constants::*;
use crate::core::drift::*;
use crate::core::pointer::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn offset_scales_separation_by_speed_and_direction() {
    let p = DriftParticle {
        origin: Vec2::new(100.0, 100.0),
        size: 0.3,
        speed: 0.01,
        direction: 0.5,
    };
    let off = p.offset(Vec2::new(300.0, 500.0));
    assert!((off - Vec2::new(1.0, 2.0)).length() < 1e-5);
}

#[test]
fn negative_direction_pushes_away_from_pointer() {
    let p = DriftParticle {
        origin: Vec2::new(100.0, 100.0),
        size: 0.3,
        speed: 0.01,
        direction: -1.0,
    };
    let pointer = Vec2::new(200.0, 100.0);
    let moved = p.origin + p.offset(pointer);
    assert!((pointer - moved).length() > (pointer - p.origin).length());
}

#[test]
fn sampled_particles_cover_viewport_with_expected_ranges() {
    let mut rng = StdRng::seed_from_u64(5);
    let viewport = Vec2::new(1280.0, 720.0);
    let field = DriftField::new(DriftConfig::default(), viewport, &mut rng);

    assert_eq!(field.particles().len(), DRIFT_PARTICLE_COUNT);
    for p in field.particles() {
        assert!(p.origin.x >= 0.0 && p.origin.x <= viewport.x);
        assert!(p.origin.y >= 0.0 && p.origin.y <= viewport.y);
        assert!(p.size >= 0.2 && p.size < 0.7 + 1e-6);
        assert!(p.speed >= 0.005 && p.speed < 0.015 + 1e-6);
        assert!((-1.0..=1.0).contains(&p.direction));
    }
    let repelled = field.particles().iter().filter(|p| p.direction < 0.0).count();
    assert!(repelled > 800 && repelled < 1_200, "repelled={repelled}");
}

#[test]
fn offsets_follow_particle_order() {
    let mut rng = StdRng::seed_from_u64(6);
    let config = DriftConfig {
        particle_count: 16,
        ..DriftConfig::default()
    };
    let field = DriftField::new(config, Vec2::new(100.0, 100.0), &mut rng);
    let pointer = Vec2::new(10.0, 90.0);
    for (p, off) in field.particles().iter().zip(field.offsets(pointer)) {
        assert_eq!(p.offset(pointer), off);
    }
}

#[test]
fn orb_starts_centered_and_idle() {
    let viewport = Vec2::new(800.0, 600.0);
    let orb = OrbState::centered(viewport);
    assert_eq!(orb.pointer(), Vec2::new(400.0, 300.0));
    assert_eq!(orb.translation(viewport), Vec2::ZERO);
    assert!(!orb.is_moving(0.0));
    assert_eq!(orb.glow(0.0).box_shadow, ORB_SHADOW_IDLE);
    assert_eq!(orb.glow(0.0).scale, 1.0);
}

#[test]
fn orb_glows_while_moving_then_settles() {
    let viewport = Vec2::new(800.0, 600.0);
    let mut orb = OrbState::centered(viewport);
    orb.on_move(Vec2::new(500.0, 100.0), 1_000.0);

    assert_eq!(orb.translation(viewport), Vec2::new(100.0, -200.0));
    let moving = orb.glow(1_150.0);
    assert_eq!(moving.box_shadow, ORB_SHADOW_MOVING);
    assert!((moving.scale - 1.02).abs() < 1e-6);

    let idle = orb.glow(1_200.0);
    assert_eq!(idle.box_shadow, ORB_SHADOW_IDLE);
    assert_eq!(idle.scale, 1.0);
}

#[test]
fn throttle_passes_leading_edge_then_waits() {
    let mut t = Throttle::new(10.0);
    assert!(t.accept(0.0));
    assert!(!t.accept(4.0));
    assert!(!t.accept(9.9));
    assert!(t.accept(10.0));
    assert!(!t.accept(15.0));
    assert!(t.accept(25.0));
}

#[test]
fn pointer_cell_is_shared_last_writer_wins() {
    let writer = PointerCell::new();
    let reader = writer.clone();
    assert_eq!(reader.get(), None);

    writer.set(Vec2::new(1.0, 2.0));
    writer.set(Vec2::new(3.0, 4.0));
    assert_eq!(reader.get(), Some(Vec2::new(3.0, 4.0)));

    writer.clear();
    assert_eq!(reader.get(), None);
}

#[test]
fn pointer_cell_ignores_non_finite_positions() {
    let cell = PointerCell::at(Vec2::new(5.0, 5.0));
    cell.set(Vec2::new(f32::NAN, 1.0));
    cell.set(Vec2::new(1.0, f32::INFINITY));
    assert_eq!(cell.get(), Some(Vec2::new(5.0, 5.0)));
}
