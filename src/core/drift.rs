use crate::core::constants::*;
use glam::Vec2;
use rand::Rng;

/// Parameters for the declarative tween variant.
#[derive(Clone, Debug, PartialEq)]
pub struct DriftConfig {
    pub particle_count: usize,
    pub opacity: f32,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            particle_count: DRIFT_PARTICLE_COUNT,
            opacity: DRIFT_OPACITY,
        }
    }
}

/// A particle of the tween variant. It never moves on its own: each pointer
/// change re-targets it to `origin + offset(pointer)` and the host animates
/// the transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftParticle {
    pub origin: Vec2,
    pub size: f32,
    pub speed: f32,
    pub direction: f32,
}

impl DriftParticle {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, viewport: Vec2) -> Self {
        Self {
            origin: Vec2::new(rng.gen::<f32>() * viewport.x, rng.gen::<f32>() * viewport.y),
            size: DRIFT_SIZE_MIN + rng.gen::<f32>() * DRIFT_SIZE_SPAN,
            speed: DRIFT_SPEED_MIN + rng.gen::<f32>() * DRIFT_SPEED_SPAN,
            direction: rng.gen::<f32>() * 2.0 - 1.0,
        }
    }

    /// Translation from `origin` toward the pointer.
    ///
    /// A negative `direction` pushes the particle away from the pointer
    /// instead; roughly half the field behaves that way.
    #[inline]
    pub fn offset(&self, pointer: Vec2) -> Vec2 {
        (pointer - self.origin) * self.speed * self.direction
    }
}

/// Fixed set of tween particles sampled once over the viewport.
pub struct DriftField {
    config: DriftConfig,
    viewport: Vec2,
    particles: Vec<DriftParticle>,
}

impl DriftField {
    pub fn new<R: Rng + ?Sized>(config: DriftConfig, viewport: Vec2, rng: &mut R) -> Self {
        let viewport = viewport.max(Vec2::ZERO);
        let particles = (0..config.particle_count)
            .map(|_| DriftParticle::sample(rng, viewport))
            .collect();
        Self {
            config,
            viewport,
            particles,
        }
    }

    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn particles(&self) -> &[DriftParticle] {
        &self.particles
    }

    pub fn offsets(&self, pointer: Vec2) -> impl Iterator<Item = Vec2> + '_ {
        self.particles.iter().map(move |p| p.offset(pointer))
    }
}

/// Visual state of the glow orb derived from pointer activity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbGlow {
    pub box_shadow: &'static str,
    pub scale: f32,
}

/// Pointer tracking for the glow orb: where it is and when it last moved.
#[derive(Clone, Copy, Debug)]
pub struct OrbState {
    pointer: Vec2,
    last_move_ms: Option<f64>,
}

impl OrbState {
    /// Orb parked at the viewport center until the first move.
    pub fn centered(viewport: Vec2) -> Self {
        Self {
            pointer: viewport * 0.5,
            last_move_ms: None,
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn on_move(&mut self, pointer: Vec2, now_ms: f64) {
        self.pointer = pointer;
        self.last_move_ms = Some(now_ms);
    }

    pub fn is_moving(&self, now_ms: f64) -> bool {
        self.last_move_ms
            .map(|t| now_ms - t < ORB_MOVING_WINDOW_MS)
            .unwrap_or(false)
    }

    /// Translation that puts the orb's center (laid out at the viewport
    /// center) under the pointer.
    pub fn translation(&self, viewport: Vec2) -> Vec2 {
        self.pointer - viewport * 0.5
    }

    pub fn glow(&self, now_ms: f64) -> OrbGlow {
        if self.is_moving(now_ms) {
            OrbGlow {
                box_shadow: ORB_SHADOW_MOVING,
                scale: ORB_SCALE_MOVING,
            }
        } else {
            OrbGlow {
                box_shadow: ORB_SHADOW_IDLE,
                scale: 1.0,
            }
        }
    }
}
