use crate::core::color::{sample_ember, Rgba};
use crate::core::constants::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::fmt::Write;

/// Motion rule parameters for the ember field.
///
/// Fields:
/// - `particle_count`: number of slots allocated at construction (never changes)
/// - `emission_radius_factor`: spawn radius as a fraction of min(width, height)
/// - `capture_radius`: pointer distance under which attraction wins
/// - `attraction_strength`: fraction of the pointer separation closed per frame
/// - `drift_strength`: fraction of the center separation closed per frame
/// - `respawn_threshold`: center distance under which a particle is recycled
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub emission_radius_factor: f32,
    pub capture_radius: f32,
    pub attraction_strength: f32,
    pub drift_strength: f32,
    pub respawn_threshold: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            emission_radius_factor: EMISSION_RADIUS_FACTOR,
            capture_radius: CAPTURE_RADIUS,
            attraction_strength: ATTRACTION_STRENGTH,
            drift_strength: DRIFT_STRENGTH,
            respawn_threshold: RESPAWN_THRESHOLD,
        }
    }
}

/// Snapshot of one particle slot.
///
/// `speed` is sampled on every reset but the motion rule works from position
/// deltas, so it only travels along for callers that want it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub size: f32,
    pub speed: Vec2,
    pub color: Rgba,
}

/// What a single `update_particle` call did to its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Pulled 5% toward the pointer; drift and respawn were skipped.
    Attracted,
    /// Pulled 1% toward the surface center.
    Drifted,
    /// Close enough to the center to be re-sampled in place.
    Respawned,
}

/// Per-tick (or accumulated) counts of each motion outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub attracted: usize,
    pub drifted: usize,
    pub respawned: usize,
}

impl TickStats {
    #[inline]
    pub fn record(&mut self, motion: Motion) {
        match motion {
            Motion::Attracted => self.attracted += 1,
            Motion::Drifted => self.drifted += 1,
            Motion::Respawned => self.respawned += 1,
        }
    }

    pub fn merge(&mut self, other: TickStats) {
        self.attracted += other.attracted;
        self.drifted += other.drifted;
        self.respawned += other.respawned;
    }

    pub fn total(&self) -> usize {
        self.attracted + self.drifted + self.respawned
    }
}

/// Fixed-size arena of ember particles stored as parallel arrays.
///
/// Slots are created once and recycled in place by `reset`; nothing is ever
/// pushed or removed after construction. The random source is injected so
/// tests can run with a seeded generator.
///
/// Usage:
/// - Construct with `ParticleField::new(config, width, height, seed)` or
///   `ParticleField::with_rng` for a custom generator
/// - Call `update(pointer)` once per frame, then hand the field to the renderer
pub struct ParticleField<R = StdRng> {
    config: FieldConfig,
    width: f32,
    height: f32,
    positions: Vec<Vec2>,
    speeds: Vec<Vec2>,
    sizes: Vec<f32>,
    colors: Vec<Rgba>,
    // CSS form of `colors`, rebuilt only when a slot resets
    fill_styles: Vec<String>,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(config, width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(config: FieldConfig, width: f32, height: f32, rng: R) -> Self {
        let n = config.particle_count;
        let mut field = Self {
            config,
            width: sanitize_extent(width),
            height: sanitize_extent(height),
            positions: vec![Vec2::ZERO; n],
            speeds: vec![Vec2::ZERO; n],
            sizes: vec![0.0; n],
            colors: vec![Rgba::BLACK; n],
            fill_styles: vec![String::new(); n],
            rng,
        };
        for i in 0..n {
            field.reset(i);
        }
        field
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Surface dimensions the field currently simulates against.
    pub fn surface_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Largest spawn distance from the center for the current surface.
    pub fn emission_radius(&self) -> f32 {
        self.width.min(self.height) * self.config.emission_radius_factor
    }

    /// Record new surface dimensions. Existing particles keep their
    /// positions; only later drift targets and respawns use the new size.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
    }

    pub fn particle(&self, index: usize) -> Option<Particle> {
        Some(Particle {
            position: *self.positions.get(index)?,
            size: self.sizes[index],
            speed: self.speeds[index],
            color: self.colors[index],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..self.len()).filter_map(move |i| self.particle(i))
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn fill_styles(&self) -> &[String] {
        &self.fill_styles
    }

    /// Move a slot to an explicit position without touching its other state.
    pub fn place(&mut self, index: usize, position: Vec2) {
        if let Some(p) = self.positions.get_mut(index) {
            *p = position;
        }
    }

    /// Re-sample one slot: position inside the emission disc, size, speed and color.
    pub fn reset(&mut self, index: usize) {
        if index >= self.len() {
            return;
        }
        let center = self.center();
        let max_distance = self.emission_radius();
        let rng = &mut self.rng;

        let angle = rng.gen::<f32>() * TAU;
        let distance = rng.gen::<f32>() * max_distance;
        self.positions[index] = center + Vec2::new(angle.cos(), angle.sin()) * distance;
        self.sizes[index] = SIZE_MIN + rng.gen::<f32>() * SIZE_SPAN;
        self.speeds[index] = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0,
            (rng.gen::<f32>() - 0.5) * 2.0,
        );
        let color = sample_ember(rng);
        self.colors[index] = color;
        let style = &mut self.fill_styles[index];
        style.clear();
        _ = write!(style, "{}", color);
    }

    /// Advance one slot by a frame.
    ///
    /// Pointer capture takes priority over everything else, including a
    /// particle that is already inside the respawn threshold.
    ///
    /// Returns `None` for a slot outside the field.
    pub fn update_particle(&mut self, index: usize, pointer: Option<Vec2>) -> Option<Motion> {
        let pos = *self.positions.get(index)?;
        let to_center = self.center() - pos;

        if let Some(p) = pointer {
            let to_pointer = p - pos;
            if to_pointer.length() < self.config.capture_radius {
                self.positions[index] = pos + to_pointer * self.config.attraction_strength;
                return Some(Motion::Attracted);
            }
        }

        if to_center.length() < self.config.respawn_threshold {
            self.reset(index);
            Some(Motion::Respawned)
        } else {
            self.positions[index] = pos + to_center * self.config.drift_strength;
            Some(Motion::Drifted)
        }
    }

    /// Advance every slot by one frame with the pointer value read at tick start.
    pub fn update(&mut self, pointer: Option<Vec2>) -> TickStats {
        let mut stats = TickStats::default();
        for i in 0..self.len() {
            if let Some(motion) = self.update_particle(i, pointer) {
                stats.record(motion);
            }
        }
        stats
    }
}

#[inline]
fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
