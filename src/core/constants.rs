/// Simulation tuning constants for the ember field.
///
/// Distances are in surface units (canvas pixels at the logical size of the
/// drawing surface). Strengths are fractions of the remaining separation
/// applied per frame.
// Field size
pub const PARTICLE_COUNT: usize = 15_000;

// Emission zone: particles spawn within this fraction of min(width, height)
pub const EMISSION_RADIUS_FACTOR: f32 = 0.8;

// Pointer attraction
pub const CAPTURE_RADIUS: f32 = 100.0;
pub const ATTRACTION_STRENGTH: f32 = 0.05;

// Center drift and recycling
pub const DRIFT_STRENGTH: f32 = 0.01;
pub const RESPAWN_THRESHOLD: f32 = 100.0;

// Particle radius range (min, min + span)
pub const SIZE_MIN: f32 = 0.2;
pub const SIZE_SPAN: f32 = 0.8;

// Color policy: share of "orange" samples, remainder is dark/black
pub const ORANGE_PROBABILITY: f32 = 0.6;

// Background
pub const GRADIENT_RADIUS_FACTOR: f32 = 0.6; // times surface width
pub const TRAIL_FADE_ALPHA: f32 = 0.1;

// Smallest dimension/radius used when the surface collapses to zero
pub const MIN_EXTENT: f32 = 1e-3;

// Declarative tween variant
pub const DRIFT_PARTICLE_COUNT: usize = 2_000;
pub const DRIFT_SIZE_MIN: f32 = 0.2;
pub const DRIFT_SIZE_SPAN: f32 = 0.5;
pub const DRIFT_SPEED_MIN: f32 = 0.005;
pub const DRIFT_SPEED_SPAN: f32 = 0.01;
pub const DRIFT_OPACITY: f32 = 0.15;

// Glow orb that trails the pointer in the tween variant
pub const ORB_MOVING_WINDOW_MS: f64 = 200.0; // pointer counts as moving this long after a move
pub const ORB_SCALE_MOVING: f32 = 1.02;
pub const ORB_SHADOW_MOVING: &str = "0 0 60px 20px rgba(255,69,0,0.5)";
pub const ORB_SHADOW_IDLE: &str = "0 0 100px 40px rgba(255,69,0,0.8)";
pub const POINTER_THROTTLE_MS: f64 = 10.0;
