/// Host-side wiring and presentation constants.
///
/// Simulation tuning lives in `core/constants.rs`; these only concern how the
/// page hosts the animation.
// Element ids looked up at startup
pub const CANVAS_ELEMENT_ID: &str = "particleCanvas";
pub const TWEEN_CONTAINER_ID: &str = "particle-layer";

// Frame statistics are logged at debug level once per this many frames
pub const STATS_LOG_INTERVAL_FRAMES: u32 = 600;

// Tween variant presentation
pub const TWEEN_TRANSITION_SEC: f32 = 1.0; // per-particle transform tween
pub const ORB_TRANSITION_SEC: f32 = 0.1;
pub const ORB_DIAMETER_PX: f32 = 384.0;
