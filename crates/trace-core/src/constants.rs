/// Simulation and rendering tuning constants.
///
/// Values are in logical (CSS) pixels and per-tick units unless noted.
// Pool
pub const TRACE_COUNT: usize = 34;

// Initial randomization ranges
pub const INIT_VELOCITY_SPAN: f32 = 0.175; // each component in [-span, span)
pub const INIT_HEADING_DRIFT_SPAN: f32 = 0.015; // rad/tick, in [-span, span)
pub const BASE_SPEED_MIN: f32 = 0.3;
pub const BASE_SPEED_MAX: f32 = 0.85;
pub const ORBIT_RADIUS_MIN: f32 = 8.0;
pub const ORBIT_RADIUS_MAX: f32 = 32.0;
pub const SEGMENT_LENGTH_MIN: f32 = 20.0;
pub const SEGMENT_LENGTH_MAX: f32 = 64.0;
pub const STROKE_THIN: f32 = 1.1;
pub const STROKE_THICK: f32 = 1.8;
pub const THICK_PROBABILITY: f64 = 0.25;
pub const AMBER_EVERY: usize = 4; // every Nth trace by index is amber

// Pointer interaction
pub const REPEL_RADIUS: f32 = 170.0;
pub const REPEL_STRENGTH: f32 = 0.75;
pub const DIM_RADIUS: f32 = 200.0;

// Motion
pub const DRIFT_FORCE: f32 = 0.012;
pub const DAMPING: f32 = 0.965; // multiplicative, applied every tick
pub const JITTER_AMPLITUDE: f32 = 0.18;
pub const JITTER_RATE_X: f32 = 0.01; // rad/tick
pub const JITTER_RATE_Y: f32 = 0.008; // rad/tick
pub const WRAP_MARGIN: f32 = 30.0;

// Render-only wobble
pub const WOBBLE_RATE_X: f32 = 0.012; // rad/tick
pub const WOBBLE_RATE_Y: f32 = 0.01; // rad/tick

// Appearance
pub const GRID_STEP: f32 = 56.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const ALPHA_NEAR: f32 = 0.22;
pub const ALPHA_FAR: f32 = 0.53;
pub const GLOW_BLUR: f32 = 6.0;
pub const MARKER_SIZE: f32 = 3.0;
