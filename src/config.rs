//! Configuration constants for the disc arena game.

// Disc population
pub const DISC_COUNT: u32 = 25; // Free-moving discs per round
pub const DISC_RAD_MIN: f64 = 10.0; // Minimum disc radius in pixels
pub const DISC_RAD_MAX: f64 = 25.0; // Maximum disc radius in pixels
pub const DISC_VEL_RANGE: f64 = 10.0; // Initial per-axis velocity in [-range, range], never zero

// Player
pub const PLAYER_RAD_PROP: f64 = 0.05; // Player diameter as a proportion of arena width
pub const PLAYER_LINE_WIDTH: f32 = 4.0; // Outline stroke width in pixels
pub const PLAYER_MAX_VEL: f64 = DISC_VEL_RANGE * 2.0; // Per-axis velocity bound
pub const PLAYER_ACCEL_STEP: f64 = 1.0; // Velocity added per accelerate event
pub const PLAYER_GROWTH: f64 = 0.0; // Radius gained per elimination (0 = growth off)
pub const PLAYER_MAX_RADIUS_PROP: f64 = 0.25; // Growth cap as a proportion of arena width

// Rendering configuration
pub const WINDOW_WIDTH: i32 = 1024;
pub const WINDOW_HEIGHT: i32 = 768;
pub const TRAIL_ALPHA: f32 = 0.3; // Opacity of the per-frame fade rect (1.0 disables trails)

// Lifecycle
pub const RESIZE_DEBOUNCE: f64 = 0.2; // Seconds the window size must be stable before reset
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100; // Per-disc bound on random placement retries

/// Per-session tuning assembled from CLI arguments, with defaults taken
/// from the constants above.
#[derive(Debug, Clone, Copy)]
pub struct WorldConfig {
    pub disc_count: u32,
    pub rad_min: f64,
    pub rad_max: f64,
    pub vel_range: f64,
    pub growth: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            disc_count: DISC_COUNT,
            rad_min: DISC_RAD_MIN,
            rad_max: DISC_RAD_MAX,
            vel_range: DISC_VEL_RANGE,
            growth: PLAYER_GROWTH,
        }
    }
}
