//! Parachute Drop - a skydiving arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, wind, level generation, scoring)
//! - `session`: Host glue tying a round to the leaderboard and audio
//! - `persistence`: High-score storage backends
//! - `renderer`: Drawing capability interface (no graphics dependency)
//! - `platform`: Input edge detection
//! - `hud`: Display strings derived from the simulation

pub mod audio;
pub mod highscores;
pub mod hud;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
///
/// Distances are world units (screen pixels), velocities are units per tick.
pub mod consts {
    /// Nominal tick rate of the host loop
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    pub const GROUND_Y: f32 = WORLD_HEIGHT - 20.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_SPAWN_X: f32 = WORLD_WIDTH / 2.0;
    pub const PLAYER_SPAWN_Y: f32 = 50.0;
    pub const PLAYER_START_VY: f32 = 1.0;

    /// Free-fall vertical dynamics
    pub const FREEFALL_GRAVITY: f32 = 0.2;
    pub const FREEFALL_MAX_SPEED: f32 = 7.0;
    /// Canopy vertical dynamics
    pub const CANOPY_GRAVITY: f32 = 0.05;
    pub const CANOPY_MAX_SPEED: f32 = 2.0;

    /// Horizontal steering
    pub const STEER_MAX_SPEED: f32 = 3.0;
    pub const STEER_ACCEL: f32 = 0.2;
    pub const STEER_DRAG: f32 = 0.1;
    /// Wind push per tick under canopy, scaled by wind direction
    pub const WIND_DRIFT: f32 = 0.1;

    /// Ground contact faster than this is a crash
    pub const HARD_LANDING_SPEED: f32 = 3.0;

    /// Wind hold time range in ticks (3-6 seconds)
    pub const WIND_MIN_TICKS: u32 = 3 * TICKS_PER_SECOND;
    pub const WIND_MAX_TICKS: u32 = 6 * TICKS_PER_SECOND;

    /// Obstacle generation
    pub const OBSTACLE_COUNT_MIN: u32 = 5;
    pub const OBSTACLE_COUNT_MAX: u32 = 8;
    pub const OBSTACLE_EDGE_MARGIN: i32 = 100;
    pub const OBSTACLE_MIN_WIDTH: i32 = 30;
    pub const OBSTACLE_MAX_WIDTH: i32 = 80;
    pub const OBSTACLE_MIN_HEIGHT: i32 = 40;
    pub const OBSTACLE_MAX_HEIGHT: i32 = 100;

    /// Landing zone derivation
    pub const ZONE_MAX_WIDTH: f32 = 100.0;
    pub const ZONE_HEIGHT: f32 = 10.0;
    /// Gap between obstacles must exceed this to hold a zone
    pub const ZONE_MIN_GAP: f32 = 80.0;
    pub const ZONE_GAP_MARGIN: f32 = 20.0;
    /// Leading zone only when the first obstacle starts past this x
    pub const ZONE_LEAD_MIN_X: f32 = 100.0;
    /// Trailing zone only when this much room is left at the right edge
    pub const ZONE_TRAIL_MIN_ROOM: f32 = 100.0;
    pub const ZONE_EDGE_INSET: f32 = 50.0;
    pub const ZONE_OBSTACLE_CLEARANCE: f32 = 10.0;

    /// Plane defaults
    pub const PLANE_WIDTH: f32 = 100.0;
    pub const PLANE_HEIGHT: f32 = 30.0;
    pub const PLANE_Y: f32 = 30.0;
    pub const PLANE_SPEED: f32 = 3.0;

    /// Cosmetic clouds per round
    pub const CLOUD_COUNT: usize = 5;

    /// Scoring
    pub const LANDING_BASE_SCORE: f32 = 1000.0;
    pub const ZONE_BONUS: f32 = 500.0;
    pub const TIME_BONUS_CEILING: f32 = 200.0;
}
