//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per frame step)
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod level;
pub mod player;
pub mod score;
pub mod state;
pub mod tick;
pub mod wind;

pub use collision::{Rect, check_collision, first_obstacle_hit};
pub use level::{LandingZone, Level, Obstacle, derive_landing_zones, generate_level, generate_obstacles};
pub use player::{Player, PlayerPhase, Steer};
pub use score::calculate_score;
pub use state::{Cloud, GameEvent, Outcome, Plane, RoundPhase, RoundResult, RoundState};
pub use tick::{TickInput, tick};
pub use wind::{WindProcess, WindState};
