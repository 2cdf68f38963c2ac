//! Landing score
//!
//! score = floor(landing + time bonus), never negative, where
//! - landing = 1000 - mean horizontal distance to every obstacle center,
//!   plus 500 if the player's center is inside a landing zone
//! - time bonus = max(0, 200 - y at deploy)

use super::level::{LandingZone, Obstacle};
use super::player::Player;
use crate::consts::{LANDING_BASE_SCORE, TIME_BONUS_CEILING, ZONE_BONUS};

/// Score a finished round. Dead players score 0.
pub fn calculate_score(player: &Player, obstacles: &[Obstacle], zones: &[LandingZone]) -> u64 {
    if !player.alive {
        return 0;
    }

    let center_x = player.center_x();

    let mut landing = LANDING_BASE_SCORE;
    if !obstacles.is_empty() {
        let total: f32 = obstacles.iter().map(|o| (center_x - o.center_x()).abs()).sum();
        landing -= total / obstacles.len() as f32;
    }

    if zones.iter().any(|zone| zone.contains_x(center_x)) {
        landing += ZONE_BONUS;
    }

    let time_bonus = (TIME_BONUS_CEILING - player.altitude_at_deploy).max(0.0);

    let score = (landing + time_bonus).floor();
    if score.is_finite() && score > 0.0 {
        score as u64
    } else {
        0
    }
}
