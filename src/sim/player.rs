//! Player kinematics and state machine
//!
//! Falling -> ParachuteDeployed -> Landed | Crashed. Transitions into the
//! terminal states come from collision results; the parachute transition
//! comes from the round controller.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Where the player is in the jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPhase {
    Falling,
    ParachuteDeployed,
    /// Terminal, success
    Landed,
    /// Terminal, failure
    Crashed,
}

impl PlayerPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, PlayerPhase::Landed | PlayerPhase::Crashed)
    }
}

/// Horizontal steering intent for one tick (level-triggered)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steer {
    pub left: bool,
    pub right: bool,
}

/// The skydiver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub gravity: f32,
    /// Terminal vertical speed for the current configuration
    pub max_speed: f32,
    pub parachute_deployed: bool,
    /// y at the moment the parachute opened (0 until then)
    pub altitude_at_deploy: f32,
    pub alive: bool,
    pub landed: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Player at the spawn point in free-fall configuration
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::new(0.0, PLAYER_START_VY),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            gravity: FREEFALL_GRAVITY,
            max_speed: FREEFALL_MAX_SPEED,
            parachute_deployed: false,
            altitude_at_deploy: 0.0,
            alive: true,
            landed: false,
        }
    }

    pub fn phase(&self) -> PlayerPhase {
        if !self.alive {
            PlayerPhase::Crashed
        } else if self.landed {
            PlayerPhase::Landed
        } else if self.parachute_deployed {
            PlayerPhase::ParachuteDeployed
        } else {
            PlayerPhase::Falling
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Open the parachute. Returns true only on the first call while falling.
    pub fn deploy_parachute(&mut self) -> bool {
        if self.phase() != PlayerPhase::Falling {
            return false;
        }
        self.parachute_deployed = true;
        self.altitude_at_deploy = self.pos.y;
        self.gravity = CANOPY_GRAVITY;
        self.max_speed = CANOPY_MAX_SPEED;
        log::info!("Parachute deployed at y={:.1}", self.pos.y);
        true
    }

    /// Advance one tick of steering, wind drift and gravity
    pub fn update(&mut self, steer: Steer, wind: f32, world_width: f32) {
        if self.phase().is_terminal() {
            return;
        }

        if steer.left {
            self.vel.x = (self.vel.x - STEER_ACCEL).max(-STEER_MAX_SPEED);
        } else if steer.right {
            self.vel.x = (self.vel.x + STEER_ACCEL).min(STEER_MAX_SPEED);
        } else if self.vel.x > 0.0 {
            self.vel.x = (self.vel.x - STEER_DRAG).max(0.0);
        } else if self.vel.x < 0.0 {
            self.vel.x = (self.vel.x + STEER_DRAG).min(0.0);
        }

        if self.parachute_deployed {
            self.vel.x += wind * WIND_DRIFT;
        }

        self.pos.x += self.vel.x;

        // Walls stop the player dead
        let max_x = (world_width - self.width).max(0.0);
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = 0.0;
        } else if self.pos.x > max_x {
            self.pos.x = max_x;
            self.vel.x = 0.0;
        }

        self.vel.y = (self.vel.y + self.gravity).min(self.max_speed);
        self.pos.y += self.vel.y;
    }
}
