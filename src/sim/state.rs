//! Round state and core simulation types
//!
//! A round is everything between one reset and the next. It owns its own
//! RNG, so a round is fully reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{LandingZone, Level, Obstacle, generate_level};
use super::player::{Player, PlayerPhase};
use super::wind::WindProcess;
use crate::consts::*;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Landed,
    Crashed,
}

/// Final result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub score: u64,
    pub outcome: Outcome,
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Plane crossing, player still aboard
    Boarding,
    /// Player out of the plane
    Jumping,
    /// Player landed or crashed
    Over,
}

/// Things that happened during a tick, for audio and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jump,
    Deploy,
    WindShift { direction: f32 },
    Crash,
    Land,
    RoundOver(RoundResult),
    Reset,
}

/// The aircraft the player jumps from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub active: bool,
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            x: -PLANE_WIDTH,
            y: PLANE_Y,
            width: PLANE_WIDTH,
            height: PLANE_HEIGHT,
            speed: PLANE_SPEED,
            active: true,
        }
    }
}

impl Plane {
    /// Fly right; deactivate once fully off the right edge
    pub fn update(&mut self, world_width: f32) {
        if !self.active {
            return;
        }
        self.x += self.speed;
        if self.x > world_width {
            self.x = -self.width;
            self.active = false;
        }
    }

    /// Jump door position, mid-fuselage
    pub fn jump_point(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Background cloud, cosmetic only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Cloud {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, world_width: f32) -> Self {
        Self {
            width: rng.random_range(50..=150) as f32,
            height: rng.random_range(30..=60) as f32,
            x: rng.random_range(0..=world_width as i32) as f32,
            y: rng.random_range(50..=200) as f32,
            speed: rng.random_range(0.2..=1.0),
        }
    }

    /// Drift right, wrapping to the left edge at a new height
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, world_width: f32) {
        self.x += self.speed;
        if self.x > world_width {
            self.x = -self.width;
            self.y = rng.random_range(50..=200) as f32;
        }
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Seed this round was generated from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub world_width: f32,
    pub ground_y: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: RoundPhase,
    pub wind: WindProcess,
    pub plane: Plane,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub landing_zones: Vec<LandingZone>,
    pub clouds: Vec<Cloud>,
    pub result: Option<RoundResult>,
    /// Events from the most recent tick, cleared when the next one starts
    pub events: Vec<GameEvent>,
}

impl RoundState {
    /// Generate a fresh round with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let Level {
            obstacles,
            landing_zones,
        } = generate_level(&mut rng, WORLD_WIDTH, GROUND_Y);
        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud::random(&mut rng, WORLD_WIDTH))
            .collect();

        log::info!("Round generated (seed {seed})");

        Self {
            seed,
            rng,
            world_width: WORLD_WIDTH,
            ground_y: GROUND_Y,
            time_ticks: 0,
            phase: RoundPhase::Boarding,
            wind: WindProcess::new(),
            plane: Plane::default(),
            player: Player::new(),
            obstacles,
            landing_zones,
            clouds,
            result: None,
            events: Vec::new(),
        }
    }

    /// Replace this round with a freshly generated one.
    ///
    /// The next seed comes from this round's RNG, so a whole run is
    /// reproducible from its first seed.
    pub fn reset(&mut self) {
        let next_seed = self.rng.random::<u64>();
        *self = Self::new(next_seed);
        self.events.push(GameEvent::Reset);
    }

    pub fn is_jumping(&self) -> bool {
        self.phase != RoundPhase::Boarding
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Over
    }

    pub fn player_phase(&self) -> PlayerPhase {
        self.player.phase()
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
