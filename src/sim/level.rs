//! Procedural level generation
//!
//! Places ground obstacles at random positions and derives the safe landing
//! zones between them.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// A ground-standing obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    /// Top edge (ground_y - height)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Obstacle standing on the ground at `x`
    pub fn new(x: f32, width: f32, height: f32, ground_y: f32) -> Self {
        Self {
            x,
            y: ground_y - height,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A strip of ground free of obstacles, worth a bonus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingZone {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LandingZone {
    fn on_ground(x: f32, width: f32, ground_y: f32) -> Self {
        Self {
            x,
            y: ground_y - ZONE_HEIGHT,
            width,
            height: ZONE_HEIGHT,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Inclusive horizontal containment
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.x && x <= self.right()
    }

    /// True if the zone shares any horizontal span with the obstacle
    pub fn overlaps_obstacle(&self, obstacle: &Obstacle) -> bool {
        self.x < obstacle.right() && obstacle.x < self.right()
    }
}

/// Generated layout for one round
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Sorted by x ascending
    pub obstacles: Vec<Obstacle>,
    pub landing_zones: Vec<LandingZone>,
}

/// Generate obstacles and their landing zones
pub fn generate_level<R: Rng + ?Sized>(rng: &mut R, world_width: f32, ground_y: f32) -> Level {
    let obstacles = generate_obstacles(rng, world_width, ground_y);
    let landing_zones = derive_landing_zones(&obstacles, world_width, ground_y);

    log::info!(
        "Level: {} obstacles, {} landing zones",
        obstacles.len(),
        landing_zones.len()
    );

    Level {
        obstacles,
        landing_zones,
    }
}

/// Place 5-8 obstacles between the edge margins, sorted by x.
///
/// Positions are not de-duplicated; obstacles may overlap each other.
pub fn generate_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    world_width: f32,
    ground_y: f32,
) -> Vec<Obstacle> {
    let count = rng.random_range(OBSTACLE_COUNT_MIN..=OBSTACLE_COUNT_MAX);

    let min_x = OBSTACLE_EDGE_MARGIN;
    let max_x = (world_width as i32 - OBSTACLE_EDGE_MARGIN).max(min_x);

    let mut positions: Vec<i32> = (0..count).map(|_| rng.random_range(min_x..=max_x)).collect();
    positions.sort_unstable();

    positions
        .into_iter()
        .map(|x| {
            let width = rng.random_range(OBSTACLE_MIN_WIDTH..=OBSTACLE_MAX_WIDTH);
            let height = rng.random_range(OBSTACLE_MIN_HEIGHT..=OBSTACLE_MAX_HEIGHT);
            Obstacle::new(x as f32, width as f32, height as f32, ground_y)
        })
        .collect()
}

/// Derive landing zones from obstacles.
///
/// Gaps are measured from the furthest right edge reached so far, so a wide
/// obstacle that spans past its neighbour still blocks the gap after it.
pub fn derive_landing_zones(
    obstacles: &[Obstacle],
    world_width: f32,
    ground_y: f32,
) -> Vec<LandingZone> {
    let mut sorted = obstacles.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let Some(first) = sorted.first() else {
        return Vec::new();
    };

    let mut zones = Vec::new();

    // Before the first obstacle
    if first.x > ZONE_LEAD_MIN_X {
        let width = ZONE_MAX_WIDTH.min(first.x - ZONE_EDGE_INSET);
        zones.push(LandingZone::on_ground(
            first.x - width - ZONE_OBSTACLE_CLEARANCE,
            width,
            ground_y,
        ));
    }

    // Between neighbours
    let mut reach = first.right();
    for next in sorted.iter().skip(1) {
        let gap = next.x - reach;
        if gap > ZONE_MIN_GAP {
            let width = (gap - ZONE_GAP_MARGIN).min(ZONE_MAX_WIDTH);
            zones.push(LandingZone::on_ground(
                reach + (gap - width) / 2.0,
                width,
                ground_y,
            ));
        }
        reach = reach.max(next.right());
    }

    // After the last obstacle
    if reach < world_width - ZONE_TRAIL_MIN_ROOM {
        let width = ZONE_MAX_WIDTH.min(world_width - reach - ZONE_EDGE_INSET);
        zones.push(LandingZone::on_ground(
            reach + ZONE_OBSTACLE_CLEARANCE,
            width,
            ground_y,
        ));
    }

    zones
}
