//! Collision detection against obstacles and the ground
//!
//! Obstacles are tested before the ground; the first hit decides the
//! outcome. The detector only touches the player to apply the outcome it
//! returns (clamp to the ground, mark landed, mark dead).

use serde::{Deserialize, Serialize};

use super::level::Obstacle;
use super::player::Player;
use super::state::Outcome;
use crate::consts::HARD_LANDING_SPEED;

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }
}

/// Index of the first obstacle overlapping the player, if any
pub fn first_obstacle_hit(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    let bounds = player.bounds();
    obstacles
        .iter()
        .position(|obstacle| bounds.intersects(&obstacle.bounds()))
}

/// Test the player against obstacles, then the ground.
///
/// Returns `None` while the player is still airborne and clear.
pub fn check_collision(player: &mut Player, obstacles: &[Obstacle], ground_y: f32) -> Option<Outcome> {
    if first_obstacle_hit(player, obstacles).is_some() {
        player.alive = false;
        return Some(Outcome::Crashed);
    }

    if player.bounds().bottom() >= ground_y {
        player.pos.y = ground_y - player.height;
        player.landed = true;

        if player.vel.y > HARD_LANDING_SPEED {
            player.alive = false;
            return Some(Outcome::Crashed);
        }
        return Some(Outcome::Landed);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn player_at(x: f32, y: f32, vy: f32) -> Player {
        let mut player = Player::new();
        player.pos = Vec2::new(x, y);
        player.vel = Vec2::new(0.0, vy);
        player
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Shared edge is not an overlap
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_airborne_no_outcome() {
        let obstacles = [Obstacle::new(300.0, 50.0, 80.0, GROUND_Y)];
        let mut player = player_at(100.0, 200.0, 5.0);
        assert_eq!(check_collision(&mut player, &obstacles, GROUND_Y), None);
        assert!(player.alive);
        assert!(!player.landed);
    }

    #[test]
    fn test_obstacle_hit_crashes_midair() {
        // Obstacle top at 500, player bottom at 510
        let obstacles = [Obstacle::new(300.0, 50.0, 80.0, GROUND_Y)];
        let mut player = player_at(290.0, 450.0, 1.0);

        assert_eq!(check_collision(&mut player, &obstacles, GROUND_Y), Some(Outcome::Crashed));
        assert!(!player.alive);
        assert!(!player.landed);
        assert_eq!(player.pos.y, 450.0, "obstacle crash leaves position alone");
    }

    #[test]
    fn test_obstacle_checked_before_ground() {
        // Slow enough for a soft landing, but inside an obstacle
        let obstacles = [Obstacle::new(300.0, 50.0, 80.0, GROUND_Y)];
        let mut player = player_at(300.0, GROUND_Y - 50.0, 1.0);
        assert_eq!(check_collision(&mut player, &obstacles, GROUND_Y), Some(Outcome::Crashed));
        assert!(!player.landed);
    }

    #[test]
    fn test_soft_landing_clamps_to_ground() {
        let mut player = player_at(100.0, GROUND_Y - PLAYER_HEIGHT + 1.5, 2.0);
        assert_eq!(check_collision(&mut player, &[], GROUND_Y), Some(Outcome::Landed));
        assert_eq!(player.pos.y, GROUND_Y - PLAYER_HEIGHT);
        assert!(player.landed);
        assert!(player.alive);
    }

    #[test]
    fn test_hard_landing_threshold() {
        let mut at_limit = player_at(100.0, GROUND_Y, HARD_LANDING_SPEED);
        assert_eq!(check_collision(&mut at_limit, &[], GROUND_Y), Some(Outcome::Landed));

        let mut over = player_at(100.0, GROUND_Y, HARD_LANDING_SPEED + 0.01);
        assert_eq!(check_collision(&mut over, &[], GROUND_Y), Some(Outcome::Crashed));
        assert!(over.landed);
        assert!(!over.alive);
        assert_eq!(over.pos.y, GROUND_Y - PLAYER_HEIGHT);
    }

    proptest! {
        #[test]
        fn ground_contact_outcome_depends_only_on_speed(
            x in 0.0f32..(WORLD_WIDTH - PLAYER_WIDTH),
            depth in 0.0f32..20.0,
            vy in 0.0f32..8.0,
        ) {
            let mut player = player_at(x, GROUND_Y - PLAYER_HEIGHT + depth, vy);
            let outcome = check_collision(&mut player, &[], GROUND_Y);

            let expected = if vy > HARD_LANDING_SPEED { Outcome::Crashed } else { Outcome::Landed };
            prop_assert_eq!(outcome, Some(expected));
            prop_assert_eq!(player.alive, expected == Outcome::Landed);
            prop_assert!(player.landed);
            prop_assert_eq!(player.pos.y, GROUND_Y - PLAYER_HEIGHT);
        }
    }
}
