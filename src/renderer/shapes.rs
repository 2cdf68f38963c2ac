//! Per-entity drawing

use super::{Canvas, colors};
use crate::sim::{Cloud, LandingZone, Obstacle, Plane, Player, RoundState};

/// Canopy size relative to the player
const PARACHUTE_WIDTH: f32 = 80.0;
const PARACHUTE_HEIGHT: f32 = 40.0;
/// Hazard stripe period on obstacles
const STRIPE_WIDTH: f32 = 20.0;
const STRIPE_HEIGHT: f32 = 15.0;

/// Something that can draw itself onto a canvas
pub trait Draw {
    fn draw(&self, canvas: &mut dyn Canvas);
}

impl Draw for Player {
    fn draw(&self, canvas: &mut dyn Canvas) {
        let (x, y) = (self.pos.x, self.pos.y);

        if self.parachute_deployed {
            let canopy_x = x - (PARACHUTE_WIDTH - self.width) / 2.0;
            let canopy_y = y - PARACHUTE_HEIGHT;
            canvas.fill_ellipse(canopy_x, canopy_y, PARACHUTE_WIDTH, PARACHUTE_HEIGHT, colors::PARACHUTE_RED);
            canvas.line(x + 8.0, y + 5.0, canopy_x + 15.0, y - 8.0, 3.0, colors::BLACK);
            canvas.line(
                x + self.width - 8.0,
                y + 5.0,
                canopy_x + PARACHUTE_WIDTH - 15.0,
                y - 8.0,
                3.0,
                colors::BLACK,
            );
        }

        let body = if self.alive { colors::PLAYER_BLUE } else { colors::RED };
        canvas.fill_rect(x, y, self.width, self.height, body);
        // Helmet
        canvas.fill_ellipse(x + 4.0, y - 1.0, self.width - 8.0, 18.0, colors::WHITE);
    }
}

impl Draw for Plane {
    fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.active {
            return;
        }
        canvas.fill_rect(self.x, self.y, self.width, self.height, colors::PLANE_SILVER);
        // Wing
        canvas.line(
            self.x + 25.0,
            self.y,
            self.x + 50.0,
            self.y - 18.0,
            4.0,
            colors::PLANE_SILVER,
        );
    }
}

impl Draw for Obstacle {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.x, self.y, self.width, self.height, colors::OBSTACLE_GREEN);

        let mut offset = 0.0;
        let mut stripe = 0;
        while offset < self.width {
            if stripe % 2 == 0 {
                let w = STRIPE_WIDTH.min(self.width - offset);
                canvas.fill_rect(self.x + offset, self.y, w, STRIPE_HEIGHT, colors::WARNING_YELLOW);
            }
            offset += STRIPE_WIDTH;
            stripe += 1;
        }
    }
}

impl Draw for LandingZone {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(
            self.x,
            self.y,
            self.width,
            self.height,
            colors::SAFE_ZONE.with_alpha(0.5),
        );
        let ground = self.y + self.height;
        canvas.line(self.x, ground, self.x + self.width, ground, 5.0, colors::WHITE);
    }
}

impl Draw for Cloud {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_ellipse(self.x, self.y, self.width, self.height, colors::CLOUD_WHITE);
    }
}

/// Draw a whole round back to front
pub fn draw_round(round: &RoundState, canvas: &mut dyn Canvas) {
    for cloud in &round.clouds {
        cloud.draw(canvas);
    }
    round.plane.draw(canvas);

    canvas.fill_rect(
        0.0,
        round.ground_y,
        round.world_width,
        crate::consts::WORLD_HEIGHT - round.ground_y,
        colors::GROUND_BROWN,
    );

    for zone in &round.landing_zones {
        zone.draw(canvas);
    }
    for obstacle in &round.obstacles {
        obstacle.draw(canvas);
    }
    if round.is_jumping() {
        round.player.draw(canvas);
    }
}
