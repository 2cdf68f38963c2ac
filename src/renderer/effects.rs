//! Screen effects
//!
//! Camera shake and a colored flash on crash/landing, plus wind streaks
//! while the canopy is open. Purely cosmetic: effects read the round and
//! its events but never write back. Randomness comes from a separate RNG
//! so effects cannot disturb the simulation stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Canvas, Color, colors};
use crate::settings::Settings;
use crate::sim::{GameEvent, PlayerPhase, RoundState};

/// Wind below this magnitude draws no streaks
const STREAK_MIN_WIND: f32 = 0.1;
/// Streaks per unit of wind
const STREAKS_PER_WIND: f32 = 5.0;
/// Streaks stay in the upper part of the sky
const STREAK_MAX_Y_FRACTION: f32 = 0.7;
const STREAK_DROP: f32 = 10.0;
const STREAK_ALPHA: f32 = 0.3;
/// Peak opacity of a flash
const FLASH_ALPHA: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Shake {
    intensity: f32,
    duration: f32,
    remaining: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Flash {
    color: Color,
    duration: f32,
    remaining: f32,
}

/// Active screen effects for the host renderer
#[derive(Debug, Clone)]
pub struct Effects {
    shake: Option<Shake>,
    flash: Option<Flash>,
    rng: Pcg32,
}

impl Effects {
    pub fn new(seed: u64) -> Self {
        Self {
            shake: None,
            flash: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// React to a simulation event. `round` is the state after the tick.
    pub fn on_event(&mut self, event: &GameEvent, round: &RoundState, settings: &Settings) {
        // (shake px, shake s, flash color, flash s)
        let (intensity, shake_secs, color, flash_secs) = match event {
            // Obstacle hit happens in the air, hard landing on the ground
            GameEvent::Crash if round.player.landed => (8.0, 0.25, colors::FLASH_RED, 0.12),
            GameEvent::Crash => (10.0, 0.3, colors::FLASH_RED, 0.15),
            GameEvent::Land => (3.0, 0.1, colors::FLASH_GREEN, 0.08),
            GameEvent::Reset => {
                self.shake = None;
                self.flash = None;
                return;
            }
            _ => return,
        };

        if settings.effective_screen_shake() {
            self.shake = Some(Shake {
                intensity,
                duration: shake_secs,
                remaining: shake_secs,
            });
        }
        if settings.effective_screen_flash() {
            self.flash = Some(Flash {
                color,
                duration: flash_secs,
                remaining: flash_secs,
            });
        }
    }

    /// Age effects by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if let Some(shake) = &mut self.shake {
            shake.remaining -= dt;
            if shake.remaining <= 0.0 {
                self.shake = None;
            }
        }
        if let Some(flash) = &mut self.flash {
            flash.remaining -= dt;
            if flash.remaining <= 0.0 {
                self.flash = None;
            }
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.is_some()
    }

    /// Camera offset for this frame, decaying with the shake
    pub fn shake_offset(&mut self) -> (f32, f32) {
        let Some(shake) = self.shake else {
            return (0.0, 0.0);
        };
        let magnitude = shake.intensity * (shake.remaining / shake.duration).clamp(0.0, 1.0);
        (
            self.rng.random_range(-1.0..=1.0) * magnitude,
            self.rng.random_range(-1.0..=1.0) * magnitude,
        )
    }

    /// Full-screen flash overlay, fading out
    pub fn draw_flash(&self, canvas: &mut dyn Canvas, width: f32, height: f32) {
        let Some(flash) = self.flash else { return };
        let alpha = FLASH_ALPHA * (flash.remaining / flash.duration).clamp(0.0, 1.0);
        canvas.fill_rect(0.0, 0.0, width, height, flash.color.with_alpha(alpha));
    }

    /// Wind streaks while drifting under canopy. Returns how many were drawn.
    pub fn draw_wind_streaks(
        &mut self,
        round: &RoundState,
        settings: &Settings,
        canvas: &mut dyn Canvas,
    ) -> usize {
        let wind = round.wind.direction();
        if !settings.effective_wind_streaks()
            || round.player_phase() != PlayerPhase::ParachuteDeployed
            || wind.abs() <= STREAK_MIN_WIND
        {
            return 0;
        }

        let count = (wind.abs() * STREAKS_PER_WIND).ceil() as usize;
        let dir = wind.signum();
        let max_y = crate::consts::WORLD_HEIGHT * STREAK_MAX_Y_FRACTION;
        let color = colors::WHITE.with_alpha(STREAK_ALPHA);
        for _ in 0..count {
            let x = self.rng.random_range(0.0..round.world_width);
            let y = self.rng.random_range(0.0..max_y);
            let length = self.rng.random_range(20.0..50.0);
            canvas.line(x, y, x + dir * length, y + STREAK_DROP, 1.0, color);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[derive(Default)]
    struct Recorder {
        rects: Vec<Color>,
        lines: usize,
    }

    impl Canvas for Recorder {
        fn fill_rect(&mut self, _: f32, _: f32, _: f32, _: f32, color: Color) {
            self.rects.push(color);
        }

        fn fill_ellipse(&mut self, _: f32, _: f32, _: f32, _: f32, _: Color) {}

        fn line(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32, _: Color) {
            self.lines += 1;
        }
    }

    /// Round with the player under canopy in a steady wind
    fn drifting(direction: f32) -> RoundState {
        let mut round = RoundState::new(11);
        while !round.is_jumping() {
            tick(&mut round, &TickInput::default());
        }
        round.player.deploy_parachute();
        round.wind = crate::sim::WindProcess::with_state(crate::sim::WindState {
            direction,
            ticks_remaining: u32::MAX,
        });
        round
    }

    #[test]
    fn test_crash_shakes_and_flashes_red() {
        let round = RoundState::new(1);
        let mut effects = Effects::new(1);
        effects.on_event(&GameEvent::Crash, &round, &Settings::default());

        assert!(effects.is_shaking());
        let (dx, dy) = effects.shake_offset();
        assert!(dx.abs() <= 10.0 && dy.abs() <= 10.0);

        let mut canvas = Recorder::default();
        effects.draw_flash(&mut canvas, 800.0, 600.0);
        assert_eq!(canvas.rects.len(), 1);
        assert_eq!(canvas.rects[0].rgb, colors::FLASH_RED.rgb);
    }

    #[test]
    fn test_landing_flashes_green() {
        let round = RoundState::new(1);
        let mut effects = Effects::new(1);
        effects.on_event(&GameEvent::Land, &round, &Settings::default());

        let mut canvas = Recorder::default();
        effects.draw_flash(&mut canvas, 800.0, 600.0);
        assert_eq!(canvas.rects[0].rgb, colors::FLASH_GREEN.rgb);
    }

    #[test]
    fn test_effects_expire() {
        let round = RoundState::new(1);
        let mut effects = Effects::new(1);
        effects.on_event(&GameEvent::Crash, &round, &Settings::default());

        effects.update(0.2);
        assert!(effects.is_shaking());
        assert!(!effects.is_flashing());

        effects.update(0.2);
        assert!(!effects.is_shaking());
        assert_eq!(effects.shake_offset(), (0.0, 0.0));
    }

    #[test]
    fn test_reduced_motion_suppresses_effects() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let mut effects = Effects::new(1);
        effects.on_event(&GameEvent::Crash, &RoundState::new(1), &settings);
        assert!(!effects.is_shaking());
        assert!(!effects.is_flashing());

        let mut canvas = Recorder::default();
        effects.draw_flash(&mut canvas, 800.0, 600.0);
        let round = drifting(0.8);
        assert_eq!(effects.draw_wind_streaks(&round, &settings, &mut canvas), 0);
        assert!(canvas.rects.is_empty());
        assert_eq!(canvas.lines, 0);
    }

    #[test]
    fn test_toggles_gate_each_effect() {
        let settings = Settings {
            screen_shake: false,
            ..Default::default()
        };
        let mut effects = Effects::new(1);
        effects.on_event(&GameEvent::Land, &RoundState::new(1), &settings);
        assert!(!effects.is_shaking());
        assert!(effects.is_flashing());
    }

    #[test]
    fn test_wind_streaks_under_canopy() {
        let settings = Settings::default();
        let mut effects = Effects::new(3);
        let mut canvas = Recorder::default();

        // 2.5 streaks' worth of wind rounds up
        let round = drifting(-0.5);
        assert_eq!(effects.draw_wind_streaks(&round, &settings, &mut canvas), 3);
        assert_eq!(canvas.lines, 3);

        let calm = drifting(0.05);
        assert_eq!(effects.draw_wind_streaks(&calm, &settings, &mut canvas), 0);

        // Free fall draws nothing even in strong wind
        let mut falling = drifting(1.0);
        falling.player = crate::sim::Player::new();
        assert_eq!(effects.draw_wind_streaks(&falling, &settings, &mut canvas), 0);
    }

    #[test]
    fn test_reset_clears_effects() {
        let round = RoundState::new(1);
        let mut effects = Effects::new(1);
        effects.on_event(&GameEvent::Crash, &round, &Settings::default());
        effects.on_event(&GameEvent::Reset, &round, &Settings::default());
        assert!(!effects.is_shaking());
        assert!(!effects.is_flashing());
    }
}
