//! Fixed timestep simulation tick
//!
//! Round controller: advances wind, plane and clouds, drops the player at the
//! jump point, then steers, integrates and collides the player until the
//! round ends.

use super::collision::check_collision;
use super::player::Steer;
use super::score::calculate_score;
use super::state::{GameEvent, Outcome, RoundPhase, RoundResult, RoundState};

/// Input commands for a single tick (deterministic)
///
/// Movement is level-triggered; `deploy` and `reset` must already be
/// edge-detected by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Open the parachute (fires once)
    pub deploy: bool,
    /// Discard the round and generate a new one (fires once)
    pub reset: bool,
}

impl TickInput {
    pub fn steer(&self) -> Steer {
        Steer {
            left: self.left,
            right: self.right,
        }
    }
}

/// Advance the round by one tick
///
/// `state.events` holds only this tick's events afterwards; hosts that
/// care must read or drain them before the next call.
pub fn tick(state: &mut RoundState, input: &TickInput) {
    state.events.clear();

    // Reset is always accepted and ends this tick
    if input.reset {
        log::info!("Round reset (seed {})", state.seed);
        state.reset();
        return;
    }

    state.time_ticks += 1;

    let world_width = state.world_width;

    let shifts = state.wind.shifts();
    let wind = state.wind.tick(&mut state.rng);
    if state.wind.shifts() != shifts {
        state.events.push(GameEvent::WindShift {
            direction: wind.direction,
        });
    }

    state.plane.update(world_width);
    for cloud in &mut state.clouds {
        cloud.update(&mut state.rng, world_width);
    }

    if state.phase == RoundPhase::Boarding && state.plane.jump_point() > world_width / 3.0 {
        state.phase = RoundPhase::Jumping;
        state.player.pos.x = state.plane.jump_point();
        state.player.pos.y = state.plane.y + state.plane.height;
        state.events.push(GameEvent::Jump);
        log::info!("Jump at x={:.1}", state.player.pos.x);
    }

    if state.phase != RoundPhase::Jumping || !state.player.alive {
        return;
    }

    if input.deploy && state.player.deploy_parachute() {
        state.events.push(GameEvent::Deploy);
    }

    state
        .player
        .update(input.steer(), wind.direction, world_width);

    let Some(outcome) = check_collision(&mut state.player, &state.obstacles, state.ground_y) else {
        return;
    };

    let score = match outcome {
        Outcome::Landed => {
            calculate_score(&state.player, &state.obstacles, &state.landing_zones)
        }
        Outcome::Crashed => 0,
    };
    let result = RoundResult { score, outcome };

    state.events.push(match outcome {
        Outcome::Landed => GameEvent::Land,
        Outcome::Crashed => GameEvent::Crash,
    });
    state.events.push(GameEvent::RoundOver(result));
    state.result = Some(result);
    state.phase = RoundPhase::Over;

    log::info!(
        "Round over: {:?}, score {} after {} ticks",
        outcome,
        score,
        state.time_ticks
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::level::{LandingZone, Obstacle};
    use crate::sim::player::PlayerPhase;

    /// Run until the player leaves the plane
    fn run_to_jump(state: &mut RoundState) -> u64 {
        let input = TickInput::default();
        while state.phase == RoundPhase::Boarding {
            tick(state, &input);
            assert!(state.time_ticks < 1000, "player never jumped");
        }
        state.time_ticks
    }

    fn run_to_end(state: &mut RoundState, input: &TickInput) {
        while !state.is_over() {
            tick(state, input);
            assert!(state.time_ticks < 5000, "round never ended");
        }
    }

    #[test]
    fn test_boarding_to_jump() {
        let mut state = RoundState::new(12345);
        let ticks = run_to_jump(&mut state);

        // Midpoint starts at -50 and must pass 800/3 at 3 per tick
        assert_eq!(ticks, 106);
        assert!(state.events.contains(&GameEvent::Jump));
        // Dropped at the door, then one tick of free fall
        assert_eq!(state.player.pos.x, state.plane.jump_point());
        let door_y = PLANE_Y + PLANE_HEIGHT;
        assert!((state.player.pos.y - (door_y + 1.2)).abs() < 1e-4);
        assert_eq!(state.player_phase(), PlayerPhase::Falling);
    }

    #[test]
    fn test_deploy_before_jump_is_ignored() {
        let mut state = RoundState::new(1);
        let deploy = TickInput {
            deploy: true,
            ..Default::default()
        };
        tick(&mut state, &deploy);
        assert!(!state.player.parachute_deployed);
        assert_eq!(state.player.pos.y, PLAYER_SPAWN_Y);
    }

    #[test]
    fn test_free_fall_crashes() {
        let mut state = RoundState::new(2);
        state.obstacles.clear();
        state.landing_zones.clear();
        run_to_end(&mut state, &TickInput::default());

        let result = state.result.expect("round should have a result");
        assert_eq!(result.outcome, Outcome::Crashed);
        assert_eq!(result.score, 0);
        assert!(state.events.contains(&GameEvent::Crash));
        assert!(state.events.contains(&GameEvent::RoundOver(result)));
    }

    #[test]
    fn test_early_deploy_lands_softly() {
        let mut state = RoundState::new(3);
        state.obstacles = vec![Obstacle::new(600.0, 50.0, 60.0, GROUND_Y)];
        state.landing_zones = vec![LandingZone {
            x: 250.0,
            y: GROUND_Y - ZONE_HEIGHT,
            width: 100.0,
            height: ZONE_HEIGHT,
        }];
        run_to_jump(&mut state);

        let deploy = TickInput {
            deploy: true,
            ..Default::default()
        };
        tick(&mut state, &deploy);
        assert!(state.events.contains(&GameEvent::Deploy));

        // Hold the wind still so the landing spot is predictable
        state.wind = crate::sim::WindProcess::with_state(crate::sim::WindState {
            direction: 0.0,
            ticks_remaining: u32::MAX,
        });
        run_to_end(&mut state, &TickInput::default());

        let result = state.result.expect("round should have a result");
        assert_eq!(result.outcome, Outcome::Landed);
        assert!(result.score > 0);
        assert!(state.player.landed);
        assert_eq!(state.player.pos.y, GROUND_Y - PLAYER_HEIGHT);
        assert!(state.events.contains(&GameEvent::Land));
    }

    #[test]
    fn test_obstacle_ends_round_midair() {
        let mut state = RoundState::new(4);
        run_to_jump(&mut state);

        // Tall block right under the player
        let x = state.player.pos.x;
        state.obstacles = vec![Obstacle::new(x - 20.0, 80.0, 400.0, GROUND_Y)];
        run_to_end(&mut state, &TickInput::default());

        let result = state.result.expect("round should have a result");
        assert_eq!(result, RoundResult { score: 0, outcome: Outcome::Crashed });
        assert!(!state.player.landed, "crash happened above the ground");
        assert!(state.player.pos.y + PLAYER_HEIGHT < GROUND_Y);
    }

    #[test]
    fn test_round_frozen_after_outcome() {
        let mut state = RoundState::new(5);
        state.obstacles.clear();
        run_to_end(&mut state, &TickInput::default());
        let player = state.player.clone();
        let result = state.result;

        for _ in 0..10 {
            tick(&mut state, &TickInput { left: true, deploy: true, ..Default::default() });
        }
        assert_eq!(state.player, player);
        assert_eq!(state.result, result);
    }

    #[test]
    fn test_reset_mid_fall() {
        let mut state = RoundState::new(6);
        run_to_jump(&mut state);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        let old_seed = state.seed;

        tick(&mut state, &TickInput { reset: true, ..Default::default() });

        assert_ne!(state.seed, old_seed);
        assert_eq!(state.phase, RoundPhase::Boarding);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player.pos.y, PLAYER_SPAWN_Y);
        assert!(state.result.is_none());
        assert_eq!(state.events, vec![GameEvent::Reset]);
        assert_eq!(state.obstacles, RoundState::new(state.seed).obstacles);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_wind_shift_events() {
        let mut state = RoundState::new(8);
        tick(&mut state, &TickInput::default());
        let shifts: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::WindShift { .. }))
            .collect();
        assert_eq!(shifts.len(), 1, "first tick samples the wind");

        for _ in 0..WIND_MIN_TICKS - 1 {
            tick(&mut state, &TickInput::default());
        }
        assert!(
            !state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::WindShift { .. })),
            "wind holds for at least 180 ticks"
        );
    }

    #[test]
    fn test_events_hold_only_latest_tick() {
        let mut state = RoundState::new(10);
        state.obstacles.clear();
        let mut saw_shift = false;

        // Long enough to see several wind shifts and the end of the round
        for _ in 0..3000 {
            tick(&mut state, &TickInput::default());
            assert!(state.events.len() <= 3, "events piled up: {:?}", state.events);
            saw_shift |= state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::WindShift { .. }));
        }
        assert!(saw_shift);
        assert!(state.is_over());
        assert!(!state.events.contains(&GameEvent::Crash), "stale outcome event");
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            TickInput::default(),
            TickInput { right: true, ..Default::default() },
            TickInput { deploy: true, ..Default::default() },
            TickInput { left: true, ..Default::default() },
        ];

        let mut a = RoundState::new(99999);
        let mut b = RoundState::new(99999);
        for i in 0..600 {
            let input = inputs[(i / 50) % inputs.len()];
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.player, b.player);
        assert_eq!(a.result, b.result);
        assert_eq!(a.events, b.events);
    }
}
