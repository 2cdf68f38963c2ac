//! HUD text
//!
//! Pure projections of a round into display strings. Nothing here feeds back
//! into the simulation.

use crate::highscores::{DISPLAYED_HIGH_SCORES, HighScores};
use crate::sim::{Outcome, PlayerPhase, RoundPhase, RoundState};

/// Wind below this magnitude reads as calm
const CALM_THRESHOLD: f32 = 0.1;
/// Wind strength shown on a 0-5 scale
const WIND_DISPLAY_SCALE: f32 = 5.0;
/// World units per displayed meter
const UNITS_PER_METER: f32 = 10.0;

/// One-word round status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Falling,
    Parachute,
    Landed,
    Crashed,
}

impl Status {
    pub fn of(round: &RoundState) -> Self {
        if round.phase == RoundPhase::Boarding {
            return Status::Ready;
        }
        match round.player_phase() {
            PlayerPhase::Falling => Status::Falling,
            PlayerPhase::ParachuteDeployed => Status::Parachute,
            PlayerPhase::Landed => Status::Landed,
            PlayerPhase::Crashed => Status::Crashed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ready => "Ready",
            Status::Falling => "Falling",
            Status::Parachute => "Parachute",
            Status::Landed => "Landed!",
            Status::Crashed => "Crashed",
        }
    }
}

/// Arrow and 0-5 strength, or "Calm"
pub fn wind_label(direction: f32) -> String {
    let strength = (direction.abs() * WIND_DISPLAY_SCALE).floor() as u32;
    if direction < -CALM_THRESHOLD {
        format!("← {strength}")
    } else if direction > CALM_THRESHOLD {
        format!("→ {strength}")
    } else {
        "Calm".to_string()
    }
}

/// Height of the player's top edge above the ground in meters
pub fn altitude_meters(ground_y: f32, y: f32) -> u32 {
    ((ground_y - y) / UNITS_PER_METER).floor().max(0.0) as u32
}

/// Altitude readout, only while the player is in the air
pub fn altitude_label(round: &RoundState) -> String {
    if round.phase == RoundPhase::Jumping {
        format!("{}m", altitude_meters(round.ground_y, round.player.pos.y))
    } else {
        "---".to_string()
    }
}

/// Headline shown once the round is over
pub fn banner(round: &RoundState) -> Option<&'static str> {
    round.result.map(|result| match result.outcome {
        Outcome::Landed => "MISSION SUCCESS!",
        Outcome::Crashed => "MISSION FAILED",
    })
}

/// Score line, only for a positive landed score
pub fn score_line(round: &RoundState) -> Option<String> {
    round
        .result
        .filter(|r| r.outcome == Outcome::Landed && r.score > 0)
        .map(|r| format!("Final Score: {}", r.score))
}

pub const RESTART_HINT: &str = "Press [R] to Play Again";

/// Top rows of the leaderboard with medals for the podium
pub fn high_score_lines(scores: &HighScores) -> Vec<String> {
    scores
        .entries
        .iter()
        .take(DISPLAYED_HIGH_SCORES)
        .enumerate()
        .map(|(i, score)| {
            let rank = match i {
                0 => "🥇".to_string(),
                1 => "🥈".to_string(),
                2 => "🥉".to_string(),
                _ => format!("{}.", i + 1),
            };
            format!("{rank} {score}")
        })
        .collect()
}

/// Everything the HUD shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub wind: String,
    pub altitude: String,
    pub status: Status,
    pub banner: Option<&'static str>,
    pub score: Option<String>,
    pub high_scores: Vec<String>,
}

impl HudSnapshot {
    pub fn new(round: &RoundState, scores: &HighScores) -> Self {
        let over = round.is_over();
        Self {
            wind: wind_label(round.wind.direction()),
            altitude: altitude_label(round),
            status: Status::of(round),
            banner: banner(round),
            score: score_line(round),
            high_scores: if over { high_score_lines(scores) } else { Vec::new() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GROUND_Y;
    use crate::sim::{RoundResult, TickInput, tick};

    #[test]
    fn test_wind_label() {
        assert_eq!(wind_label(0.0), "Calm");
        assert_eq!(wind_label(0.1), "Calm");
        assert_eq!(wind_label(-0.1), "Calm");
        assert_eq!(wind_label(0.5), "→ 2");
        assert_eq!(wind_label(-0.99), "← 4");
        assert_eq!(wind_label(1.0), "→ 5");
    }

    #[test]
    fn test_altitude_meters() {
        assert_eq!(altitude_meters(GROUND_Y, 50.0), 53);
        assert_eq!(altitude_meters(GROUND_Y, GROUND_Y - 9.0), 0);
        assert_eq!(altitude_meters(GROUND_Y, GROUND_Y + 5.0), 0);
    }

    #[test]
    fn test_status_follows_round() {
        let mut round = RoundState::new(21);
        assert_eq!(Status::of(&round), Status::Ready);
        assert_eq!(altitude_label(&round), "---");

        while !round.is_jumping() {
            tick(&mut round, &TickInput::default());
        }
        assert_eq!(Status::of(&round), Status::Falling);
        assert!(altitude_label(&round).ends_with('m'));

        tick(&mut round, &TickInput { deploy: true, ..Default::default() });
        if !round.is_over() {
            assert_eq!(Status::of(&round), Status::Parachute);
        }
    }

    #[test]
    fn test_game_over_lines() {
        let mut round = RoundState::new(1);
        assert_eq!(banner(&round), None);

        round.result = Some(RoundResult {
            score: 1234,
            outcome: Outcome::Landed,
        });
        assert_eq!(banner(&round), Some("MISSION SUCCESS!"));
        assert_eq!(score_line(&round).as_deref(), Some("Final Score: 1234"));

        round.result = Some(RoundResult {
            score: 0,
            outcome: Outcome::Crashed,
        });
        assert_eq!(banner(&round), Some("MISSION FAILED"));
        assert_eq!(score_line(&round), None);
    }

    #[test]
    fn test_high_score_lines() {
        let scores = HighScores::from_scores(vec![100, 600, 500, 400, 300, 200]);
        let lines = high_score_lines(&scores);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "🥇 600");
        assert_eq!(lines[2], "🥉 400");
        assert_eq!(lines[3], "4. 300");
    }
}
