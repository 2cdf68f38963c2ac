//! Play session
//!
//! Host-side owner of the current round, the leaderboard and its store.
//! Each step ticks the simulation, forwards events to audio and records
//! landed scores.

use crate::audio::{AudioSink, SoundEffect};
use crate::highscores::HighScores;
use crate::hud::HudSnapshot;
use crate::persistence::ScoreStore;
use crate::sim::{GameEvent, Outcome, RoundResult, RoundState, TickInput, tick};

pub struct Session {
    round: RoundState,
    high_scores: HighScores,
    store: Box<dyn ScoreStore>,
    /// Rank of the last recorded score, if it made the board
    last_rank: Option<usize>,
}

impl Session {
    /// Start a session, loading scores from `store`
    pub fn new(seed: u64, store: Box<dyn ScoreStore>) -> Self {
        let high_scores = HighScores::load(store.as_ref());
        Self {
            round: RoundState::new(seed),
            high_scores,
            store,
            last_rank: None,
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::new(&self.round, &self.high_scores)
    }

    /// Advance one tick and handle its events
    pub fn step(&mut self, input: &TickInput, audio: &mut dyn AudioSink) -> Vec<GameEvent> {
        tick(&mut self.round, input);
        let events = self.round.drain_events();

        for event in &events {
            if let Some(effect) = SoundEffect::for_event(event) {
                audio.play(effect);
            }
            match event {
                GameEvent::RoundOver(result) => self.record(*result),
                GameEvent::Reset => self.last_rank = None,
                _ => {}
            }
        }

        events
    }

    fn record(&mut self, result: RoundResult) {
        if result.outcome != Outcome::Landed {
            return;
        }
        self.last_rank = self.high_scores.add_score(result.score);
        if let Some(rank) = self.last_rank {
            log::info!("New high score #{rank}: {}", result.score);
            self.high_scores.save(self.store.as_mut());
        }
    }
}
