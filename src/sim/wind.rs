//! Wind process
//!
//! Holds a horizontal wind direction for a random number of ticks, then
//! jumps to a fresh uniformly sampled direction. No smoothing between holds.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{WIND_MAX_TICKS, WIND_MIN_TICKS};

/// Current wind reading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindState {
    /// Horizontal wind in [-1, 1]; negative blows left
    pub direction: f32,
    /// Ticks until the next resample
    pub ticks_remaining: u32,
}

/// Slowly changing wind source, advanced once per tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindProcess {
    state: WindState,
    /// Number of resamples since creation
    shifts: u64,
}

impl WindProcess {
    /// Calm wind that resamples on its first tick
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit reading
    pub fn with_state(state: WindState) -> Self {
        Self { state, shifts: 0 }
    }

    pub fn state(&self) -> WindState {
        self.state
    }

    pub fn direction(&self) -> f32 {
        self.state.direction
    }

    pub fn shifts(&self) -> u64 {
        self.shifts
    }

    /// Advance by exactly one tick, resampling at most once
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> WindState {
        self.state.ticks_remaining = self.state.ticks_remaining.saturating_sub(1);
        if self.state.ticks_remaining == 0 {
            self.state.ticks_remaining = rng.random_range(WIND_MIN_TICKS..=WIND_MAX_TICKS);
            self.state.direction = rng.random_range(-1.0..=1.0);
            self.shifts += 1;
            log::debug!(
                "Wind shift: {:.2} for {} ticks",
                self.state.direction,
                self.state.ticks_remaining
            );
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_first_tick_resamples() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut wind = WindProcess::new();
        let state = wind.tick(&mut rng);

        assert_eq!(wind.shifts(), 1);
        assert!((-1.0..=1.0).contains(&state.direction));
        assert!((WIND_MIN_TICKS..=WIND_MAX_TICKS).contains(&state.ticks_remaining));
    }

    #[test]
    fn test_holds_direction_until_expiry() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut wind = WindProcess::with_state(WindState {
            direction: 0.5,
            ticks_remaining: 4,
        });

        for expected in [3, 2, 1] {
            let state = wind.tick(&mut rng);
            assert_eq!(state.direction, 0.5);
            assert_eq!(state.ticks_remaining, expected);
        }
        assert_eq!(wind.shifts(), 0);

        wind.tick(&mut rng);
        assert_eq!(wind.shifts(), 1);
    }

    #[test]
    fn test_one_resample_per_tick() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut wind = WindProcess::with_state(WindState {
            direction: 0.0,
            ticks_remaining: 1,
        });

        wind.tick(&mut rng);
        assert_eq!(wind.shifts(), 1);
        let after_shift = wind.state();

        // Fresh hold is at least 180 ticks, so the next tick only counts down
        let next = wind.tick(&mut rng);
        assert_eq!(wind.shifts(), 1);
        assert_eq!(next.direction, after_shift.direction);
        assert_eq!(next.ticks_remaining, after_shift.ticks_remaining - 1);
    }

    #[test]
    fn test_long_run_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut wind = WindProcess::new();
        let mut last_shifts = 0;

        for _ in 0..10_000 {
            let state = wind.tick(&mut rng);
            assert!((-1.0..=1.0).contains(&state.direction));
            assert!(state.ticks_remaining >= 1);
            assert!(wind.shifts() - last_shifts <= 1);
            last_shifts = wind.shifts();
        }
        // 10k ticks with holds of at most 360 ticks
        assert!(wind.shifts() >= 10_000 / WIND_MAX_TICKS as u64);
    }
}
