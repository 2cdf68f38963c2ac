//! Platform abstraction layer
//!
//! Turns raw held-key state into per-tick simulation input. Movement keys
//! pass straight through; deploy and reset fire only on the tick the key
//! goes down.

use crate::sim::TickInput;

/// Keys currently held, as reported by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub deploy: bool,
    pub reset: bool,
}

/// Rising-edge detector for the one-shot keys
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    prev: KeyState,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the keys for one tick
    pub fn sample(&mut self, keys: KeyState) -> TickInput {
        let input = TickInput {
            left: keys.left,
            right: keys.right,
            deploy: keys.deploy && !self.prev.deploy,
            reset: keys.reset && !self.prev.reset,
        };
        self.prev = keys;
        input
    }
}

/// Drop one-shot inputs so extra substeps in the same frame don't repeat them
pub fn clear_one_shots(input: &mut TickInput) {
    input.deploy = false;
    input.reset = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_fires_once_per_press() {
        let mut latch = InputLatch::new();
        let held = KeyState {
            deploy: true,
            ..Default::default()
        };

        assert!(latch.sample(held).deploy);
        assert!(!latch.sample(held).deploy);
        assert!(!latch.sample(held).deploy);

        latch.sample(KeyState::default());
        assert!(latch.sample(held).deploy);
    }

    #[test]
    fn test_movement_is_level_triggered() {
        let mut latch = InputLatch::new();
        let held = KeyState {
            left: true,
            reset: true,
            ..Default::default()
        };
        let first = latch.sample(held);
        let second = latch.sample(held);
        assert!(first.left && second.left);
        assert!(first.reset);
        assert!(!second.reset);
    }

    #[test]
    fn test_clear_one_shots() {
        let mut input = TickInput {
            right: true,
            deploy: true,
            reset: true,
            ..Default::default()
        };
        clear_one_shots(&mut input);
        assert!(input.right);
        assert!(!input.deploy && !input.reset);
    }
}
