//! Horizontal auto-shift controller.
//!
//! A held direction key requests a one-column move on every tick. The delay and
//! repeat settings are carried for configuration and inspection but do not gate
//! movement: holding a key is continuous per-frame motion, not two-stage DAS.
//! When both keys are down, left wins.

use crate::types::{HeldKeys, HorizontalDirection, DEFAULT_DAS_DELAY, DEFAULT_DAS_SPEED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DasController {
    held: HorizontalDirection,
    repeat_timer: u32,
    das_delay: u32,
    das_speed: u32,
}

impl DasController {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_DELAY, DEFAULT_DAS_SPEED)
    }

    pub fn with_config(das_delay: u32, das_speed: u32) -> Self {
        Self {
            held: HorizontalDirection::None,
            repeat_timer: 0,
            das_delay,
            das_speed,
        }
    }

    pub fn held(&self) -> HorizontalDirection {
        self.held
    }

    /// Consecutive ticks a direction has been held.
    pub fn repeat_timer(&self) -> u32 {
        self.repeat_timer
    }

    pub fn das_delay(&self) -> u32 {
        self.das_delay
    }

    pub fn das_speed(&self) -> u32 {
        self.das_speed
    }

    /// Advance one tick. Returns the column offset to request, if any.
    pub fn update(&mut self, keys: HeldKeys) -> Option<i8> {
        self.held = keys.direction();
        match self.held {
            HorizontalDirection::None => {
                self.repeat_timer = 0;
                None
            }
            dir => {
                self.repeat_timer = self.repeat_timer.saturating_add(1);
                Some(dir.dx())
            }
        }
    }

    pub fn reset(&mut self) {
        self.held = HorizontalDirection::None;
        self.repeat_timer = 0;
    }
}

impl Default for DasController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEFT: HeldKeys = HeldKeys {
        left: true,
        right: false,
    };
    const RIGHT: HeldKeys = HeldKeys {
        left: false,
        right: true,
    };
    const BOTH: HeldKeys = HeldKeys {
        left: true,
        right: true,
    };

    #[test]
    fn test_moves_every_tick_while_held() {
        let mut das = DasController::new();
        // Well past the delay, and before it: a move on every tick.
        for tick in 1..=40 {
            assert_eq!(das.update(RIGHT), Some(1), "tick {}", tick);
            assert_eq!(das.repeat_timer(), tick);
        }
    }

    #[test]
    fn test_release_resets_timer() {
        let mut das = DasController::new();
        das.update(LEFT);
        das.update(LEFT);
        assert_eq!(das.repeat_timer(), 2);

        assert_eq!(das.update(HeldKeys::NONE), None);
        assert_eq!(das.repeat_timer(), 0);
        assert_eq!(das.held(), HorizontalDirection::None);
    }

    #[test]
    fn test_both_keys_prefers_left() {
        let mut das = DasController::new();
        assert_eq!(das.update(BOTH), Some(-1));
        assert_eq!(das.held(), HorizontalDirection::Left);
    }

    #[test]
    fn test_switching_direction_keeps_counting() {
        let mut das = DasController::new();
        das.update(LEFT);
        assert_eq!(das.update(RIGHT), Some(1));
        assert_eq!(das.repeat_timer(), 2);
    }

    #[test]
    fn test_config_is_carried() {
        let das = DasController::with_config(10, 3);
        assert_eq!(das.das_delay(), 10);
        assert_eq!(das.das_speed(), 3);
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut das = DasController::new();
        das.update(LEFT);
        das.reset();
        assert_eq!(das.held(), HorizontalDirection::None);
        assert_eq!(das.repeat_timer(), 0);
    }
}
