//! Gravity module - wall-clock fall cadence
//!
//! Gravity is measured against a monotonic timestamp rather than frame counts, so
//! frame-rate variance does not change fall speed.

use std::time::Duration;

use crate::types::DEFAULT_FALL_SPEED;

/// Outcome of one gravity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityStep {
    /// Interval not yet elapsed.
    #[default]
    Waiting,
    /// Interval elapsed and the piece moved down one row.
    Fell,
    /// Interval elapsed, the piece could not move down and was locked.
    Locked,
}

/// Fixed-interval fall trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct GravityTimer {
    interval: Duration,
    last_fall: Duration,
}

impl GravityTimer {
    /// Create a timer for `fall_speed` cells per second.
    ///
    /// Non-finite or non-positive speeds fall back to the default speed.
    pub fn new(fall_speed: f32) -> Self {
        Self::with_interval(fall_interval(fall_speed))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_fall: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_fall(&self) -> Duration {
        self.last_fall
    }

    /// Restart the interval from `now`.
    pub fn reset(&mut self, now: Duration) {
        self.last_fall = now;
    }

    /// Check whether a fall step is due at `now`.
    ///
    /// When due, the timer restarts from `now` whatever the caller does with the
    /// step. A clock reading earlier than the last fall counts as no time elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        let elapsed = now.saturating_sub(self.last_fall);
        if elapsed < self.interval {
            return false;
        }
        self.last_fall = now;
        true
    }
}

impl Default for GravityTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FALL_SPEED)
    }
}

/// Seconds per row for a speed in cells per second.
pub fn fall_interval(fall_speed: f32) -> Duration {
    let speed = if fall_speed.is_finite() && fall_speed > 0.0 {
        fall_speed
    } else {
        DEFAULT_FALL_SPEED
    };
    Duration::from_secs_f64(1.0 / speed as f64)
}
