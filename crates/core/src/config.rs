//! Game configuration with environment overrides.
//!
//! - `BLOCKFALL_FALL_SPEED`: gravity in cells per second (default 1.0)
//! - `BLOCKFALL_DAS_DELAY`: auto-shift delay in ticks (default 16)
//! - `BLOCKFALL_DAS_SPEED`: auto-shift repeat in ticks (default 6)
//! - `BLOCKFALL_SEED`: piece RNG seed (default derived from the system time)
//!
//! Values that fail to parse, or non-positive fall speeds, keep the default.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_DAS_DELAY, DEFAULT_DAS_SPEED, DEFAULT_FALL_SPEED};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub fall_speed: f32,
    pub das_delay: u32,
    pub das_speed: u32,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fall_speed: DEFAULT_FALL_SPEED,
            das_delay: DEFAULT_DAS_DELAY,
            das_speed: DEFAULT_DAS_SPEED,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Defaults with a fixed seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Missing seeds are taken from the clock.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str| lookup(key).map(|s| s.trim().to_string());

        let fall_speed = parse("BLOCKFALL_FALL_SPEED")
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(DEFAULT_FALL_SPEED);

        let das_delay = parse("BLOCKFALL_DAS_DELAY")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_DAS_DELAY);

        let das_speed = parse("BLOCKFALL_DAS_SPEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_DAS_SPEED);

        let seed = parse("BLOCKFALL_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(time_seed);

        Self {
            fall_speed,
            das_delay,
            das_speed,
            seed,
        }
    }
}

/// Seed from the low bits of the current time.
pub fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.fall_speed, 1.0);
        assert_eq!(cfg.das_delay, 16);
        assert_eq!(cfg.das_speed, 6);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("BLOCKFALL_FALL_SPEED", "2.5"),
            ("BLOCKFALL_DAS_DELAY", " 10 "),
            ("BLOCKFALL_DAS_SPEED", "3"),
            ("BLOCKFALL_SEED", "42"),
        ]));
        assert_eq!(
            cfg,
            GameConfig {
                fall_speed: 2.5,
                das_delay: 10,
                das_speed: 3,
                seed: 42,
            }
        );
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("BLOCKFALL_FALL_SPEED", "-1"),
            ("BLOCKFALL_DAS_DELAY", "soon"),
            ("BLOCKFALL_SEED", "7"),
        ]));
        assert_eq!(cfg, GameConfig::with_seed(7));
    }

    #[test]
    fn test_zero_fall_speed_is_rejected() {
        let cfg = GameConfig::from_lookup(lookup(&[("BLOCKFALL_FALL_SPEED", "0")]));
        assert_eq!(cfg.fall_speed, DEFAULT_FALL_SPEED);
    }
}
