//! RNG module - seedable random source for piece selection
//!
//! Pieces are drawn independently and uniformly (no bag), so the only
//! requirement is a reproducible stream for tests and replays.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Resume a stream from a value returned by [`SimpleRng::state`].
    ///
    /// Unlike [`SimpleRng::new`], zero is kept as-is: it is a regular point on the
    /// generator's cycle.
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state. Pass it to [`SimpleRng::from_state`] to resume the
    /// same stream.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_state_resumes_stream() {
        let mut rng = SimpleRng::new(5);
        rng.next_u32();
        let mut resumed = SimpleRng::from_state(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }

    #[test]
    fn test_zero_state_resumes_exactly() {
        // 0 is reached on the full cycle; resuming there must not remap it.
        let mut rng = SimpleRng::from_state(0);
        assert_eq!(rng.next_u32(), 1013904223);

        let mut seeded = SimpleRng::new(0);
        assert_ne!(seeded.state(), 0);
        assert_ne!(seeded.next_u32(), 1013904223);
    }
}
