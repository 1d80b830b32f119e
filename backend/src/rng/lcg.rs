//! 32-bit linear congruential generator
//!
//! `state = (state * 1664525 + 1013904223) mod 2^32`, each draw reported as
//! `state / 2^32`. Full period over the 32-bit state space.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws. This is what makes a secret derived
//! from `(name, passphrase, length)` reproducible forever, so the arithmetic
//! here must never change.

use serde::{Deserialize, Serialize};

/// LCG multiplier (Numerical Recipes).
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// LCG increment (Numerical Recipes).
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// 2^32 as a float, the divisor that maps the state into [0, 1).
const STATE_SPACE: f64 = 4_294_967_296.0;

/// Deterministic random number generator holding its own 32-bit state
///
/// # Example
/// ```
/// use seedsecret_core_rs::Lcg;
///
/// let mut rng = Lcg::new(0);
/// assert_eq!(rng.next_u32(), 1_013_904_223);
///
/// let value = rng.next_f64();
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    /// Internal state (32-bit)
    state: u32,
}

impl Lcg {
    /// Create a new generator with the given seed
    ///
    /// Zero is a valid seed: the increment moves the state off zero on the
    /// first draw.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return it
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Advance the state and return it scaled into [0.0, 1.0)
    ///
    /// The division by 2^32 is exact, so this is bit-for-bit the value the
    /// legacy float implementation produced.
    ///
    /// # Example
    /// ```
    /// use seedsecret_core_rs::Lcg;
    ///
    /// let mut a = Lcg::new(42);
    /// let mut b = Lcg::new(42);
    /// assert_eq!(a.next_f64(), b.next_f64());
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / STATE_SPACE
    }

    /// Draw an index in `[0, bound)` as `floor(next_f64() * bound)`
    ///
    /// # Panics
    /// Panics if `bound` is zero
    ///
    /// # Example
    /// ```
    /// use seedsecret_core_rs::Lcg;
    ///
    /// let mut rng = Lcg::new(7);
    /// assert!(rng.below(10) < 10);
    /// ```
    pub fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");

        // Float product is exact for the pool sizes used (< 2^21), so the
        // truncation is a true floor.
        (self.next_f64() * bound as f64) as usize
    }

    /// Draw one element of a non-empty pool
    pub fn pick(&mut self, pool: &[u8]) -> char {
        char::from(pool[self.below(pool.len())])
    }

    /// Draw once and report whether it fell below `probability`
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Get current state (for replay)
    ///
    /// # Example
    /// ```
    /// use seedsecret_core_rs::Lcg;
    ///
    /// let mut rng = Lcg::new(12345);
    /// rng.next_u32();
    ///
    /// let mut replay = Lcg::new(rng.get_state());
    /// assert_eq!(rng.next_u32(), replay.next_u32());
    /// ```
    pub fn get_state(&self) -> u32 {
        self.state
    }
}

impl Iterator for Lcg {
    type Item = f64;

    /// The stream never ends; `next` always yields.
    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
