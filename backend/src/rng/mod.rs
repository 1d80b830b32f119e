//! Deterministic random number generation
//!
//! Uses a 32-bit linear congruential generator with the Numerical Recipes
//! constants. CRITICAL: every seeded draw made by a generator MUST go
//! through this module so that outputs stay reproducible.

mod lcg;

pub use lcg::{Lcg, LCG_INCREMENT, LCG_MULTIPLIER};
