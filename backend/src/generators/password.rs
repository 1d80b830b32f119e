//! Standard password generator
//!
//! One character from each class (upper, lower, digit, special) in that
//! order, the remaining positions from the union pool, then a Fisher–Yates
//! shuffle driven by the same stream. Shuffling only permutes, so every
//! class survives it.

use super::{seeded_stream, GenerationError};
use crate::charset::{DIGITS, LOWERCASE, PASSWORD_POOL, SPECIALS, UPPERCASE};
use crate::rng::Lcg;
use crate::seed::{seed_text, SecretKind};

/// Generate a password containing at least one character of every class.
///
/// # Errors
///
/// [`GenerationError::LengthTooSmall`] when `length < 4`: the four mandatory
/// characters would not fit.
///
/// # Example
/// ```
/// use seedsecret_core_rs::generators::generate_password;
///
/// assert_eq!(generate_password("alice", "", 4).unwrap(), "q!P6");
/// assert!(generate_password("alice", "", 3).is_err());
/// ```
pub fn generate_password(
    name: &str,
    passphrase: &str,
    length: usize,
) -> Result<String, GenerationError> {
    let mut rng = seeded_stream(SecretKind::Password, &seed_text(name, passphrase), length)?;

    let mut chars = Vec::with_capacity(length);
    for pool in [UPPERCASE, LOWERCASE, DIGITS, SPECIALS] {
        chars.push(rng.pick(pool));
    }
    while chars.len() < length {
        chars.push(rng.pick(PASSWORD_POOL));
    }

    shuffle(&mut chars, &mut rng);

    Ok(chars.into_iter().collect())
}

/// Fisher–Yates, walking from the last index down to 1.
fn shuffle(chars: &mut [char], rng: &mut Lcg) {
    for i in (1..chars.len()).rev() {
        let j = rng.below(i + 1);
        chars.swap(i, j);
    }
}
