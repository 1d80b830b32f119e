//! Pronounceable passphrase generator
//!
//! Positions cycle through four slots (`index % 4`):
//!
//! ```text
//! 0: consonant, upper-cased with probability 0.3
//! 1: vowel
//! 2: digit (p = 0.3) or consonant
//! 3: special (p = 0.2) or vowel
//! ```
//!
//! Afterwards a complexity pass overwrites one position with a digit when
//! none was drawn (length > 3) and one with a special when none was drawn
//! (length > 2). Both checks look at the loop output, so the second overwrite
//! may land on the first.
//!
//! Unlike every other generator the seed comes from the name alone, as given:
//! no case folding and no trimming.

use super::{seeded_stream, GenerationError};
use crate::charset::{is_special, CONSONANTS, DIGITS, SPECIALS, VOWELS};
use crate::rng::Lcg;
use crate::seed::SecretKind;
use serde::{Deserialize, Serialize};
use tracing::warn;

const CAPITAL_PROBABILITY: f64 = 0.3;
const DIGIT_PROBABILITY: f64 = 0.3;
const SPECIAL_PROBABILITY: f64 = 0.2;

/// Where the consonant capitalization draw comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapitalizationSource {
    /// Draw from the seeded stream right after the consonant. Fully
    /// deterministic.
    #[default]
    Seeded,
    /// Draw from the thread-local OS-seeded generator. Consumes nothing from
    /// the seeded stream, so output matches the legacy generator up to letter
    /// case, and the case differs from call to call.
    Ambient,
}

impl CapitalizationSource {
    fn capitalize(self, rng: &mut Lcg) -> bool {
        match self {
            CapitalizationSource::Seeded => rng.chance(CAPITAL_PROBABILITY),
            CapitalizationSource::Ambient => rand::random::<f64>() < CAPITAL_PROBABILITY,
        }
    }
}

/// Generate a deterministic passphrase from `name`.
///
/// # Example
/// ```
/// use seedsecret_core_rs::generators::generate_passphrase;
///
/// assert_eq!(generate_passphrase("alice", 6).unwrap(), "5ufa@o");
/// ```
pub fn generate_passphrase(name: &str, length: usize) -> Result<String, GenerationError> {
    generate_passphrase_with(name, length, CapitalizationSource::Seeded)
}

/// Generate a passphrase with an explicit capitalization source.
pub fn generate_passphrase_with(
    name: &str,
    length: usize,
    capitals: CapitalizationSource,
) -> Result<String, GenerationError> {
    let mut rng = seeded_stream(SecretKind::Passphrase, name, length)?;
    if capitals == CapitalizationSource::Ambient {
        warn!("passphrase capitalization uses the ambient generator; output is not reproducible");
    }

    let mut chars: Vec<char> = Vec::with_capacity(length);
    for index in 0..length {
        let c = match index % 4 {
            0 => {
                let consonant = rng.pick(CONSONANTS);
                if capitals.capitalize(&mut rng) {
                    consonant.to_ascii_uppercase()
                } else {
                    consonant
                }
            }
            1 => rng.pick(VOWELS),
            2 => {
                if rng.chance(DIGIT_PROBABILITY) {
                    rng.pick(DIGITS)
                } else {
                    rng.pick(CONSONANTS)
                }
            }
            _ => {
                if rng.chance(SPECIAL_PROBABILITY) {
                    rng.pick(SPECIALS)
                } else {
                    rng.pick(VOWELS)
                }
            }
        };
        chars.push(c);
    }

    let has_digit = chars.iter().any(char::is_ascii_digit);
    let has_special = chars.iter().copied().any(is_special);

    if !has_digit && chars.len() > 3 {
        overwrite_one(&mut chars, &mut rng, DIGITS);
    }
    if !has_special && chars.len() > 2 {
        overwrite_one(&mut chars, &mut rng, SPECIALS);
    }

    Ok(chars.into_iter().collect())
}

/// Replace the character at a drawn position in `[0, len - 1)` with a draw
/// from `pool`. The last position is never chosen. Requires `len >= 2`.
fn overwrite_one(chars: &mut [char], rng: &mut Lcg, pool: &[u8]) {
    let position = rng.below(chars.len() - 1);
    chars[position] = rng.pick(pool);
}
