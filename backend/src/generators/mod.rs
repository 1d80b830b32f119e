//! Secret generators
//!
//! Every generator is a pure function of its inputs: it normalizes the seed
//! text, derives a seed salted for its own [`SecretKind`], and drives a fresh
//! [`Lcg`] stream through a kind-specific selection loop.
//!
//! # Key Principles
//!
//! 1. **Determinism**: same `(name, passphrase, length, kind)` → same output
//! 2. **Disjoint streams**: each kind seeds from its own salt
//! 3. **Exact length**: output length always equals the requested length
//!
//! # Example
//!
//! ```
//! use seedsecret_core_rs::generators::{generate, generate_password};
//! use seedsecret_core_rs::SecretKind;
//!
//! let password = generate_password("alice", "", 12).unwrap();
//! assert_eq!(password, "Rl6gr3c&fxZw");
//!
//! let same = generate(SecretKind::Password, "alice", "", 12).unwrap();
//! assert_eq!(password, same);
//! ```

mod letters;
mod numeric;
mod passphrase;
mod password;

pub use letters::{generate_letters_only_password, generate_lowercase_only_password};
pub use numeric::{generate_hex, generate_number, generate_pin};
pub use passphrase::{generate_passphrase, generate_passphrase_with, CapitalizationSource};
pub use password::generate_password;

use crate::rng::Lcg;
use crate::seed::{seed_text, SecretKind};
use thiserror::Error;
use tracing::debug;

/// Errors a generator can report before drawing anything
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Requested {kind} length must be at least 1")]
    ZeroLength { kind: SecretKind },

    #[error("Length too small for {kind}: required at least {min}, got {actual}")]
    LengthTooSmall {
        kind: SecretKind,
        min: usize,
        actual: usize,
    },
}

/// Generate a secret of any kind.
///
/// `passphrase` is ignored for [`SecretKind::Passphrase`], which seeds from
/// the name alone.
pub fn generate(
    kind: SecretKind,
    name: &str,
    passphrase: &str,
    length: usize,
) -> Result<String, GenerationError> {
    match kind {
        SecretKind::Password => generate_password(name, passphrase, length),
        SecretKind::Uppercase => generate_letters_only_password(name, passphrase, length),
        SecretKind::Lowercase => generate_lowercase_only_password(name, passphrase, length),
        SecretKind::Number => generate_number(name, passphrase, length),
        SecretKind::Pin => generate_pin(name, passphrase, length),
        SecretKind::Hex => generate_hex(name, passphrase, length),
        SecretKind::Passphrase => generate_passphrase(name, length),
    }
}

/// Validate `length` for `kind`
fn check_length(kind: SecretKind, length: usize) -> Result<(), GenerationError> {
    if length == 0 {
        return Err(GenerationError::ZeroLength { kind });
    }

    let min = kind.min_length();
    if length < min {
        return Err(GenerationError::LengthTooSmall {
            kind,
            min,
            actual: length,
        });
    }

    Ok(())
}

/// Validate the length and start the stream for `kind` from raw seed text.
fn seeded_stream(kind: SecretKind, text: &str, length: usize) -> Result<Lcg, GenerationError> {
    check_length(kind, length)?;
    debug!(%kind, length, "generating secret");
    Ok(Lcg::new(kind.seed(text, length)))
}

/// Draw `length` characters independently from one pool.
fn fill_from_pool(
    kind: SecretKind,
    pool: &[u8],
    name: &str,
    passphrase: &str,
    length: usize,
) -> Result<String, GenerationError> {
    let mut rng = seeded_stream(kind, &seed_text(name, passphrase), length)?;
    Ok((0..length).map(|_| rng.pick(pool)).collect())
}
