//! Single-case letter generators
//!
//! No mandatory classes and no shuffle: `length` independent draws from one
//! 26-letter pool.

use super::{fill_from_pool, GenerationError};
use crate::charset::{LOWERCASE, UPPERCASE};
use crate::seed::SecretKind;

/// Generate a password of A–Z only.
pub fn generate_letters_only_password(
    name: &str,
    passphrase: &str,
    length: usize,
) -> Result<String, GenerationError> {
    fill_from_pool(SecretKind::Uppercase, UPPERCASE, name, passphrase, length)
}

/// Generate a password of a–z only.
pub fn generate_lowercase_only_password(
    name: &str,
    passphrase: &str,
    length: usize,
) -> Result<String, GenerationError> {
    fill_from_pool(SecretKind::Lowercase, LOWERCASE, name, passphrase, length)
}
