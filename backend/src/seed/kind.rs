//! Secret kinds and their seed salts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of secret the engine can derive.
///
/// Every kind owns a distinct salt. The salt is multiplied by the requested
/// length and added to the text hash, which places each kind in its own
/// region of seed space so identical inputs never share a random stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretKind {
    /// Mixed-class password with one character from every class
    Password,
    /// A–Z only
    Uppercase,
    /// a–z only
    Lowercase,
    /// Decimal digit string without a leading zero
    Number,
    /// Decimal digits avoiding long runs
    Pin,
    /// Uppercase hexadecimal digits
    Hex,
    /// Pronounceable consonant/vowel passphrase
    Passphrase,
}

impl SecretKind {
    /// All kinds, in presentation order.
    pub const ALL: [SecretKind; 7] = [
        SecretKind::Password,
        SecretKind::Uppercase,
        SecretKind::Lowercase,
        SecretKind::Number,
        SecretKind::Pin,
        SecretKind::Hex,
        SecretKind::Passphrase,
    ];

    /// Per-length salt added to the text hash when seeding this kind.
    pub const fn salt(self) -> u32 {
        match self {
            SecretKind::Passphrase => 500,
            SecretKind::Password => 1000,
            SecretKind::Number => 2000,
            SecretKind::Pin => 3000,
            SecretKind::Hex => 4000,
            SecretKind::Uppercase => 7000,
            SecretKind::Lowercase => 8000,
        }
    }

    /// Smallest length the generator for this kind accepts.
    pub const fn min_length(self) -> usize {
        match self {
            SecretKind::Password => 4,
            _ => 1,
        }
    }

    /// Stable lowercase name, as used in config files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            SecretKind::Password => "password",
            SecretKind::Uppercase => "uppercase",
            SecretKind::Lowercase => "lowercase",
            SecretKind::Number => "number",
            SecretKind::Pin => "pin",
            SecretKind::Hex => "hex",
            SecretKind::Passphrase => "passphrase",
        }
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown secret kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for SecretKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SecretKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
