//! Seed derivation
//!
//! Turns text plus a requested length into the 32-bit seed that starts an
//! [`Lcg`](crate::rng::Lcg) stream.
//!
//! # Algorithm
//!
//! ```text
//! acc = 0
//! for each UTF-16 code unit u:   acc = acc * 31 + u      (wrapping, signed 32-bit)
//! seed = |acc + salt * length|                            (taken mod 2^32)
//! ```
//!
//! The salt is per [`SecretKind`], so the same text never seeds two kinds
//! identically.

mod kind;

pub use kind::{SecretKind, UnknownKind};

/// Hash text into a signed 32-bit accumulator (`acc * 31 + unit`, wrapping).
///
/// # Example
/// ```
/// use seedsecret_core_rs::seed::hash_text;
///
/// assert_eq!(hash_text(""), 0);
/// assert_eq!(hash_text("alice"), 92_903_040);
/// ```
pub fn hash_text(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Derive a seed from text, a per-kind salt and the requested length.
///
/// The salted sum is computed in 64 bits and its absolute value is reduced
/// mod 2^32. The first LCG step reduces mod 2^32 anyway, so the stream is
/// the same one an unreduced seed would start.
///
/// # Example
/// ```
/// use seedsecret_core_rs::seed::derive_seed;
///
/// // Empty text: the seed is the salt times the length.
/// assert_eq!(derive_seed("", 3000, 3), 9000);
/// assert_eq!(derive_seed("alice", 1000, 12), 92_915_040);
/// ```
pub fn derive_seed(text: &str, salt: u32, length: usize) -> u32 {
    let length = i64::try_from(length).unwrap_or(i64::MAX);
    let salted = i64::from(hash_text(text)).wrapping_add(i64::from(salt).wrapping_mul(length));

    // Truncation is the mod 2^32 reduction.
    salted.unsigned_abs() as u32
}

/// Whitespace stripped by [`trim_whitespace`]: the ECMAScript `WhiteSpace`
/// and `LineTerminator` sets.
///
/// This differs from [`char::is_whitespace`] on two characters: U+FEFF (byte
/// order mark) is stripped and U+0085 (next line) is kept.
pub fn is_trimmed_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Trim leading and trailing [`is_trimmed_whitespace`] characters.
///
/// Every name and seed text goes through this, so a name pasted with a byte
/// order mark derives the same secrets as the bare name.
///
/// # Example
/// ```
/// use seedsecret_core_rs::seed::trim_whitespace;
///
/// assert_eq!(trim_whitespace("\u{feff} alice\t"), "alice");
/// assert_eq!(trim_whitespace("alice\u{85}"), "alice\u{85}");
/// ```
pub fn trim_whitespace(text: &str) -> &str {
    text.trim_matches(is_trimmed_whitespace)
}

/// Normalize `name + passphrase` into seed text: concatenate, lowercase, trim.
///
/// # Example
/// ```
/// use seedsecret_core_rs::seed::seed_text;
///
/// assert_eq!(seed_text("  Alice", "Secret "), "alicesecret");
/// ```
pub fn seed_text(name: &str, passphrase: &str) -> String {
    let mut combined = String::with_capacity(name.len() + passphrase.len());
    combined.push_str(name);
    combined.push_str(passphrase);
    trim_whitespace(&combined.to_lowercase()).to_string()
}

impl SecretKind {
    /// Seed for this kind from already-normalized seed text.
    pub fn seed(self, text: &str, length: usize) -> u32 {
        derive_seed(text, self.salt(), length)
    }
}
