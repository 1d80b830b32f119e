//! Character pools drawn from by the generators
//!
//! Pools are ASCII byte strings; order matters because a draw is an index.

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const NONZERO_DIGITS: &[u8] = b"123456789";
pub const SPECIALS: &[u8] = b"@$!&";
pub const HEX_DIGITS: &[u8] = b"0123456789ABCDEF";

/// Lowercase letters minus the five vowels.
pub const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";
pub const VOWELS: &[u8] = b"aeiou";

/// Union pool for password fill positions: upper, lower, digits, specials.
pub const PASSWORD_POOL: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@$!&";

/// True for one of the four special characters.
pub fn is_special(c: char) -> bool {
    c.is_ascii() && SPECIALS.contains(&(c as u8))
}
