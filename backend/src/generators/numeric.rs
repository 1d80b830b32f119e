//! Digit-string generators: numbers, PINs and hex strings
//!
//! Outputs are strings, never parsed into integers, so any length works.

use super::{fill_from_pool, seeded_stream, GenerationError};
use crate::charset::{DIGITS, HEX_DIGITS, NONZERO_DIGITS};
use crate::seed::{seed_text, SecretKind};

/// Generate a decimal number string.
///
/// The first digit is drawn from 1–9 when `length > 1`, so multi-digit
/// numbers never start with zero.
///
/// # Example
/// ```
/// use seedsecret_core_rs::generators::generate_number;
///
/// assert_eq!(generate_number("alice", "", 6).unwrap(), "723737");
/// ```
pub fn generate_number(
    name: &str,
    passphrase: &str,
    length: usize,
) -> Result<String, GenerationError> {
    let mut rng = seeded_stream(SecretKind::Number, &seed_text(name, passphrase), length)?;

    Ok((0..length)
        .map(|i| {
            if i == 0 && length > 1 {
                rng.pick(NONZERO_DIGITS)
            } else {
                rng.pick(DIGITS)
            }
        })
        .collect())
}

/// Generate a PIN.
///
/// From the third digit on, if the two previous digits are equal the next
/// digit is redrawn until it differs from the previous one. The loop always
/// terminates: nine of the ten digits are acceptable.
///
/// # Example
/// ```
/// use seedsecret_core_rs::generators::generate_pin;
///
/// assert_eq!(generate_pin("alice", "", 6).unwrap(), "045810");
/// ```
pub fn generate_pin(
    name: &str,
    passphrase: &str,
    length: usize,
) -> Result<String, GenerationError> {
    let mut rng = seeded_stream(SecretKind::Pin, &seed_text(name, passphrase), length)?;

    let mut digits: Vec<usize> = Vec::with_capacity(length);
    for i in 0..length {
        let digit = if i >= 2 && digits[i - 1] == digits[i - 2] {
            let previous = digits[i - 1];
            loop {
                let candidate = rng.below(DIGITS.len());
                if candidate != previous {
                    break candidate;
                }
            }
        } else {
            rng.below(DIGITS.len())
        };
        digits.push(digit);
    }

    Ok(digits.into_iter().map(|d| char::from(DIGITS[d])).collect())
}

/// Generate an uppercase hexadecimal string.
pub fn generate_hex(
    name: &str,
    passphrase: &str,
    length: usize,
) -> Result<String, GenerationError> {
    fill_from_pool(SecretKind::Hex, HEX_DIGITS, name, passphrase, length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_number() {
        assert_eq!(generate_number("alice", "", 1).unwrap(), "8");
    }

    #[test]
    fn test_pin_never_three_equal_in_a_row() {
        for name in ["alice", "bob", "carol", "dave", "eve", "mallory"] {
            let pin = generate_pin(name, "", 40).unwrap();
            let bytes = pin.as_bytes();
            for window in bytes.windows(3) {
                assert!(
                    !(window[0] == window[1] && window[1] == window[2]),
                    "triple repeat in {}",
                    pin
                );
            }
        }
    }

    #[test]
    fn test_hex_single_char() {
        assert_eq!(generate_hex("alice", "", 1).unwrap(), "9");
    }
}
