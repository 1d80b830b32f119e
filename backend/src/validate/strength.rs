//! Password strength scoring
//!
//! One point each for: an uppercase letter, a lowercase letter, a digit, one
//! of the four specials, and a length of at least 8 UTF-16 code units. Five
//! points is strong, three or four medium, anything less weak.

use crate::charset::is_special;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length that earns the length point.
const STRONG_LENGTH: usize = 8;

/// Strength label for a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Label for a score out of five.
    pub fn from_score(score: u8) -> Self {
        match score {
            5..=u8::MAX => PasswordStrength::Strong,
            3 | 4 => PasswordStrength::Medium,
            _ => PasswordStrength::Weak,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Count the satisfied criteria (0 to 5).
///
/// # Example
/// ```
/// use seedsecret_core_rs::validate::password_score;
///
/// assert_eq!(password_score("Abcdef1!"), 5);
/// assert_eq!(password_score("abc"), 1);
/// ```
pub fn password_score(password: &str) -> u8 {
    let criteria = [
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(is_special),
        password.encode_utf16().count() >= STRONG_LENGTH,
    ];

    criteria.iter().filter(|&&met| met).count() as u8
}

/// Label a password `Strong`, `Medium` or `Weak`.
pub fn validate_password_strength(password: &str) -> PasswordStrength {
    PasswordStrength::from_score(password_score(password))
}
