//! Digit-string properties

use serde::{Deserialize, Serialize};

/// Ascending three-digit runs, including the wrap from 8-9 to 0.
pub const SEQUENTIAL_RUNS: [&str; 9] = [
    "012", "123", "234", "345", "456", "567", "678", "789", "890",
];

/// Description of a number string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberProperties {
    /// Length in UTF-16 code units
    pub length: usize,

    /// Some code unit other than a line terminator appears three or more
    /// times in a row
    pub has_repeating_digits: bool,

    /// Contains one of [`SEQUENTIAL_RUNS`]
    pub is_sequential: bool,

    /// `log2(10^length)` bits; infinite once `10^length` overflows `f64`
    pub entropy: f64,
}

/// LF, CR, LINE SEPARATOR and PARAGRAPH SEPARATOR never count as repeats.
fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}

/// Describe a number string.
///
/// # Example
/// ```
/// use seedsecret_core_rs::validate::validate_number_properties;
///
/// let props = validate_number_properties("7777");
/// assert_eq!(props.length, 4);
/// assert!(props.has_repeating_digits);
/// assert!(!props.is_sequential);
/// ```
pub fn validate_number_properties(number: &str) -> NumberProperties {
    let units: Vec<u16> = number.encode_utf16().collect();
    let length = units.len();

    let has_repeating_digits = units
        .windows(3)
        .any(|w| !is_line_terminator(w[0]) && w[0] == w[1] && w[1] == w[2]);

    let is_sequential = SEQUENTIAL_RUNS.iter().any(|run| number.contains(run));

    let exponent = i32::try_from(length).unwrap_or(i32::MAX);
    let entropy = 10f64.powi(exponent).log2();

    NumberProperties {
        length,
        has_repeating_digits,
        is_sequential,
        entropy,
    }
}
