//! Analysis of generated secrets
//!
//! Pure functions that score a password and describe a digit string. They
//! never fail: any text is a valid input.

mod number;
mod strength;

pub use number::{validate_number_properties, NumberProperties, SEQUENTIAL_RUNS};
pub use strength::{password_score, validate_password_strength, PasswordStrength};
