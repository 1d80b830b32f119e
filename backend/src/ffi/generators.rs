//! PyO3 wrappers for the generators and validators
//!
//! # Example (from Python)
//!
//! ```python
//! import seedsecret
//!
//! seedsecret.generate_password("alice", length=12)   # 'Rl6gr3c&fxZw'
//! seedsecret.validate_password_strength("Abcdef1!")  # 'Strong'
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{generation_error_to_py, number_properties_to_py};
use crate::generators;
use crate::validate;

#[pyfunction]
#[pyo3(name = "generate_password", signature = (name, passphrase = "", length = 12))]
pub fn py_generate_password(name: &str, passphrase: &str, length: usize) -> PyResult<String> {
    generators::generate_password(name, passphrase, length).map_err(generation_error_to_py)
}

#[pyfunction]
#[pyo3(name = "generate_letters_only_password", signature = (name, passphrase = "", length = 10))]
pub fn py_generate_letters_only_password(
    name: &str,
    passphrase: &str,
    length: usize,
) -> PyResult<String> {
    generators::generate_letters_only_password(name, passphrase, length)
        .map_err(generation_error_to_py)
}

#[pyfunction]
#[pyo3(name = "generate_lowercase_only_password", signature = (name, passphrase = "", length = 10))]
pub fn py_generate_lowercase_only_password(
    name: &str,
    passphrase: &str,
    length: usize,
) -> PyResult<String> {
    generators::generate_lowercase_only_password(name, passphrase, length)
        .map_err(generation_error_to_py)
}

#[pyfunction]
#[pyo3(name = "generate_number", signature = (name, passphrase = "", length = 6))]
pub fn py_generate_number(name: &str, passphrase: &str, length: usize) -> PyResult<String> {
    generators::generate_number(name, passphrase, length).map_err(generation_error_to_py)
}

#[pyfunction]
#[pyo3(name = "generate_pin", signature = (name, passphrase = "", length = 4))]
pub fn py_generate_pin(name: &str, passphrase: &str, length: usize) -> PyResult<String> {
    generators::generate_pin(name, passphrase, length).map_err(generation_error_to_py)
}

#[pyfunction]
#[pyo3(name = "generate_hex", signature = (name, passphrase = "", length = 16))]
pub fn py_generate_hex(name: &str, passphrase: &str, length: usize) -> PyResult<String> {
    generators::generate_hex(name, passphrase, length).map_err(generation_error_to_py)
}

/// Always uses the seeded capitalization source.
#[pyfunction]
#[pyo3(name = "generate_passphrase", signature = (name, length = 6))]
pub fn py_generate_passphrase(name: &str, length: usize) -> PyResult<String> {
    generators::generate_passphrase(name, length).map_err(generation_error_to_py)
}

/// Returns `'Strong'`, `'Medium'` or `'Weak'`.
#[pyfunction]
#[pyo3(name = "validate_password_strength")]
pub fn py_validate_password_strength(password: &str) -> String {
    validate::validate_password_strength(password).to_string()
}

#[pyfunction]
#[pyo3(name = "validate_number_properties")]
pub fn py_validate_number_properties(py: Python, number: &str) -> PyResult<Py<PyDict>> {
    number_properties_to_py(py, &validate::validate_number_properties(number))
}
