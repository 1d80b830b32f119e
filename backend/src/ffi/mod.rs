//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the generators and validators to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only the pure functions are exposed
//! 2. **Simple types**: Strings, ints and dicts at the boundary
//! 3. **Safe errors**: Rust errors become Python `ValueError`s

pub mod generators;
pub mod types;

use pyo3::prelude::*;

/// Add every exported function to the Python module.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generators::py_generate_password, m)?)?;
    m.add_function(wrap_pyfunction!(generators::py_generate_letters_only_password, m)?)?;
    m.add_function(wrap_pyfunction!(generators::py_generate_lowercase_only_password, m)?)?;
    m.add_function(wrap_pyfunction!(generators::py_generate_number, m)?)?;
    m.add_function(wrap_pyfunction!(generators::py_generate_pin, m)?)?;
    m.add_function(wrap_pyfunction!(generators::py_generate_hex, m)?)?;
    m.add_function(wrap_pyfunction!(generators::py_generate_passphrase, m)?)?;
    m.add_function(wrap_pyfunction!(generators::py_validate_password_strength, m)?)?;
    m.add_function(wrap_pyfunction!(generators::py_validate_number_properties, m)?)?;
    Ok(())
}
