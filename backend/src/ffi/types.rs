//! Type conversion utilities for FFI boundary
//!
//! Converts Rust results into PyO3-compatible types.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::generators::GenerationError;
use crate::validate::NumberProperties;

/// Map a generation failure to `ValueError`, keeping the message.
pub fn generation_error_to_py(err: GenerationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Convert [`NumberProperties`] into a dict with the legacy camelCase keys.
pub fn number_properties_to_py(py: Python, props: &NumberProperties) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("length", props.length)?;
    dict.set_item("hasRepeatingDigits", props.has_repeating_digits)?;
    dict.set_item("isSequential", props.is_sequential)?;
    dict.set_item("entropy", props.entropy)?;

    Ok(dict.unbind())
}
