//! Seedsecret Core - Rust Engine
//!
//! Deterministic derivation of passwords, PINs, passphrases, hex strings and
//! numbers from low-entropy human input.
//!
//! # Architecture
//!
//! - **seed**: Text → 32-bit seed, salted per secret kind
//! - **rng**: Deterministic LCG stream
//! - **charset**: Character pools
//! - **generators**: One pure function per secret kind
//! - **validate**: Password strength and number property analysis
//! - **config**: Per-kind length ranges for callers
//! - **bundle**: All kinds from one name and passphrase choice
//!
//! # Critical Invariants
//!
//! 1. Same `(name, passphrase, length, kind)` → byte-identical output, forever
//! 2. Every kind seeds from its own salt, so kinds never share a stream
//! 3. Output length equals the requested length
//!
//! Not a cryptographically secure generator: anyone who knows or guesses the
//! inputs can recompute the outputs.

// Module declarations
pub mod bundle;
pub mod charset;
pub mod config;
pub mod generators;
pub mod rng;
pub mod seed;
pub mod validate;

// Re-exports for convenience
pub use bundle::{generate_bundle, BundleError, BundleRequest, PassphraseMode, SecretBundle};
pub use config::{ConfigError, GeneratorConfig, LengthRange};
pub use generators::{
    generate, generate_hex, generate_letters_only_password, generate_lowercase_only_password,
    generate_number, generate_passphrase, generate_passphrase_with, generate_password,
    generate_pin, CapitalizationSource, GenerationError,
};
pub use rng::Lcg;
pub use seed::{derive_seed, seed_text, SecretKind};
pub use validate::{
    validate_number_properties, validate_password_strength, NumberProperties, PasswordStrength,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn seedsecret(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)
}
