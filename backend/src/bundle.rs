//! Secret bundles
//!
//! Derives every secret kind from one name and one passphrase choice, the
//! way an interactive caller does: trim the name, resolve the passphrase
//! (none, user supplied, or generated from the name), check each requested
//! length against the configured range, then run every generator.
//!
//! # Example
//!
//! ```
//! use seedsecret_core_rs::bundle::{generate_bundle, BundleRequest, PassphraseMode};
//! use seedsecret_core_rs::{GeneratorConfig, PasswordStrength};
//!
//! let request = BundleRequest::new("alice").with_passphrase(PassphraseMode::Generate);
//! let bundle = generate_bundle(&GeneratorConfig::default(), &request).unwrap();
//!
//! assert_eq!(bundle.passphrase.as_deref(), Some("5ufa@o"));
//! assert_eq!(bundle.password.len(), 12);
//! assert_eq!(bundle.password_strength, PasswordStrength::Strong);
//! ```

use crate::config::GeneratorConfig;
use crate::generators::{self, generate_passphrase_with, GenerationError};
use crate::seed::{trim_whitespace, SecretKind};
use crate::validate::{
    validate_number_properties, validate_password_strength, NumberProperties, PasswordStrength,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors raised at the bundle boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BundleError {
    #[error("Name is required")]
    EmptyName,

    #[error("Requested {kind} length {length} outside allowed range [{min}, {max}]")]
    LengthOutOfRange {
        kind: SecretKind,
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

/// How the passphrase fed to the generators is obtained
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PassphraseMode {
    /// Empty passphrase
    #[default]
    None,
    /// User-supplied text, used verbatim
    Custom { text: String },
    /// Generated from the trimmed name at the configured passphrase length
    Generate,
}

impl PassphraseMode {
    /// Short name of the mode, safe to log
    pub fn label(&self) -> &'static str {
        match self {
            PassphraseMode::None => "none",
            PassphraseMode::Custom { .. } => "custom",
            PassphraseMode::Generate => "generate",
        }
    }
}

/// Inputs for one bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRequest {
    pub name: String,

    #[serde(default)]
    pub passphrase: PassphraseMode,

    /// Length overrides; kinds not listed use the configured default
    #[serde(default)]
    pub lengths: HashMap<SecretKind, usize>,
}

impl BundleRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passphrase: PassphraseMode::None,
            lengths: HashMap::new(),
        }
    }

    pub fn with_passphrase(mut self, mode: PassphraseMode) -> Self {
        self.passphrase = mode;
        self
    }

    pub fn with_length(mut self, kind: SecretKind, length: usize) -> Self {
        self.lengths.insert(kind, length);
        self
    }
}

/// Every secret derived for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretBundle {
    /// Present only when the passphrase was generated
    pub passphrase: Option<String>,
    pub password: String,
    pub password_strength: PasswordStrength,
    pub number: String,
    pub number_properties: NumberProperties,
    pub uppercase: String,
    pub lowercase: String,
    pub pin: String,
    pub hex: String,
}

/// Resolve the length for `kind`: the override if given, else the default,
/// and reject it if it falls outside the configured range.
pub fn resolve_length(
    config: &GeneratorConfig,
    request: &BundleRequest,
    kind: SecretKind,
) -> Result<usize, BundleError> {
    let range = config.range(kind);
    let length = request.lengths.get(&kind).copied().unwrap_or(range.default);

    if !range.contains(length) {
        return Err(BundleError::LengthOutOfRange {
            kind,
            length,
            min: range.min,
            max: range.max,
        });
    }

    Ok(length)
}

/// Generate every secret kind for `request`.
///
/// # Errors
///
/// - [`BundleError::EmptyName`] when the name is blank after trimming
/// - [`BundleError::LengthOutOfRange`] when any resolved length violates its range
pub fn generate_bundle(
    config: &GeneratorConfig,
    request: &BundleRequest,
) -> Result<SecretBundle, BundleError> {
    let name = trim_whitespace(&request.name);
    if name.is_empty() {
        return Err(BundleError::EmptyName);
    }

    // Resolve all lengths up front so a bad override fails before any work.
    let mut lengths = HashMap::with_capacity(SecretKind::ALL.len());
    for kind in SecretKind::ALL {
        lengths.insert(kind, resolve_length(config, request, kind)?);
    }
    let length = |kind: SecretKind| lengths.get(&kind).copied().unwrap_or(0);

    let generated = match &request.passphrase {
        PassphraseMode::Generate => Some(generate_passphrase_with(
            name,
            length(SecretKind::Passphrase),
            config.capitalization,
        )?),
        _ => None,
    };
    let passphrase = match (&request.passphrase, &generated) {
        (PassphraseMode::Custom { text }, _) => text.as_str(),
        (_, Some(text)) => text.as_str(),
        _ => "",
    };

    debug!(mode = request.passphrase.label(), "generating bundle");

    let generate = |kind: SecretKind| generators::generate(kind, name, passphrase, length(kind));

    let password = generate(SecretKind::Password)?;
    let number = generate(SecretKind::Number)?;
    let uppercase = generate(SecretKind::Uppercase)?;
    let lowercase = generate(SecretKind::Lowercase)?;
    let pin = generate(SecretKind::Pin)?;
    let hex = generate(SecretKind::Hex)?;

    Ok(SecretBundle {
        passphrase: generated,
        password_strength: validate_password_strength(&password),
        password,
        number_properties: validate_number_properties(&number),
        number,
        uppercase,
        lowercase,
        pin,
        hex,
    })
}
