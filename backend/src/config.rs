//! Generator configuration
//!
//! Length ranges the presentation layer enforces per secret kind, plus the
//! passphrase capitalization source. The generators themselves never read
//! this: they do not clamp. Only [`crate::bundle`] and the CLI check lengths
//! against it.
//!
//! # Example
//!
//! ```
//! use seedsecret_core_rs::{GeneratorConfig, SecretKind};
//!
//! let json = r#"{ "pin": { "min": 4, "max": 8, "default": 6 } }"#;
//! let config = GeneratorConfig::from_json_str(json).unwrap();
//! assert_eq!(config.range(SecretKind::Pin).default, 6);
//! assert_eq!(config.range(SecretKind::Password).default, 12);
//! ```

use crate::generators::CapitalizationSource;
use crate::seed::SecretKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a [`GeneratorConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {kind} range: min {min} exceeds max {max}")]
    InvertedRange {
        kind: SecretKind,
        min: usize,
        max: usize,
    },

    #[error("Default {kind} length {default} outside range [{min}, {max}]")]
    DefaultOutOfRange {
        kind: SecretKind,
        default: usize,
        min: usize,
        max: usize,
    },

    #[error("Minimum {kind} length {min} is below the generator minimum {required}")]
    BelowGeneratorMinimum {
        kind: SecretKind,
        min: usize,
        required: usize,
    },
}

/// Inclusive length bounds plus the length used when none is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl LengthRange {
    pub const fn new(min: usize, max: usize, default: usize) -> Self {
        Self { min, max, default }
    }

    /// Whether `length` lies within `[min, max]`
    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }
}

/// Per-kind length ranges and passphrase options
///
/// Missing fields fall back to [`GeneratorConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub password: LengthRange,
    pub uppercase: LengthRange,
    pub lowercase: LengthRange,
    pub number: LengthRange,
    pub pin: LengthRange,
    pub hex: LengthRange,
    pub passphrase: LengthRange,

    /// Source of the passphrase capitalization draw
    pub capitalization: CapitalizationSource,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            password: LengthRange::new(8, 50, 12),
            uppercase: LengthRange::new(4, 30, 10),
            lowercase: LengthRange::new(4, 30, 10),
            number: LengthRange::new(4, 20, 6),
            pin: LengthRange::new(4, 12, 4),
            hex: LengthRange::new(4, 64, 16),
            passphrase: LengthRange::new(4, 20, 6),
            capitalization: CapitalizationSource::Seeded,
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Length range for `kind`
    pub fn range(&self, kind: SecretKind) -> &LengthRange {
        match kind {
            SecretKind::Password => &self.password,
            SecretKind::Uppercase => &self.uppercase,
            SecretKind::Lowercase => &self.lowercase,
            SecretKind::Number => &self.number,
            SecretKind::Pin => &self.pin,
            SecretKind::Hex => &self.hex,
            SecretKind::Passphrase => &self.passphrase,
        }
    }

    /// Check every range is ordered, holds its default, and respects the
    /// generator's own minimum length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in SecretKind::ALL {
            let range = self.range(kind);

            if range.min > range.max {
                return Err(ConfigError::InvertedRange {
                    kind,
                    min: range.min,
                    max: range.max,
                });
            }

            if range.min < kind.min_length() {
                return Err(ConfigError::BelowGeneratorMinimum {
                    kind,
                    min: range.min,
                    required: kind.min_length(),
                });
            }

            if !range.contains(range.default) {
                return Err(ConfigError::DefaultOutOfRange {
                    kind,
                    default: range.default,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        Ok(())
    }
}
