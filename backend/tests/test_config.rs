//! Tests for generator configuration loading and validation

use seedsecret_core_rs::{CapitalizationSource, ConfigError, GeneratorConfig, SecretKind};
use std::io::Write;

#[test]
fn test_defaults_follow_slider_ranges() {
    let config = GeneratorConfig::default();

    let password = config.range(SecretKind::Password);
    assert_eq!((password.min, password.max, password.default), (8, 50, 12));

    let number = config.range(SecretKind::Number);
    assert_eq!((number.min, number.max, number.default), (4, 20, 6));

    let upper = config.range(SecretKind::Uppercase);
    assert_eq!((upper.min, upper.max, upper.default), (4, 30, 10));

    let passphrase = config.range(SecretKind::Passphrase);
    assert_eq!((passphrase.min, passphrase.max, passphrase.default), (4, 20, 6));

    assert_eq!(config.capitalization, CapitalizationSource::Seeded);
}

#[test]
fn test_empty_json_is_default() {
    let config = GeneratorConfig::from_json_str("{}").unwrap();
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn test_partial_json_overrides_one_kind() {
    let config = GeneratorConfig::from_json_str(
        r#"{ "hex": { "min": 8, "max": 128, "default": 32 }, "capitalization": "ambient" }"#,
    )
    .unwrap();

    assert_eq!(config.range(SecretKind::Hex).default, 32);
    assert_eq!(config.range(SecretKind::Pin).default, 4);
    assert_eq!(config.capitalization, CapitalizationSource::Ambient);
}

#[test]
fn test_unknown_field_rejected() {
    let err = GeneratorConfig::from_json_str(r#"{ "emoji": {} }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_inverted_range_rejected() {
    let err = GeneratorConfig::from_json_str(r#"{ "pin": { "min": 9, "max": 4, "default": 6 } }"#)
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvertedRange {
            kind: SecretKind::Pin,
            min: 9,
            max: 4
        }
    ));
}

#[test]
fn test_default_out_of_range_rejected() {
    let err =
        GeneratorConfig::from_json_str(r#"{ "number": { "min": 4, "max": 8, "default": 12 } }"#)
            .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Default number length 12 outside range [4, 8]"
    );
}

#[test]
fn test_zero_minimum_rejected() {
    let err = GeneratorConfig::from_json_str(r#"{ "hex": { "min": 0, "max": 8, "default": 4 } }"#)
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::BelowGeneratorMinimum {
            kind: SecretKind::Hex,
            ..
        }
    ));
}

#[test]
fn test_from_path_reads_file() {
    let path = std::env::temp_dir().join(format!("seedsecret-config-{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "lowercase": {{ "min": 4, "max": 30, "default": 20 }} }}"#).unwrap();
    }

    let config = GeneratorConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.range(SecretKind::Lowercase).default, 20);
}

#[test]
fn test_from_path_missing_file() {
    let err = GeneratorConfig::from_path(std::path::Path::new("/nonexistent/seedsecret.json"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_config_serializes_round_trip() {
    let config = GeneratorConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GeneratorConfig::from_json_str(&json).unwrap(), config);
}
