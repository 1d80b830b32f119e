//! Tests for secret bundles
//!
//! Expected values come from running each legacy generator with the same
//! name, passphrase and default lengths.

use seedsecret_core_rs::bundle::resolve_length;
use seedsecret_core_rs::{
    generate_bundle, BundleError, BundleRequest, CapitalizationSource, GeneratorConfig,
    PassphraseMode, PasswordStrength, SecretKind,
};

#[test]
fn test_bundle_without_passphrase() {
    let bundle =
        generate_bundle(&GeneratorConfig::default(), &BundleRequest::new("alice")).unwrap();

    assert_eq!(bundle.passphrase, None);
    assert_eq!(bundle.password, "Rl6gr3c&fxZw");
    assert_eq!(bundle.password_strength, PasswordStrength::Strong);
    assert_eq!(bundle.number, "723737");
    assert_eq!(bundle.uppercase, "EBKTLZPPYR");
    assert_eq!(bundle.lowercase, "bcmxccydce");
    assert_eq!(bundle.pin, "6237");
    assert_eq!(bundle.hex, "DD2AAB5AAF416E8D");
    assert!(!bundle.number_properties.is_sequential);
}

#[test]
fn test_bundle_with_custom_passphrase() {
    let request = BundleRequest::new("alice").with_passphrase(PassphraseMode::Custom {
        text: "hunter2".to_string(),
    });
    let bundle = generate_bundle(&GeneratorConfig::default(), &request).unwrap();

    assert_eq!(bundle.passphrase, None);
    assert_eq!(bundle.password, "9Y6x3Vf@3XSR");
    assert_eq!(bundle.number, "793033");
    assert_eq!(bundle.uppercase, "FCGCHDIKJX");
    assert_eq!(bundle.lowercase, "jbeyqazwfl");
    assert_eq!(bundle.pin, "7930");
    assert_eq!(bundle.hex, "85731685A99AD810");
}

#[test]
fn test_bundle_with_generated_passphrase() {
    let request = BundleRequest::new("  alice ").with_passphrase(PassphraseMode::Generate);
    let bundle = generate_bundle(&GeneratorConfig::default(), &request).unwrap();

    assert_eq!(bundle.passphrase.as_deref(), Some("5ufa@o"));
    assert_eq!(bundle.password, "YBhC&$WA3KP7");
    assert_eq!(bundle.number, "123829");
    assert!(bundle.number_properties.is_sequential);
    assert_eq!(bundle.uppercase, "QMHYFREMMA");
    assert_eq!(bundle.lowercase, "tlftnovzin");
    assert_eq!(bundle.pin, "1238");
    assert_eq!(bundle.hex, "FB80FE66CB6CBE64");
}

#[test]
fn test_ambient_capitals_still_feed_generated_passphrase() {
    let mut config = GeneratorConfig::default();
    config.capitalization = CapitalizationSource::Ambient;

    let request = BundleRequest::new("alice").with_passphrase(PassphraseMode::Generate);
    let bundle = generate_bundle(&config, &request).unwrap();

    let passphrase = bundle.passphrase.unwrap();
    assert_eq!(passphrase.to_lowercase(), "6ur$de");
    assert_eq!(
        bundle.password,
        seedsecret_core_rs::generate_password("alice", &passphrase, 12).unwrap()
    );
}

#[test]
fn test_empty_name_rejected() {
    let err = generate_bundle(&GeneratorConfig::default(), &BundleRequest::new("")).unwrap_err();
    assert_eq!(err, BundleError::EmptyName);
    assert_eq!(err.to_string(), "Name is required");
}

#[test]
fn test_byte_order_mark_only_name_rejected() {
    let request = BundleRequest::new("\u{feff}\u{3000}");
    assert_eq!(
        generate_bundle(&GeneratorConfig::default(), &request),
        Err(BundleError::EmptyName)
    );
}

#[test]
fn test_generated_passphrase_seeds_from_trimmed_name() {
    let request = BundleRequest::new("\u{feff}alice").with_passphrase(PassphraseMode::Generate);
    let bundle = generate_bundle(&GeneratorConfig::default(), &request).unwrap();

    assert_eq!(bundle.passphrase.as_deref(), Some("5ufa@o"));
}

#[test]
fn test_length_overrides_apply() {
    let request = BundleRequest::new("alice")
        .with_length(SecretKind::Password, 20)
        .with_length(SecretKind::Hex, 64);
    let bundle = generate_bundle(&GeneratorConfig::default(), &request).unwrap();

    assert_eq!(bundle.password.len(), 20);
    assert_eq!(bundle.hex.len(), 64);
    assert_eq!(bundle.pin.len(), 4);
}

#[test]
fn test_out_of_range_override_rejected() {
    let request = BundleRequest::new("alice").with_length(SecretKind::Number, 21);
    let err = generate_bundle(&GeneratorConfig::default(), &request).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Requested number length 21 outside allowed range [4, 20]"
    );
}

#[test]
fn test_resolve_length_prefers_override() {
    let request = BundleRequest::new("alice").with_length(SecretKind::Pin, 8);
    assert_eq!(
        resolve_length(&GeneratorConfig::default(), &request, SecretKind::Pin),
        Ok(8)
    );
}

#[test]
fn test_request_from_json() {
    let request: BundleRequest = serde_json::from_str(
        r#"{ "name": "alice", "passphrase": { "mode": "generate" }, "lengths": { "pin": 6 } }"#,
    )
    .unwrap();

    assert_eq!(request.passphrase, PassphraseMode::Generate);
    assert_eq!(request.lengths.get(&SecretKind::Pin), Some(&6));
}

#[test]
fn test_bundle_serializes() {
    let bundle =
        generate_bundle(&GeneratorConfig::default(), &BundleRequest::new("alice")).unwrap();
    let json = serde_json::to_value(&bundle).unwrap();

    assert_eq!(json["password"], "Rl6gr3c&fxZw");
    assert_eq!(json["password_strength"], "Strong");
    assert!(json["passphrase"].is_null());
}
