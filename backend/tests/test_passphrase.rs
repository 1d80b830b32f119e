//! Tests for the passphrase generator
//!
//! The seeded fixtures pin the deterministic capitalization. The legacy
//! fixtures are the legacy outputs lowercased: the ambient source must match
//! them up to case.

use seedsecret_core_rs::generators::{
    generate_passphrase, generate_passphrase_with, CapitalizationSource,
};

const SEEDED: &[(&str, usize, &str)] = &[
    ("alice", 6, "5ufa@o"),
    ("alice", 12, "KaqeW$0iqizu"),
    ("bob", 4, "x0l@"),
    ("bob", 3, "!if"),
    ("", 8, "Vo8ihez@"),
    ("Alice", 6, "Zu4@ka"),
    ("carol", 20, "guwageyeJe1@Yo8awor$"),
    ("dave", 1, "p"),
    ("x", 2, "so"),
];

const LEGACY_LOWERCASED: &[(&str, usize, &str)] = &[
    ("alice", 6, "6ur$de"),
    ("alice", 12, "ka6igu9ami&o"),
    ("bob", 4, "@uwa"),
    ("bob", 3, "$oj"),
    ("", 8, "1a&ineku"),
    ("Alice", 6, "ze1@ce"),
    ("carol", 20, "golibehujegafa9!gufu"),
    ("dave", 1, "p"),
    ("x", 2, "su"),
];

#[test]
fn test_seeded_fixtures() {
    for &(name, length, expected) in SEEDED {
        assert_eq!(
            generate_passphrase(name, length).unwrap(),
            expected,
            "passphrase for {:?}/{}",
            name,
            length
        );
    }
}

#[test]
fn test_ambient_matches_legacy_up_to_case() {
    for &(name, length, expected) in LEGACY_LOWERCASED {
        let phrase =
            generate_passphrase_with(name, length, CapitalizationSource::Ambient).unwrap();
        assert_eq!(phrase.to_lowercase(), expected);
    }
}

#[test]
fn test_special_overwrite_can_clobber_injected_digit() {
    // "bob"/4 drew neither class; the digit went to position 0 and the
    // special then landed on the same position.
    let phrase = generate_passphrase_with("bob", 4, CapitalizationSource::Ambient).unwrap();
    assert_eq!(phrase.to_lowercase(), "@uwa");
    assert!(!phrase.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_passphrase_exact_length() {
    for length in 1..=40 {
        assert_eq!(generate_passphrase("alice", length).unwrap().len(), length);
    }
}

#[test]
fn test_passphrase_shape() {
    let phrase = generate_passphrase("carol", 20).unwrap();
    for (index, c) in phrase.chars().enumerate() {
        let lower = c.to_ascii_lowercase();
        match index % 4 {
            1 => assert!("aeiou@$!&0123456789".contains(lower), "{} at {}", c, index),
            _ => assert!(c.is_ascii_alphanumeric() || "@$!&".contains(c)),
        }
    }
}

#[test]
fn test_passphrase_has_special_when_long_enough() {
    for length in 3..=20 {
        let phrase = generate_passphrase("alice", length).unwrap();
        assert!(
            phrase.chars().any(|c| "@$!&".contains(c)),
            "no special in {}",
            phrase
        );
    }
}
