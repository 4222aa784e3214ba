use assert_matches::assert_matches;
use std::path::PathBuf;
use supernode_node_identity::{
    resolve_auth_keys, Algorithm, AuthKeyError, EcdsaCurve, KeyFormatError,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn resolve(private: &str, public: &str) -> Result<Option<supernode_node_identity::AuthKeyPair>, AuthKeyError> {
    resolve_auth_keys(Some(&fixture(private)), Some(&fixture(public)))
}

#[test]
fn accepts_p256_keypair() {
    let pair = resolve("ecdsa_p256", "ecdsa_p256.pub").unwrap().expect("pair");

    assert_eq!(pair.private_key().algorithm(), Algorithm::Ecdsa { curve: EcdsaCurve::NistP256 });
    assert_eq!(pair.public_key().algorithm(), Algorithm::Ecdsa { curve: EcdsaCurve::NistP256 });
}

#[test]
fn accepts_other_curves() {
    let pair = resolve("ecdsa_p384", "ecdsa_p384.pub").unwrap().expect("pair");
    assert_eq!(pair.public_key().algorithm(), Algorithm::Ecdsa { curve: EcdsaCurve::NistP384 });
}

#[test]
fn does_not_check_that_halves_match() {
    // Each half is type checked on its own; mismatched halves are accepted.
    let pair = resolve("ecdsa_p256", "ecdsa_other.pub").unwrap().expect("pair");
    assert_ne!(pair.private_key().public_key().key_data(), pair.public_key().key_data());
}

#[test]
fn rejects_rsa_private_key() {
    let err = resolve("rsa", "ecdsa_p256.pub").unwrap_err();
    assert_matches!(err, AuthKeyError::PrivateKey(KeyFormatError::NotEllipticCurve(Algorithm::Rsa { .. })));
    assert!(err.to_string().contains("--auth-supernode-private-key"));
}

#[test]
fn rejects_ed25519_private_key() {
    let err = resolve("ed25519", "ecdsa_p256.pub").unwrap_err();
    assert_matches!(err, AuthKeyError::PrivateKey(KeyFormatError::NotEllipticCurve(Algorithm::Ed25519)));
}

#[test]
fn rejects_rsa_public_key() {
    let err = resolve("ecdsa_p256", "rsa.pub").unwrap_err();
    assert_matches!(err, AuthKeyError::PublicKey(KeyFormatError::NotEllipticCurve(_)));
    assert!(err.to_string().contains("--auth-supernode-public-key"));
}

#[test]
fn rejects_ed25519_public_key() {
    let err = resolve("ecdsa_p256", "ed25519.pub").unwrap_err();
    assert_matches!(err, AuthKeyError::PublicKey(KeyFormatError::NotEllipticCurve(Algorithm::Ed25519)));
}

#[test]
fn rejects_passphrase_protected_private_key() {
    let err = resolve("ecdsa_encrypted", "ecdsa_encrypted.pub").unwrap_err();
    assert_matches!(err, AuthKeyError::PrivateKey(KeyFormatError::Encrypted));
}

#[test]
fn rejects_garbage_public_key() {
    let err = resolve("ecdsa_p256", "garbage").unwrap_err();
    assert_matches!(err, AuthKeyError::PublicKey(KeyFormatError::Malformed(_)));
}

#[test]
fn rejects_public_key_given_as_private_key() {
    let err = resolve("ecdsa_p256.pub", "ecdsa_p256.pub").unwrap_err();
    assert_matches!(err, AuthKeyError::PrivateKey(_));
}

#[test]
fn private_key_is_checked_before_public_key() {
    let err = resolve("rsa", "rsa.pub").unwrap_err();
    assert_matches!(err, AuthKeyError::PrivateKey(_));
}

#[test]
fn debug_output_does_not_leak_private_key() {
    let pair = resolve("ecdsa_p256", "ecdsa_p256.pub").unwrap().expect("pair");
    let rendered = format!("{pair:?}");
    assert!(rendered.contains("SHA256:"));
    assert!(!rendered.contains("Sha256(["));
    assert!(!rendered.contains("PRIVATE"));
}
