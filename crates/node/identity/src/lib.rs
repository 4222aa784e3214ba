//! SuperNode authentication identity.
//!
//! A SuperNode authenticates against the SuperLink with an elliptic curve
//! keypair stored as two OpenSSH files. This crate loads both files and checks
//! that each holds an elliptic curve key:
//!
//! - [`resolve_auth_keys`] - all-or-nothing resolution of the two key paths
//! - [`AuthKeyPair`] - the validated private/public key pair
//! - [`AuthKeyError`] / [`KeyFormatError`] - why resolution failed
//!
//! The two keys are validated independently. Nothing here checks that the
//! public key belongs to the private key.

mod error;
mod keypair;

pub use error::{AuthKeyError, KeyFormatError};
pub use keypair::{
    load_private_key, load_public_key, resolve_auth_keys, AuthKeyPair, PRIVATE_KEY_FLAG,
    PUBLIC_KEY_FLAG,
};

/// Re-exported key types so downstream crates need no direct `ssh-key` dependency.
pub use ssh_key::{Algorithm, EcdsaCurve, PrivateKey, PublicKey};
