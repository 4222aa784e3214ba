//! Authentication key errors.

use crate::keypair::{PRIVATE_KEY_FLAG, PUBLIC_KEY_FLAG};
use ssh_key::Algorithm;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Why a single key file was rejected.
#[derive(Debug, Error)]
pub enum KeyFormatError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A public key file must be text.
    #[error("key file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The file is not an OpenSSH key.
    #[error("malformed OpenSSH key: {0}")]
    Malformed(#[from] ssh_key::Error),

    /// Private keys are loaded without a passphrase.
    #[error("private key is protected by a passphrase")]
    Encrypted,

    /// The key parsed but uses a non elliptic curve algorithm (RSA, Ed25519, ...).
    #[error("expected an elliptic curve key, found {0}")]
    NotEllipticCurve(Algorithm),
}

/// Failure to resolve the SuperNode authentication keypair.
#[derive(Debug, Error)]
pub enum AuthKeyError {
    /// Only one of the two key paths was supplied.
    #[error(
        "Authentication requires file paths to both '{private}' and '{public}' to be \
         provided (providing only one of them is not sufficient).",
        private = PRIVATE_KEY_FLAG,
        public = PUBLIC_KEY_FLAG
    )]
    IncompletePair,

    /// The private key file is unreadable or not an elliptic curve key.
    #[error(
        "Error: Unable to parse the private key file in '{flag}'. Authentication requires \
         elliptic curve private and public key pair. Please ensure that the file path points \
         to a valid private key file and try again.",
        flag = PRIVATE_KEY_FLAG
    )]
    PrivateKey(#[source] KeyFormatError),

    /// The public key file is unreadable or not an elliptic curve key.
    #[error(
        "Error: Unable to parse the public key file in '{flag}'. Authentication requires \
         elliptic curve private and public key pair. Please ensure that the file path points \
         to a valid public key file and try again.",
        flag = PUBLIC_KEY_FLAG
    )]
    PublicKey(#[source] KeyFormatError),
}

impl AuthKeyError {
    /// Returns the underlying key format error, if this is not a usage error.
    pub fn format_error(&self) -> Option<&KeyFormatError> {
        match self {
            Self::IncompletePair => None,
            Self::PrivateKey(err) | Self::PublicKey(err) => Some(err),
        }
    }

    /// Whether the error comes from contradictory flags rather than key contents.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::IncompletePair)
    }
}
