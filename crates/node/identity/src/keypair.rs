//! Loading and validation of the SuperNode authentication keypair.

use crate::error::{AuthKeyError, KeyFormatError};
use ssh_key::{Algorithm, HashAlg, PrivateKey, PublicKey};
use std::{fmt, fs, path::Path};
use tracing::debug;

/// Flag carrying the private key path.
pub const PRIVATE_KEY_FLAG: &str = "--auth-supernode-private-key";

/// Flag carrying the public key path.
pub const PUBLIC_KEY_FLAG: &str = "--auth-supernode-public-key";

/// Elliptic curve keypair used to authenticate the SuperNode.
///
/// Both halves are always present. Each half was checked to be an elliptic
/// curve key, but the halves are not checked against each other.
#[derive(Clone)]
pub struct AuthKeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl fmt::Debug for AuthKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthKeyPair")
            .field("algorithm", &self.public_key.algorithm())
            .field("public_key", &format_args!("{}", self.public_key.fingerprint(HashAlg::Sha256)))
            .finish_non_exhaustive()
    }
}

impl AuthKeyPair {
    /// Creates a pair from two keys that were each validated as elliptic curve keys.
    fn new(private_key: PrivateKey, public_key: PublicKey) -> Self {
        Self { private_key, public_key }
    }

    /// The private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Splits the pair into its halves.
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private_key, self.public_key)
    }
}

/// Resolves the authentication keypair from the two optional key paths.
///
/// - neither path: `Ok(None)`, authentication is disabled
/// - one path: [`AuthKeyError::IncompletePair`]
/// - both paths: the private key is loaded first, then the public key; the
///   first failure is returned
///
/// Empty paths count as absent.
pub fn resolve_auth_keys(
    private_key_path: Option<&Path>,
    public_key_path: Option<&Path>,
) -> Result<Option<AuthKeyPair>, AuthKeyError> {
    let private_key_path = private_key_path.filter(|path| !path.as_os_str().is_empty());
    let public_key_path = public_key_path.filter(|path| !path.as_os_str().is_empty());

    let (private_key_path, public_key_path) = match (private_key_path, public_key_path) {
        (None, None) => return Ok(None),
        (Some(private), Some(public)) => (private, public),
        _ => return Err(AuthKeyError::IncompletePair),
    };

    let private_key = load_private_key(private_key_path).map_err(AuthKeyError::PrivateKey)?;
    let public_key = load_public_key(public_key_path).map_err(AuthKeyError::PublicKey)?;

    debug!(
        algorithm = %public_key.algorithm(),
        fingerprint = %public_key.fingerprint(HashAlg::Sha256),
        "Loaded SuperNode authentication keys"
    );

    Ok(Some(AuthKeyPair::new(private_key, public_key)))
}

/// Loads an unencrypted OpenSSH private key and requires it to be an elliptic curve key.
pub fn load_private_key(path: &Path) -> Result<PrivateKey, KeyFormatError> {
    let bytes = read_key_file(path)?;
    let key = PrivateKey::from_openssh(&bytes)?;

    if key.is_encrypted() {
        return Err(KeyFormatError::Encrypted);
    }
    ensure_elliptic_curve(key.algorithm())?;

    Ok(key)
}

/// Loads an OpenSSH public key (`ecdsa-sha2-nistp256 AAAA... comment`) and
/// requires it to be an elliptic curve key.
pub fn load_public_key(path: &Path) -> Result<PublicKey, KeyFormatError> {
    let bytes = read_key_file(path)?;
    let text = std::str::from_utf8(&bytes)?;
    let key = PublicKey::from_openssh(text.trim())?;

    ensure_elliptic_curve(key.algorithm())?;

    Ok(key)
}

fn read_key_file(path: &Path) -> Result<Vec<u8>, KeyFormatError> {
    fs::read(path).map_err(|source| KeyFormatError::Read { path: path.to_path_buf(), source })
}

fn ensure_elliptic_curve(algorithm: Algorithm) -> Result<(), KeyFormatError> {
    match algorithm {
        Algorithm::Ecdsa { .. } => Ok(()),
        other => Err(KeyFormatError::NotEllipticCurve(other)),
    }
}
