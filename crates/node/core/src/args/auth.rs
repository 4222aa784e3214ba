//! SuperNode authentication arguments.

use clap::Args;
use std::path::PathBuf;
use supernode_node_identity::{resolve_auth_keys, AuthKeyError, AuthKeyPair};

/// Authentication key paths. Both or neither must be given.
#[derive(Debug, Args, Clone, Default, PartialEq, Eq)]
#[command(next_help_heading = "Authentication")]
pub struct AuthArgs {
    /// The SuperNode's private key (as a path str) to enable authentication.
    #[arg(long, value_name = "PATH")]
    pub auth_supernode_private_key: Option<PathBuf>,

    /// The SuperNode's public key (as a path str) to enable authentication.
    #[arg(long, value_name = "PATH")]
    pub auth_supernode_public_key: Option<PathBuf>,
}

impl AuthArgs {
    /// Loads and validates the keypair named by the two flags.
    pub fn resolve(&self) -> Result<Option<AuthKeyPair>, AuthKeyError> {
        resolve_auth_keys(
            self.auth_supernode_private_key.as_deref(),
            self.auth_supernode_public_key.as_deref(),
        )
    }
}
