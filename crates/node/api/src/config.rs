//! Canonical runtime configuration produced by bootstrap.

use crate::{IsolationMode, Transport, UserConfig};
use std::{fmt, path::PathBuf, time::Duration};
use supernode_node_identity::AuthKeyPair;

/// Runtime configuration resolved from the command line.
///
/// Built once by bootstrap and moved into the [`RuntimeLauncher`](crate::RuntimeLauncher).
/// The SuperLink address and transport are always set; `auth_keys` is either a
/// complete pair or absent.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// SuperLink Fleet API address.
    pub superlink_address: String,
    /// Transport used to reach the SuperLink.
    pub transport: Transport,
    /// Connect without TLS.
    pub insecure: bool,
    /// ClientApp isolation mode.
    pub isolation: IsolationMode,
    /// Maximum number of reconnection attempts, unbounded when `None`.
    pub max_retries: Option<u64>,
    /// Maximum total time spent reconnecting, unbounded when `None`.
    pub max_wait_time: Option<Duration>,
    /// Node configuration forwarded to ClientApps.
    pub node_config: UserConfig,
    /// Directory containing installed Flower Apps.
    pub flwr_dir: Option<PathBuf>,
    /// Authentication keypair, authentication is disabled when `None`.
    pub auth_keys: Option<AuthKeyPair>,
    /// Address of the local ClientAppIo API server.
    pub clientappio_api_address: String,
}

impl ResolvedConfig {
    /// Whether SuperNode authentication is enabled.
    pub fn authentication_enabled(&self) -> bool {
        self.auth_keys.is_some()
    }
}

/// PEM-encoded root certificates used to verify the SuperLink.
#[derive(Clone, PartialEq, Eq)]
pub struct RootCertificates(Vec<u8>);

impl RootCertificates {
    /// Wraps raw PEM bytes.
    pub fn new(pem: Vec<u8>) -> Self {
        Self(pem)
    }

    /// The raw PEM bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for RootCertificates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RootCertificates").field(&format_args!("{} bytes", self.0.len())).finish()
    }
}
