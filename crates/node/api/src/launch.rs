//! Runtime handoff.

use crate::{ResolvedConfig, RootCertificates};
use auto_impl::auto_impl;
use std::path::{Path, PathBuf};

/// Where and how the runtime finds ClientApps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAppSource {
    /// App reference used when the SuperLink does not name one.
    pub default_app_ref: String,
    /// Directory holding installed Flower Apps.
    pub apps_dir: PathBuf,
    /// Whether apps are selected per run rather than fixed at startup.
    pub multi_app: bool,
}

/// Builds the ClientApp source handed to the runtime.
#[auto_impl(&, Box, Arc)]
pub trait ClientAppLoader {
    /// Returns the ClientApp source for the given app-store directory.
    fn load_fn(&self, flwr_dir: Option<&Path>, multi_app: bool) -> ClientAppSource;
}

/// Everything the runtime receives from bootstrap.
#[derive(Debug)]
pub struct LaunchRequest {
    /// The resolved configuration.
    pub config: ResolvedConfig,
    /// Root certificates for TLS, system roots are used when `None`.
    pub root_certificates: Option<RootCertificates>,
    /// ClientApp source.
    pub client_app: ClientAppSource,
}

/// Starts the SuperNode runtime.
#[auto_impl(&, Box, Arc)]
pub trait RuntimeLauncher {
    /// Runs the node with `request`, blocking until it shuts down.
    fn launch(&self, request: LaunchRequest) -> eyre::Result<()>;
}
