//! Bootstrap errors.

use supernode_node_core::{node_config::NodeConfigError, UsageError};
use supernode_node_identity::AuthKeyError;
use thiserror::Error;

/// Exit status for any fatal bootstrap error.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// A fatal condition that stops the SuperNode before or during the runtime.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Contradictory, incomplete or retired flags.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Invalid authentication key flags or key files.
    #[error(transparent)]
    AuthKeys(#[from] AuthKeyError),

    /// Invalid `--node-config`.
    #[error(transparent)]
    NodeConfig(#[from] NodeConfigError),

    /// Error handling or logging could not be installed.
    #[error("failed to set up the SuperNode: {0}")]
    Setup(eyre::Report),

    /// A collaborator failed after the configuration was resolved.
    #[error("SuperNode runtime failed: {0:#}")]
    Runtime(eyre::Report),
}

impl BootstrapError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}
