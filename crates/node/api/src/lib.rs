//! Node API - the contract between SuperNode bootstrap and the runtime.
//!
//! Bootstrap resolves the command line into a [`ResolvedConfig`] and hands it,
//! by value, to a [`RuntimeLauncher`]. Everything the bootstrap needs from the
//! outside world is expressed as a trait so the resolution logic stays pure:
//!
//! ```text
//! bootstrap                          collaborators
//! ─────────                          ─────────────
//! emit(RunSupernodeEnter)       ──►  EventSink
//! load_fn(flwr_dir, multi_app)  ──►  ClientAppLoader
//! register(RunSupernodeLeave)   ──►  ExitHandlers
//! launch(LaunchRequest)         ──►  RuntimeLauncher   (blocks until shutdown)
//! ```

#![warn(missing_docs)]

mod config;
mod events;
mod launch;
mod types;
mod user_config;

pub use config::{ResolvedConfig, RootCertificates};
pub use events::{EventSink, EventType, ExitHandlers};
pub use launch::{ClientAppLoader, ClientAppSource, LaunchRequest, RuntimeLauncher};
pub use types::{IsolationMode, Transport};
pub use user_config::{UserConfig, UserConfigValue};

// Re-export identity types carried by the resolved configuration
pub use supernode_node_identity::AuthKeyPair;
