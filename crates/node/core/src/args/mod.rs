//! CLI argument structs for the `flower-supernode` command line.
//!
//! Each struct is a clap argument group flattened into the top-level parser.
//! They only hold what the user typed; turning them into a
//! [`ResolvedConfig`](supernode_node_api::ResolvedConfig) is the job of
//! [`crate::resolve`] and the bootstrap command.

mod auth;
mod clientapp;
mod log;
mod superlink;
mod transport;

pub use auth::AuthArgs;
pub use clientapp::ClientAppArgs;
pub use log::LogArgs;
pub use superlink::{parse_max_wait_time, SuperLinkArgs};
pub use transport::TransportArgs;
