//! Flower SuperNode core library.
//!
//! This crate turns the raw `flower-supernode` command line into the values
//! the bootstrap assembles into a
//! [`ResolvedConfig`](supernode_node_api::ResolvedConfig):
//! - [`args`] - CLI argument groups
//! - [`resolve`] - deprecated and overlapping flag resolution
//! - [`node_config`] - `--node-config` parsing
//! - [`tls`] - root certificate loading
//! - [`dirs`] - Flower directory resolution
//! - [`logging`] - Logging initialization
//! - [`version`] - Version information

pub mod args;
pub mod constants;
pub mod dirs;
pub mod error;
pub mod logging;
pub mod node_config;
pub mod resolve;
pub mod tls;
pub mod version;

pub use error::UsageError;
