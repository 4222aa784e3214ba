//! Constants used throughout the Flower SuperNode.
//!
//! Defaults that appear on the command line are shared with the SuperLink and
//! must not drift from the values the rest of Flower uses.

// =============================================================================
// Addresses
// =============================================================================

/// Default SuperLink Fleet API (gRPC-rere) address, shared by `--server` and `--superlink`.
pub const FLEET_API_GRPC_RERE_DEFAULT_ADDRESS: &str = "0.0.0.0:9092";

/// Default ClientAppIo API server address.
pub const CLIENTAPPIO_API_DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:9094";

// =============================================================================
// Flags
// =============================================================================

/// Deprecated SuperLink address flag.
pub const SERVER_FLAG: &str = "--server";

/// SuperLink address flag.
pub const SUPERLINK_FLAG: &str = "--superlink";

/// App-store directory flag.
pub const FLWR_DIR_FLAG: &str = "--flwr-dir";

/// Isolation mode flag.
pub const ISOLATION_FLAG: &str = "--isolation";

/// Root certificate flag.
pub const ROOT_CERTIFICATES_FLAG: &str = "--root-certificates";

/// Node configuration flag.
pub const NODE_CONFIG_FLAG: &str = "--node-config";

// =============================================================================
// File System
// =============================================================================

/// Environment variable overriding the Flower home directory.
pub const FLWR_HOME_ENV: &str = "FLWR_HOME";

/// XDG data directory environment variable.
pub const XDG_DATA_HOME_ENV: &str = "XDG_DATA_HOME";

/// Name of the Flower home directory below the data or home directory.
pub const FLWR_DIR_NAME: &str = ".flwr";

/// Directory below the Flower home holding installed apps.
pub const APPS_DIR_NAME: &str = "apps";

/// Extension that marks a `--node-config` value as a TOML file.
pub const TOML_EXTENSION: &str = ".toml";
