//! Closed sets of runtime modes.

use strum::{AsRefStr, Display, EnumString};

/// Network dialect used to reach the SuperLink Fleet API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Transport {
    /// gRPC request-response.
    #[default]
    GrpcRere,
    /// gRPC adapter.
    GrpcAdapter,
    /// REST.
    Rest,
}

/// How the ClientApp process is run next to the SuperNode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[strum(serialize_all = "lowercase")]
pub enum IsolationMode {
    /// The SuperNode spawns the ClientApp in a subprocess.
    #[default]
    Subprocess,
    /// The ClientApp is started as an independent process outside the SuperNode.
    Process,
}
