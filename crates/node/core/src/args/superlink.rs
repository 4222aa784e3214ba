//! SuperLink connection arguments.

use crate::constants::FLEET_API_GRPC_RERE_DEFAULT_ADDRESS;
use clap::Args;
use std::{path::PathBuf, time::Duration};

use super::TransportArgs;

/// Parameters for connecting to the SuperLink Fleet API.
#[derive(Debug, Args, Clone, PartialEq)]
#[command(next_help_heading = "SuperLink")]
pub struct SuperLinkArgs {
    /// Run the client without HTTPS. By default, the client runs with HTTPS
    /// enabled. Use this flag only if you understand the risks.
    #[arg(long)]
    pub insecure: bool,

    /// Transport selection.
    #[command(flatten)]
    pub transport: TransportArgs,

    /// Specifies the path to the PEM-encoded root certificate file for
    /// establishing secure HTTPS connections.
    #[arg(long, value_name = "ROOT_CERT")]
    pub root_certificates: Option<PathBuf>,

    /// Server address (deprecated, use --superlink).
    #[arg(long, value_name = "ADDRESS", default_value = FLEET_API_GRPC_RERE_DEFAULT_ADDRESS)]
    pub server: String,

    /// SuperLink Fleet API (gRPC-rere) address (IPv4, IPv6, or a domain name).
    #[arg(long, value_name = "ADDRESS", default_value = FLEET_API_GRPC_RERE_DEFAULT_ADDRESS)]
    pub superlink: String,

    /// The maximum number of times the client will try to reconnect to the
    /// SuperLink before giving up in case of a connection error. By default,
    /// there is no limit to the number of tries.
    #[arg(long, value_name = "COUNT")]
    pub max_retries: Option<u64>,

    /// The maximum duration in seconds before the client stops trying to
    /// connect to the SuperLink in case of connection error. By default, there
    /// is no limit to the total time.
    #[arg(long, value_name = "SECONDS", value_parser = parse_max_wait_time)]
    pub max_wait_time: Option<Duration>,
}

impl Default for SuperLinkArgs {
    fn default() -> Self {
        Self {
            insecure: false,
            transport: TransportArgs::default(),
            root_certificates: None,
            server: FLEET_API_GRPC_RERE_DEFAULT_ADDRESS.to_owned(),
            superlink: FLEET_API_GRPC_RERE_DEFAULT_ADDRESS.to_owned(),
            max_retries: None,
            max_wait_time: None,
        }
    }
}

/// Parses a non-negative, finite number of seconds.
pub fn parse_max_wait_time(value: &str) -> Result<Duration, String> {
    let secs: f64 = value.trim().parse().map_err(|_| format!("invalid number of seconds: {value}"))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("expected a finite, non-negative number of seconds, got {value}"));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("number of seconds is too large to represent: {value}"))
}
