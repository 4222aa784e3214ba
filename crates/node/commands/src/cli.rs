//! CLI argument assembly and top-level parsers.

use clap::{Args, Parser};
use supernode_node_core::version::LONG_VERSION;

// Re-export args from core
pub use supernode_node_core::args::{AuthArgs, ClientAppArgs, LogArgs, SuperLinkArgs, TransportArgs};

/// Start a Flower SuperNode.
#[derive(Debug, Parser)]
#[command(
    name = "flower-supernode",
    author,
    version,
    long_version = LONG_VERSION.as_str(),
    about = "Start a Flower SuperNode",
    long_about = None
)]
pub struct Cli {
    /// SuperNode configuration.
    #[command(flatten)]
    pub node: SuperNodeArgs,

    /// Logging configuration.
    #[command(flatten)]
    pub logs: LogArgs,
}

/// Arguments for running a SuperNode.
#[derive(Debug, Clone, Default, Args)]
pub struct SuperNodeArgs {
    /// (REMOVED) This argument is removed. The SuperNode now automatically uses
    /// the ClientApp delivered from the SuperLink, so there is no need to
    /// provide the app directory manually.
    #[arg(value_name = "APP")]
    pub app: Option<String>,

    /// SuperLink connection configuration.
    #[command(flatten)]
    pub superlink: SuperLinkArgs,

    /// Authentication configuration.
    #[command(flatten)]
    pub auth: AuthArgs,

    /// ClientApp configuration.
    #[command(flatten)]
    pub client_app: ClientAppArgs,
}

/// The retired `flower-client-app` command.
#[derive(Debug, Parser)]
#[command(name = "flower-client-app", author, version, about = "Replaced by `flwr run`")]
pub struct ClientAppCli {
    /// Logging configuration.
    #[command(flatten)]
    pub logs: LogArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use supernode_node_api::{IsolationMode, Transport};

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
        ClientAppCli::command().debug_assert();
    }

    #[test]
    fn test_author_is_shown() {
        assert_eq!(Cli::command().get_author(), Some("Flower SuperNode Contributors"));
        assert_eq!(ClientAppCli::command().get_author(), Some("Flower SuperNode Contributors"));
    }

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::try_parse_from([
            "flower-supernode",
            "--superlink",
            "flower.example.com:9092",
            "--rest",
            "--insecure",
            "--isolation",
            "process",
            "--max-retries",
            "5",
            "--node-config",
            "partition-id=0 num-partitions=10",
            "-vv",
        ])
        .unwrap();

        assert!(cli.node.app.is_none());
        assert_eq!(cli.node.superlink.superlink, "flower.example.com:9092");
        assert_eq!(cli.node.superlink.transport.transport(), Transport::Rest);
        assert!(cli.node.superlink.insecure);
        assert_eq!(cli.node.client_app.isolation, Some(IsolationMode::Process));
        assert_eq!(cli.node.superlink.max_retries, Some(5));
        assert_eq!(cli.logs.verbosity, 2);
    }

    #[test]
    fn test_positional_app_is_still_parsed() {
        let cli = Cli::try_parse_from(["flower-supernode", "./my-app"]).unwrap();
        assert_eq!(cli.node.app.as_deref(), Some("./my-app"));
    }

    #[test]
    fn test_transport_flags_conflict() {
        let err = Cli::try_parse_from(["flower-supernode", "--grpc-adapter", "--rest"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
