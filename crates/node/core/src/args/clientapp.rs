//! ClientApp hosting arguments.

use crate::constants::CLIENTAPPIO_API_DEFAULT_SERVER_ADDRESS;
use clap::Args;
use std::path::PathBuf;
use supernode_node_api::IsolationMode;

/// How ClientApps are found, isolated and configured.
#[derive(Debug, Args, Clone, PartialEq, Eq)]
#[command(next_help_heading = "ClientApp")]
pub struct ClientAppArgs {
    /// The path containing installed Flower Apps.
    ///
    /// The default directory is:
    ///
    /// - `$FLWR_HOME/` if `$FLWR_HOME` is defined
    /// - `$XDG_DATA_HOME/.flwr/` if `$XDG_DATA_HOME` is defined
    /// - `$HOME/.flwr/` in all other cases
    #[arg(long, value_name = "PATH", verbatim_doc_comment)]
    pub flwr_dir: Option<PathBuf>,

    /// Isolation mode when running a `ClientApp` (`subprocess` by default).
    ///
    /// Use `subprocess` to configure SuperNode to run a `ClientApp` in a
    /// subprocess. Use `process` to indicate that a separate independent
    /// process gets created outside of SuperNode.
    #[arg(long, value_enum, value_name = "MODE")]
    pub isolation: Option<IsolationMode>,

    /// ClientAppIo API (gRPC) server address (IPv4, IPv6, or a domain name).
    #[arg(long, value_name = "ADDRESS", default_value = CLIENTAPPIO_API_DEFAULT_SERVER_ADDRESS)]
    pub clientappio_api_address: String,

    /// A space separated list of key/value pairs (separated by `=`) to
    /// configure the SuperNode, or the path to a TOML file.
    ///
    /// E.g. --node-config 'key1="value1" partition-id=0 num-partitions=100'
    #[arg(long, value_name = "CONFIG")]
    pub node_config: Option<String>,
}

impl Default for ClientAppArgs {
    fn default() -> Self {
        Self {
            flwr_dir: None,
            isolation: None,
            clientappio_api_address: CLIENTAPPIO_API_DEFAULT_SERVER_ADDRESS.to_owned(),
            node_config: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct CommandParser {
        #[command(flatten)]
        args: ClientAppArgs,
    }

    #[test]
    fn test_parse_defaults() {
        let args = CommandParser::parse_from(["flower-supernode"]).args;
        assert_eq!(args, ClientAppArgs::default());
    }

    #[test]
    fn test_parse_isolation() {
        let args = CommandParser::parse_from(["flower-supernode", "--isolation", "process"]).args;
        assert_eq!(args.isolation, Some(IsolationMode::Process));

        let err = CommandParser::try_parse_from(["flower-supernode", "--isolation", "thread"]);
        assert!(err.is_err());
    }
}
