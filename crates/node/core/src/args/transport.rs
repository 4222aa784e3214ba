//! Transport selection flags.

use clap::Args;
use supernode_node_api::Transport;

/// Mutually exclusive transport flags.
///
/// Exclusivity is enforced by clap through the `transport` argument group.
#[derive(Debug, Args, Clone, Copy, Default, PartialEq, Eq)]
#[group(id = "transport", multiple = false)]
#[command(next_help_heading = "Transport")]
pub struct TransportArgs {
    /// Use grpc-rere as a transport layer for the client.
    #[arg(long = "grpc-rere")]
    pub grpc_rere: bool,

    /// Use grpc-adapter as a transport layer for the client.
    #[arg(long = "grpc-adapter")]
    pub grpc_adapter: bool,

    /// Use REST as a transport layer for the client.
    #[arg(long)]
    pub rest: bool,
}

impl TransportArgs {
    /// The selected transport, `grpc-rere` when no flag is set.
    pub fn transport(&self) -> Transport {
        Transport::from(self)
    }
}

impl From<&TransportArgs> for Transport {
    fn from(args: &TransportArgs) -> Self {
        match (args.grpc_adapter, args.rest) {
            (true, _) => Transport::GrpcAdapter,
            (_, true) => Transport::Rest,
            _ => Transport::GrpcRere,
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
        args: TransportArgs,
    }

    fn parse(flags: &[&str]) -> Result<Transport, clap::Error> {
        let argv = std::iter::once("flower-supernode").chain(flags.iter().copied());
        CommandParser::try_parse_from(argv).map(|parser| parser.args.transport())
    }

    #[test]
    fn test_defaults_to_grpc_rere() {
        assert_eq!(parse(&[]).unwrap(), Transport::GrpcRere);
        assert_eq!(TransportArgs::default().transport(), Transport::GrpcRere);
    }

    #[test]
    fn test_each_flag_selects_its_transport() {
        assert_eq!(parse(&["--grpc-rere"]).unwrap(), Transport::GrpcRere);
        assert_eq!(parse(&["--grpc-adapter"]).unwrap(), Transport::GrpcAdapter);
        assert_eq!(parse(&["--rest"]).unwrap(), Transport::Rest);
    }

    #[test]
    fn test_flags_are_mutually_exclusive() {
        let err = parse(&["--rest", "--grpc-adapter"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let err = parse(&["--grpc-rere", "--rest"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
