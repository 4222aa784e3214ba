//! CLI commands for the Flower SuperNode.
//!
//! This crate provides the command-line interface:
//! - [`Cli`] - `flower-supernode` parser
//! - [`ClientAppCli`] - retired `flower-client-app` parser
//! - [`commands::supernode`] - the bootstrap that resolves flags and starts the runtime
//! - [`collaborators`] - default event, exit, loader and launcher implementations
//!
//! Entry points return a [`BootstrapError`] instead of exiting; the binary
//! decides the exit status.

mod cli;
pub mod collaborators;
pub mod commands;
mod error;

pub use cli::{
    AuthArgs, ClientAppArgs, ClientAppCli, Cli, LogArgs, SuperLinkArgs, SuperNodeArgs,
    TransportArgs,
};
pub use error::{BootstrapError, FAILURE_EXIT_CODE};

use clap::Parser;
use collaborators::{AppStoreLoader, AwaitShutdownLauncher, SignalExitHandlers, TracingEventSink};
use commands::supernode::Collaborators;
use supernode_node_core::logging;

/// Run `flower-supernode` with the process arguments.
///
/// This is the main entry point that should be called from the binary.
pub fn run_supernode() -> Result<(), BootstrapError> {
    color_eyre::install().map_err(BootstrapError::Setup)?;

    let cli = Cli::parse();
    logging::init_logging(&cli.logs).map_err(BootstrapError::Setup)?;

    let exit_handlers = SignalExitHandlers::default();
    let collaborators = Collaborators {
        events: TracingEventSink,
        loader: AppStoreLoader,
        exit_handlers: exit_handlers.clone(),
        launcher: AwaitShutdownLauncher::new(TracingEventSink, exit_handlers),
    };

    commands::supernode::run(cli.node, &collaborators)
}

/// Run the retired `flower-client-app` command with the process arguments.
pub fn run_client_app() -> Result<(), BootstrapError> {
    color_eyre::install().map_err(BootstrapError::Setup)?;

    let cli = ClientAppCli::parse();
    logging::init_logging(&cli.logs).map_err(BootstrapError::Setup)?;

    commands::client_app::run(&TracingEventSink, &SignalExitHandlers::default())
}
