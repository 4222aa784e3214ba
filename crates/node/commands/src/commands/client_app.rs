//! The retired `flower-client-app` command.

use crate::error::BootstrapError;
use supernode_node_api::{EventSink, EventType, ExitHandlers};
use tracing::error;

/// Reports that `flower-client-app` was replaced by `flwr run`.
///
/// This is not a failure: the command logs the replacement and exits cleanly.
pub fn run<E, X>(events: &E, exit_handlers: &X) -> Result<(), BootstrapError>
where
    E: EventSink,
    X: ExitHandlers,
{
    events.emit(EventType::RunClientAppEnter);
    error!("The command `flower-client-app` has been replaced by `flwr run`.");
    exit_handlers.register(EventType::RunClientAppLeave).map_err(BootstrapError::Runtime)
}
