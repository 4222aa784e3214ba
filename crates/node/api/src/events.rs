//! Lifecycle events and process-wide exit handling.

use auto_impl::auto_impl;
use strum::{AsRefStr, Display};

/// Lifecycle event reported by the SuperNode entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// `flower-supernode` started.
    RunSupernodeEnter,
    /// `flower-supernode` is shutting down.
    RunSupernodeLeave,
    /// `flower-client-app` started.
    RunClientAppEnter,
    /// `flower-client-app` is shutting down.
    RunClientAppLeave,
}

/// Sink for lifecycle events.
#[auto_impl(&, Box, Arc)]
pub trait EventSink {
    /// Reports an event.
    fn emit(&self, event: EventType);
}

/// Process-wide shutdown hooks.
///
/// Registered once, right before the runtime starts. The registered event is
/// reported when the process is asked to terminate.
#[auto_impl(&, Box, Arc)]
pub trait ExitHandlers {
    /// Registers the handlers that report `event` on shutdown.
    fn register(&self, event: EventType) -> eyre::Result<()>;
}
