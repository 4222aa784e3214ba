//! Default collaborators wired into the `flower-supernode` binary.
//!
//! The connection loop itself lives outside this workspace; the default
//! launcher only hands off, logs the configuration and keeps the process alive
//! until it is asked to terminate.

use eyre::{eyre, Result, WrapErr};
use std::{
    path::Path,
    sync::{Arc, OnceLock},
};
use supernode_node_api::{
    ClientAppLoader, ClientAppSource, EventSink, EventType, ExitHandlers, LaunchRequest,
    RuntimeLauncher,
};
use supernode_node_core::dirs;
use tracing::{debug, info};

/// Event sink that records lifecycle events in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: EventType) {
        debug!(%event, "Lifecycle event");
    }
}

/// Exit handlers that report the registered event once a termination signal
/// has been received.
#[derive(Debug, Clone, Default)]
pub struct SignalExitHandlers {
    registered: Arc<OnceLock<EventType>>,
}

impl SignalExitHandlers {
    /// The event registered for shutdown, if any.
    pub fn registered(&self) -> Option<EventType> {
        self.registered.get().copied()
    }

    /// Reports the registered event to `events`.
    pub fn on_exit(&self, events: &impl EventSink) {
        if let Some(event) = self.registered() {
            events.emit(event);
        }
    }
}

impl ExitHandlers for SignalExitHandlers {
    fn register(&self, event: EventType) -> Result<()> {
        self.registered
            .set(event)
            .map_err(|event| eyre!("exit handlers already registered, cannot register {event}"))
    }
}

/// ClientApp loader backed by the local Flower app store.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppStoreLoader;

impl ClientAppLoader for AppStoreLoader {
    fn load_fn(&self, flwr_dir: Option<&Path>, multi_app: bool) -> ClientAppSource {
        ClientAppSource {
            default_app_ref: String::new(),
            apps_dir: dirs::apps_dir(&dirs::flwr_dir(flwr_dir)),
            multi_app,
        }
    }
}

/// Launcher that logs the handoff and blocks until SIGINT or SIGTERM.
#[derive(Debug, Clone)]
pub struct AwaitShutdownLauncher<E> {
    events: E,
    exit_handlers: SignalExitHandlers,
}

impl<E> AwaitShutdownLauncher<E> {
    /// Creates a launcher reporting shutdown through `exit_handlers`.
    pub fn new(events: E, exit_handlers: SignalExitHandlers) -> Self {
        Self { events, exit_handlers }
    }
}

impl<E: EventSink> RuntimeLauncher for AwaitShutdownLauncher<E> {
    fn launch(&self, request: LaunchRequest) -> Result<()> {
        let LaunchRequest { config, root_certificates, client_app } = request;

        info!(
            superlink = %config.superlink_address,
            transport = %config.transport,
            isolation = %config.isolation,
            insecure = config.insecure,
            authentication = config.authentication_enabled(),
            "SuperNode configuration resolved"
        );
        debug!(
            max_retries = ?config.max_retries,
            max_wait_time = ?config.max_wait_time,
            node_config = ?config.node_config,
            clientappio_api_address = %config.clientappio_api_address,
            apps_dir = %client_app.apps_dir.display(),
            root_certificates = ?root_certificates,
            "Runtime handoff"
        );

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .wrap_err("failed to build shutdown runtime")?;
        runtime.block_on(wait_for_shutdown_signal())?;

        info!("Shutting down SuperNode");
        self.exit_handlers.on_exit(&self.events);
        Ok(())
    }
}

/// Resolves on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn wait_for_shutdown_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate =
            signal(SignalKind::terminate()).wrap_err("failed to install SIGTERM handler")?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res.wrap_err("failed to listen for Ctrl-C")?,
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await.wrap_err("failed to listen for Ctrl-C")?;

    Ok(())
}
