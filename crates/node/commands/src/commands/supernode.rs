//! SuperNode command - resolve the command line and start the runtime.
//!
//! Bootstrap runs once, on a single thread, before any runtime work starts:
//!
//! 1. Resolve `--server` / `--superlink` (and `--flwr-dir` / `--isolation`)
//! 2. Reject the retired positional `app` argument
//! 3. Obtain root certificates for the resolved address
//! 4. Build the ClientApp source
//! 5. Resolve the authentication keypair
//! 6. Assemble the [`ResolvedConfig`]
//! 7. Register exit handlers
//! 8. Hand the configuration to the runtime, which blocks until shutdown
//!
//! Steps 1 to 6 acquire nothing outside the process, so any failure there is
//! returned as is and the caller exits.

use crate::{cli::SuperNodeArgs, error::BootstrapError};
use supernode_node_api::{
    ClientAppLoader, EventSink, EventType, ExitHandlers, LaunchRequest, ResolvedConfig,
    RuntimeLauncher,
};
use supernode_node_core::{
    node_config::parse_node_config,
    resolve::{reject_app_argument, resolve_isolation, resolve_superlink_address, DeprecationWarning},
    tls::try_obtain_root_certificates,
};
use tracing::{debug, info};

/// External services the bootstrap calls into.
#[derive(Debug, Clone)]
pub struct Collaborators<E, L, X, R> {
    /// Lifecycle event sink.
    pub events: E,
    /// ClientApp loader factory.
    pub loader: L,
    /// Process-wide exit handlers.
    pub exit_handlers: X,
    /// Runtime launcher.
    pub launcher: R,
}

/// Outcome of bootstrap steps 1 to 6.
#[derive(Debug)]
pub struct Prepared {
    /// What the runtime will receive.
    pub request: LaunchRequest,
    /// Warnings shown while resolving flags, in the order they were logged.
    pub warnings: Vec<DeprecationWarning>,
}

/// Runs the SuperNode: prepares the configuration, registers exit handlers and
/// blocks in the runtime until shutdown.
pub fn run<E, L, X, R>(
    args: SuperNodeArgs,
    collaborators: &Collaborators<E, L, X, R>,
) -> Result<(), BootstrapError>
where
    E: EventSink,
    L: ClientAppLoader,
    X: ExitHandlers,
    R: RuntimeLauncher,
{
    let Prepared { request, .. } = prepare(args, collaborators)?;

    collaborators
        .exit_handlers
        .register(EventType::RunSupernodeLeave)
        .map_err(BootstrapError::Runtime)?;

    collaborators.launcher.launch(request).map_err(BootstrapError::Runtime)
}

/// Resolves `args` into a launch request without starting anything.
pub fn prepare<E, L, X, R>(
    args: SuperNodeArgs,
    collaborators: &Collaborators<E, L, X, R>,
) -> Result<Prepared, BootstrapError>
where
    E: EventSink,
    L: ClientAppLoader,
{
    let SuperNodeArgs { app, superlink, auth, client_app } = args;
    let mut warnings = Vec::new();

    let address = resolve_superlink_address(&superlink.server, &superlink.superlink);
    warnings.extend(address.warnings);
    let superlink_address = address.address;
    warnings.iter().for_each(DeprecationWarning::log);

    info!("Starting Flower SuperNode");
    collaborators.events.emit(EventType::RunSupernodeEnter);

    let isolation = resolve_isolation(client_app.flwr_dir, client_app.isolation);
    if let Some(warning) = isolation.warning {
        warning.log();
        warnings.push(warning);
    }

    reject_app_argument(app.as_deref())?;

    let root_certificates = try_obtain_root_certificates(
        superlink.insecure,
        superlink.root_certificates.as_deref(),
        &superlink_address,
    )?;

    let client_app_source = collaborators.loader.load_fn(isolation.flwr_dir.as_deref(), true);

    let auth_keys = auth.resolve()?;

    debug!("Isolation mode: {}", isolation.isolation);

    let config = ResolvedConfig {
        superlink_address,
        transport: superlink.transport.transport(),
        insecure: superlink.insecure,
        isolation: isolation.isolation,
        max_retries: superlink.max_retries,
        max_wait_time: superlink.max_wait_time,
        node_config: parse_node_config(client_app.node_config.as_deref())?,
        flwr_dir: isolation.flwr_dir,
        auth_keys,
        clientappio_api_address: client_app.clientappio_api_address,
    };

    Ok(Prepared {
        request: LaunchRequest { config, root_certificates, client_app: client_app_source },
        warnings,
    })
}
