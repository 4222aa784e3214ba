//! Resolution of deprecated and overlapping flags.
//!
//! Every function here is pure: it looks at what the user typed and returns the
//! value to use together with the warnings to show. Logging the warnings is up
//! to the caller.

use crate::{
    constants::{
        FLEET_API_GRPC_RERE_DEFAULT_ADDRESS, FLWR_DIR_FLAG, ISOLATION_FLAG, SERVER_FLAG,
        SUPERLINK_FLAG,
    },
    error::UsageError,
};
use std::path::PathBuf;
use supernode_node_api::IsolationMode;
use tracing::warn;

/// A non-fatal warning about a deprecated or ignored flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationWarning {
    /// The flag the warning is about.
    pub flag: &'static str,
    /// The flag that should be used instead, or that takes precedence.
    pub replacement: &'static str,
    /// Human readable message.
    pub message: String,
}

impl DeprecationWarning {
    /// Writes the warning to the log.
    pub fn log(&self) {
        warn!(flag = self.flag, replacement = self.replacement, "{}", self.message);
    }
}

/// The SuperLink address chosen from `--server` and `--superlink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    /// Address to connect to.
    pub address: String,
    /// Zero, one or two warnings.
    pub warnings: Vec<DeprecationWarning>,
}

/// Resolves the SuperLink address from the legacy `--server` and current
/// `--superlink` flags.
///
/// Both flags default to [`FLEET_API_GRPC_RERE_DEFAULT_ADDRESS`]; a flag counts
/// as set when its value differs from that default.
///
/// - `--server` unset: `--superlink` is used as-is, no warning.
/// - `--server` set, `--superlink` unset: `--server` is used, one warning.
/// - both set: `--superlink` wins and `--server` is ignored, two warnings.
pub fn resolve_superlink_address(server: &str, superlink: &str) -> ResolvedAddress {
    if server == FLEET_API_GRPC_RERE_DEFAULT_ADDRESS {
        return ResolvedAddress { address: superlink.to_owned(), warnings: Vec::new() };
    }

    let mut warnings = vec![DeprecationWarning {
        flag: SERVER_FLAG,
        replacement: SUPERLINK_FLAG,
        message: "DEPRECATED FEATURE: Passing flag --server is deprecated. Use --superlink \
                  instead. This is a deprecated feature. It will be removed entirely in future \
                  versions of Flower."
            .to_owned(),
    }];

    if superlink == FLEET_API_GRPC_RERE_DEFAULT_ADDRESS {
        return ResolvedAddress { address: server.to_owned(), warnings };
    }

    warnings.push(DeprecationWarning {
        flag: SERVER_FLAG,
        replacement: SUPERLINK_FLAG,
        message: format!(
            "Both `--server` and `--superlink` were passed. `--server` will be ignored. \
             Connecting to the Superlink Fleet API at {superlink}."
        ),
    });

    ResolvedAddress { address: superlink.to_owned(), warnings }
}

/// The isolation mode and app-store directory after resolving their overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIsolation {
    /// Isolation mode, `subprocess` when not given.
    pub isolation: IsolationMode,
    /// App-store directory, dropped when `--isolation` was also given.
    pub flwr_dir: Option<PathBuf>,
    /// Set when `--flwr-dir` was ignored.
    pub warning: Option<DeprecationWarning>,
}

/// Resolves `--flwr-dir` against `--isolation`.
///
/// When both are supplied `--flwr-dir` is ignored with a warning.
pub fn resolve_isolation(
    flwr_dir: Option<PathBuf>,
    isolation: Option<IsolationMode>,
) -> ResolvedIsolation {
    match (flwr_dir, isolation) {
        (Some(_), Some(isolation)) => ResolvedIsolation {
            isolation,
            flwr_dir: None,
            warning: Some(DeprecationWarning {
                flag: FLWR_DIR_FLAG,
                replacement: ISOLATION_FLAG,
                message: "Both `--flwr-dir` and `--isolation` were specified. Ignoring \
                          `--flwr-dir`."
                    .to_owned(),
            }),
        },
        (flwr_dir, isolation) => {
            ResolvedIsolation { isolation: isolation.unwrap_or_default(), flwr_dir, warning: None }
        }
    }
}

/// Rejects the retired positional `app` argument.
///
/// An empty value counts as absent.
pub fn reject_app_argument(app: Option<&str>) -> Result<(), UsageError> {
    match app {
        Some(app) if !app.is_empty() => Err(UsageError::RemovedAppArgument),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    const DEFAULT: &str = FLEET_API_GRPC_RERE_DEFAULT_ADDRESS;

    #[test]
    fn test_defaults_resolve_without_warnings() {
        let resolved = resolve_superlink_address(DEFAULT, DEFAULT);
        assert_eq!(resolved.address, DEFAULT);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_superlink_alone() {
        let resolved = resolve_superlink_address(DEFAULT, "flower.example.com:9092");
        assert_eq!(resolved.address, "flower.example.com:9092");
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_server_alone_is_promoted() {
        let resolved = resolve_superlink_address("127.0.0.1:9092", DEFAULT);
        assert_eq!(resolved.address, "127.0.0.1:9092");
        assert_eq!(resolved.warnings.len(), 1);
        assert_eq!(resolved.warnings[0].flag, SERVER_FLAG);
        assert_eq!(resolved.warnings[0].replacement, SUPERLINK_FLAG);
    }

    #[test]
    fn test_superlink_wins_over_server() {
        let resolved = resolve_superlink_address("127.0.0.1:9092", "flower.example.com:9092");
        assert_eq!(resolved.address, "flower.example.com:9092");
        assert_eq!(resolved.warnings.len(), 2);
        assert!(resolved.warnings[1].message.contains("flower.example.com:9092"));
        assert!(resolved.warnings[1].message.contains("`--server` will be ignored"));
    }

    #[test]
    fn test_explicit_default_server_is_not_deprecated() {
        // Precedence compares values, not presence.
        let resolved = resolve_superlink_address(DEFAULT, "10.0.0.1:9092");
        assert_eq!(resolved.address, "10.0.0.1:9092");
        assert!(resolved.warnings.is_empty());
    }

    proptest! {
        #[test]
        fn prop_superlink_wins_when_both_set(
            a in "[a-z]{1,12}\\.example:[0-9]{2,5}",
            b in "[a-z]{1,12}\\.example:[0-9]{2,5}",
        ) {
            let resolved = resolve_superlink_address(&a, &b);
            prop_assert_eq!(resolved.address, b);
            prop_assert_eq!(resolved.warnings.len(), 2);
        }

        #[test]
        fn prop_server_promoted_when_superlink_default(a in "[a-z]{1,12}\\.example:[0-9]{2,5}") {
            let resolved = resolve_superlink_address(&a, DEFAULT);
            prop_assert_eq!(resolved.address, a);
            prop_assert_eq!(resolved.warnings.len(), 1);
        }
    }

    #[test]
    fn test_flwr_dir_ignored_with_isolation() {
        let resolved =
            resolve_isolation(Some(PathBuf::from("/data")), Some(IsolationMode::Process));
        assert_eq!(resolved.isolation, IsolationMode::Process);
        assert!(resolved.flwr_dir.is_none());
        let warning = resolved.warning.unwrap();
        assert_eq!(warning.flag, FLWR_DIR_FLAG);
        assert_eq!(warning.replacement, ISOLATION_FLAG);
    }

    #[test]
    fn test_flwr_dir_kept_without_isolation() {
        let resolved = resolve_isolation(Some(PathBuf::from("/data")), None);
        assert_eq!(resolved.isolation, IsolationMode::Subprocess);
        assert_eq!(resolved.flwr_dir, Some(PathBuf::from("/data")));
        assert!(resolved.warning.is_none());
    }

    #[test]
    fn test_isolation_without_flwr_dir() {
        let resolved = resolve_isolation(None, Some(IsolationMode::Process));
        assert_eq!(resolved.isolation, IsolationMode::Process);
        assert!(resolved.warning.is_none());
    }

    #[test]
    fn test_reject_app_argument() {
        assert!(reject_app_argument(None).is_ok());
        assert!(reject_app_argument(Some("")).is_ok());
        assert_matches!(reject_app_argument(Some("./app")), Err(UsageError::RemovedAppArgument));
    }
}
