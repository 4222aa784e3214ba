//! Flower directory management.

use crate::constants::{
    APPS_DIR_NAME, FLWR_DIR_FLAG, FLWR_DIR_NAME, FLWR_HOME_ENV, XDG_DATA_HOME_ENV,
};
use directories::BaseDirs;
use std::{
    env::{self, VarError},
    ffi::OsString,
    path::{Path, PathBuf},
};
use tracing::warn;

/// Returns the Flower home directory.
///
/// Resolution order:
///
/// 1. `explicit`, with `~` and `$VAR` expanded and made absolute
/// 2. `$FLWR_HOME`
/// 3. `$XDG_DATA_HOME/.flwr`
/// 4. `$HOME/.flwr`
pub fn flwr_dir(explicit: Option<&Path>) -> PathBuf {
    flwr_dir_with(explicit, |name| env::var_os(name), home_dir())
}

/// Returns the directory holding installed Flower Apps below `flwr_dir`.
pub fn apps_dir(flwr_dir: &Path) -> PathBuf {
    flwr_dir.join(APPS_DIR_NAME)
}

fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

fn flwr_dir_with(
    explicit: Option<&Path>,
    var: impl Fn(&str) -> Option<OsString>,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = explicit {
        return absolute(&expand(path, &var, home.as_deref()));
    }

    let non_empty = |name: &str| var(name).filter(|value| !value.is_empty());

    if let Some(home) = non_empty(FLWR_HOME_ENV) {
        return PathBuf::from(home);
    }
    if let Some(data_home) = non_empty(XDG_DATA_HOME_ENV) {
        return PathBuf::from(data_home).join(FLWR_DIR_NAME);
    }
    home.unwrap_or_else(|| PathBuf::from(".")).join(FLWR_DIR_NAME)
}

/// Expands `~` and environment variables in `path`.
///
/// An unset or non-UTF-8 variable leaves the path unexpanded.
fn expand(path: &Path, var: &impl Fn(&str) -> Option<OsString>, home: Option<&Path>) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };

    let lookup = |name: &str| match var(name) {
        Some(value) => value.into_string().map(Some).map_err(VarError::NotUnicode),
        None => Err(VarError::NotPresent),
    };

    match shellexpand::full_with_context(raw, || home.and_then(Path::to_str), lookup) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(err) => {
            warn!(path = raw, "Could not expand {FLWR_DIR_FLAG}: {err}");
            path.to_path_buf()
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
