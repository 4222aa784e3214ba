//! Version information for the Flower SuperNode.

/// The version string from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The git commit SHA (set by build.rs if available).
pub const GIT_SHA: &str = {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => sha,
        None => "unknown",
    }
};

/// The build timestamp (set by build.rs if available).
pub const BUILD_TIMESTAMP: &str = {
    match option_env!("VERGEN_BUILD_TIMESTAMP") {
        Some(ts) => ts,
        None => "unknown",
    }
};

/// The cargo features (set by build.rs if available).
pub const CARGO_FEATURES: &str = {
    match option_env!("VERGEN_CARGO_FEATURES") {
        Some(f) => f,
        None => "default",
    }
};

/// The long version information, shown by `--version`.
pub static LONG_VERSION: once_cell::sync::Lazy<String> = once_cell::sync::Lazy::new(|| {
    format!(
        "{}\nCommit SHA: {}\nBuild Timestamp: {}\nBuild Features: {}",
        VERSION, GIT_SHA, BUILD_TIMESTAMP, CARGO_FEATURES
    )
});
