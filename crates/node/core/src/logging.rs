//! Logging configuration for the Flower SuperNode.

use crate::args::LogArgs;
use eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

/// Initialize logging based on command line arguments.
///
/// The filter is built with the following precedence:
/// 1. If `--quiet` is set, only errors are shown
/// 2. Otherwise, start with `RUST_LOG` env var if set, or default to info level
/// 3. Apply verbosity flags (-v, -vv, etc.) to increase log level
/// 4. Apply any custom filter from `--log.filter`
pub fn init_logging(args: &LogArgs) -> Result<()> {
    let filter = build_filter(args);

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let installed = if args.json { builder.json().try_init() } else { builder.try_init() };

    installed.map_err(|err| eyre!("failed to install tracing subscriber: {err}"))
}

fn build_filter(args: &LogArgs) -> EnvFilter {
    if args.quiet {
        return EnvFilter::new("error");
    }

    let base_level = match args.verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // RUST_LOG takes precedence over the verbosity-derived level
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(base_level));

    if let Some(custom_filter) = &args.filter {
        for directive in custom_filter.split(',') {
            if let Ok(d) = directive.parse() {
                filter = filter.add_directive(d);
            }
        }
    }

    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_only_shows_errors() {
        let args = LogArgs { quiet: true, verbosity: 3, ..Default::default() };
        assert_eq!(build_filter(&args).to_string().to_lowercase(), "error");
    }

    #[test]
    fn test_custom_directives_are_added() {
        let args = LogArgs {
            filter: Some("supernode=trace,not a directive".into()),
            ..Default::default()
        };
        assert!(build_filter(&args).to_string().to_lowercase().contains("supernode=trace"));
    }
}
