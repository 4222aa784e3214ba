//! Parsing of `--node-config`.
//!
//! The flag takes either a path to a TOML file or a whitespace separated list
//! of `key=value` pairs whose values are TOML literals:
//!
//! ```text
//! --node-config 'name="site a" partition-id=0 num-partitions=100 use-gpu=true'
//! ```
//!
//! Nested tables are flattened into dot-separated keys.

use crate::constants::{NODE_CONFIG_FLAG, TOML_EXTENSION};
use std::{fs, io, path::PathBuf};
use supernode_node_api::{UserConfig, UserConfigValue};
use thiserror::Error;
use tracing::warn;

/// Invalid `--node-config` input.
#[derive(Debug, Error)]
pub enum NodeConfigError {
    /// The TOML file could not be read.
    #[error("Invalid '{flag}': failed to read {}: {source}", path.display(), flag = NODE_CONFIG_FLAG)]
    Read {
        /// Path of the TOML file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The pairs or the file are not valid TOML.
    #[error("Invalid '{flag}': {0}", flag = NODE_CONFIG_FLAG)]
    Toml(#[from] toml::de::Error),

    /// A TOML file was mixed with key/value pairs.
    #[error(
        "Invalid '{flag}': TOML files cannot be passed alongside key-value pairs.",
        flag = NODE_CONFIG_FLAG
    )]
    MixedToml,

    /// A value is not a string, integer, float or boolean.
    #[error(
        "Invalid '{flag}': value of `{key}` must be a string, integer, float or boolean",
        flag = NODE_CONFIG_FLAG
    )]
    UnsupportedValue {
        /// Flattened key of the offending value.
        key: String,
    },
}

/// Parses the single `--node-config` value given on the command line.
pub fn parse_node_config(value: Option<&str>) -> Result<UserConfig, NodeConfigError> {
    match value {
        Some(value) => parse_config_args(&[value]),
        None => Ok(UserConfig::new()),
    }
}

/// Parses a list of `--node-config` values into a flat configuration.
///
/// A single entry ending in `.toml` is read as a file. Otherwise every entry
/// is a list of `key=value` pairs; later keys override earlier ones.
pub fn parse_config_args<S: AsRef<str>>(config: &[S]) -> Result<UserConfig, NodeConfigError> {
    if let [single] = config {
        let single = single.as_ref().trim();
        if single.ends_with(TOML_EXTENSION) {
            let path = PathBuf::from(single);
            let contents = fs::read_to_string(&path)
                .map_err(|source| NodeConfigError::Read { path, source })?;
            return flatten(contents.parse()?);
        }
    }

    let mut overrides = UserConfig::new();
    for line in config.iter().map(AsRef::as_ref).filter(|line| !line.is_empty()) {
        if line.trim_end().ends_with(TOML_EXTENSION) {
            return Err(NodeConfigError::MixedToml);
        }

        let toml_str = split_pairs(line)
            .into_iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect::<Vec<_>>()
            .join("\n");
        overrides.extend(flatten(toml_str.parse()?)?);
    }

    Ok(overrides)
}

/// Splits `line` into `key=value` pairs.
///
/// Keys end at the first `=`. A value starting with a quote runs to the
/// matching quote and may contain whitespace; any other value runs to the next
/// whitespace. Tokens without `=` are skipped.
fn split_pairs(line: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();

    for (start, token_end) in tokens(line) {
        let token = &line[start..token_end];
        let Some(eq) = token.find('=').filter(|&eq| eq > 0) else {
            warn!(token, "Ignoring node config entry without `key=value` form");
            continue;
        };
        let key = &token[..eq];
        let value_start = start + eq + 1;
        let value_end = quoted_end(line, value_start).unwrap_or(token_end);
        pairs.push((key, &line[value_start..value_end]));
    }

    pairs
}

/// Yields `(start, end)` byte ranges of whitespace separated tokens, keeping
/// quoted values that follow `=` in one token.
fn tokens(line: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];
        let Some(offset) = rest.find(|c: char| !c.is_whitespace()) else {
            break;
        };
        let start = pos + offset;
        let mut end = line[start..]
            .find(char::is_whitespace)
            .map_or(line.len(), |len| start + len);

        if let Some(eq) = line[start..end].find('=') {
            if let Some(quoted) = quoted_end(line, start + eq + 1) {
                end = end.max(quoted);
            }
        }

        ranges.push((start, end));
        pos = end;
    }

    ranges
}

/// End of a quoted value starting at `start`, including the closing quote.
fn quoted_end(line: &str, start: usize) -> Option<usize> {
    let quote = line[start..].chars().next().filter(|c| matches!(c, '"' | '\''))?;
    let body = start + quote.len_utf8();
    line[body..].find(quote).map(|len| body + len + quote.len_utf8())
}

fn flatten(table: toml::Table) -> Result<UserConfig, NodeConfigError> {
    let mut config = UserConfig::new();
    flatten_into(&mut config, None, table)?;
    Ok(config)
}

fn flatten_into(
    config: &mut UserConfig,
    prefix: Option<&str>,
    table: toml::Table,
) -> Result<(), NodeConfigError> {
    for (key, value) in table {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };
        let value = match value {
            toml::Value::Table(nested) => {
                flatten_into(config, Some(&key), nested)?;
                continue;
            }
            toml::Value::String(value) => UserConfigValue::Str(value),
            toml::Value::Integer(value) => UserConfigValue::Int(value),
            toml::Value::Float(value) => UserConfigValue::Float(value),
            toml::Value::Boolean(value) => UserConfigValue::Bool(value),
            toml::Value::Datetime(_) | toml::Value::Array(_) => {
                return Err(NodeConfigError::UnsupportedValue { key });
            }
        };
        config.insert(key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn test_absent_is_empty() {
        assert!(parse_node_config(None).unwrap().is_empty());
        assert!(parse_node_config(Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_scalar_pairs() {
        let config =
            parse_node_config(Some("partition-id=0 num-partitions=100 lr=0.1 gpu=true")).unwrap();
        assert_eq!(config["partition-id"], UserConfigValue::Int(0));
        assert_eq!(config["num-partitions"], UserConfigValue::Int(100));
        assert_eq!(config["lr"], UserConfigValue::Float(0.1));
        assert_eq!(config["gpu"], UserConfigValue::Bool(true));
    }

    #[test]
    fn test_quoted_values_may_contain_spaces() {
        let config = parse_node_config(Some(r#"name="site a"  other='b c' n=1"#)).unwrap();
        assert_eq!(config["name"], UserConfigValue::from("site a"));
        assert_eq!(config["other"], UserConfigValue::from("b c"));
        assert_eq!(config["n"], UserConfigValue::Int(1));
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn test_dotted_keys_are_flattened() {
        let config = parse_node_config(Some("data.root=\"/tmp\" data.shards=4")).unwrap();
        assert_eq!(config["data.root"], UserConfigValue::from("/tmp"));
        assert_eq!(config["data.shards"], UserConfigValue::Int(4));
    }

    #[test]
    fn test_tokens_without_equals_are_skipped() {
        let config = parse_node_config(Some("stray key=1")).unwrap();
        assert_eq!(config.len(), 1);
        assert_eq!(config["key"], UserConfigValue::Int(1));
    }

    #[test]
    fn test_unquoted_string_is_invalid_toml() {
        let err = parse_node_config(Some("name=alice")).unwrap_err();
        assert_matches!(err, NodeConfigError::Toml(_));
        assert!(err.to_string().contains("--node-config"));
    }

    #[test]
    fn test_arrays_are_rejected() {
        let err = parse_node_config(Some("ids=[1,2]")).unwrap_err();
        assert_matches!(err, NodeConfigError::UnsupportedValue { key } if key == "ids");
    }

    #[test]
    fn test_later_entries_override() {
        let config = parse_config_args(&["a=1 b=2", "a=3"]).unwrap();
        assert_eq!(config["a"], UserConfigValue::Int(3));
        assert_eq!(config["b"], UserConfigValue::Int(2));
    }

    #[test]
    fn test_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("node.toml");
        fs::write(&path, "partition-id = 2\n[data]\nroot = \"/srv\"\n").unwrap();

        let config = parse_node_config(path.to_str()).unwrap();
        assert_eq!(config["partition-id"], UserConfigValue::Int(2));
        assert_eq!(config["data.root"], UserConfigValue::from("/srv"));
    }

    #[test]
    fn test_missing_toml_file() {
        let err = parse_node_config(Some("/nonexistent/node.toml")).unwrap_err();
        assert_matches!(err, NodeConfigError::Read { .. });
        assert!(err.to_string().starts_with("Invalid '--node-config': failed to read"));
    }

    #[test]
    fn test_toml_file_with_pairs() {
        let err = parse_config_args(&["a=1", "node.toml"]).unwrap_err();
        assert_matches!(err, NodeConfigError::MixedToml);
        assert!(err.to_string().contains("'--node-config'"));
    }
}
