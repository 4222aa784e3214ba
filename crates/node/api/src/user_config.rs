//! Flat key/value configuration forwarded to the ClientApp.

use std::{collections::BTreeMap, fmt};

/// A single node configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum UserConfigValue {
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    Str(String),
}

impl fmt::Display for UserConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<bool> for UserConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for UserConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for UserConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for UserConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for UserConfigValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Node configuration keyed by flattened, dot-separated names.
pub type UserConfig = BTreeMap<String, UserConfigValue>;
