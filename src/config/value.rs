//! Configuration value model
//!
//! One option's value from either source (CLI or file), plus the map both
//! sources are expressed as. Keys are canonical underscore spelling.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Map from canonical option name to value. Last write wins on merge.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// A single configuration option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl ConfigValue {
    /// Convert a TOML value into a `ConfigValue`.
    ///
    /// Returns the TOML type name of the first value outside the supported
    /// union (floats, datetimes, tables, non-string array elements).
    pub fn from_toml(value: &toml::Value) -> Result<Self, &'static str> {
        match value {
            toml::Value::String(s) => Ok(ConfigValue::Str(s.clone())),
            toml::Value::Integer(i) => Ok(ConfigValue::Int(*i)),
            toml::Value::Boolean(b) => Ok(ConfigValue::Bool(*b)),
            toml::Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        toml::Value::String(s) => list.push(s.clone()),
                        other => return Err(other.type_str()),
                    }
                }
                Ok(ConfigValue::List(list))
            }
            other => Err(other.type_str()),
        }
    }

    /// Coerce into a list: identity on lists, one-element wrap on scalars.
    pub fn into_list(self) -> Vec<String> {
        match self {
            ConfigValue::List(items) => items,
            ConfigValue::Str(s) => vec![s],
            ConfigValue::Int(i) => vec![i.to_string()],
            ConfigValue::Bool(b) => vec![b.to_string()],
        }
    }

    /// Whether this value counts as "supplied" for precedence purposes.
    ///
    /// Empty lists, empty strings, `0` and `false` do not suppress a
    /// file-sourced default.
    pub fn is_truthy(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => *b,
            ConfigValue::Int(i) => *i != 0,
            ConfigValue::Str(s) => !s.is_empty(),
            ConfigValue::List(items) => !items.is_empty(),
        }
    }
}
