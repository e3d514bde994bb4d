//! Configuration error taxonomy
//!
//! A missing config file is not an error; everything here is fatal and
//! surfaced to the user with the offending file or value named.

use std::io;

/// Error types for configuration resolution
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported {found} value for option '{key}' in {file}")]
    UnsupportedValue {
        file: String,
        key: String,
        found: &'static str,
    },

    #[error("cannot express path '{path}' (option '{key}') relative to the working directory")]
    PathRelocation { key: String, path: String },
}
