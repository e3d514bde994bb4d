//! Configuration resolution
//!
//! Merges three sources with per-key CLI-over-file precedence:
//! 1. Explicit command-line arguments
//! 2. The `[tool.testlane]` section of the project's `project.toml`
//! 3. Built-in defaults owned by the argument parser
//!
//! File-sourced paths are relative to the config file's directory; they are
//! rewritten onto the cwd-relative convention CLI paths already use.

mod error;
mod options;
mod precedence;
mod reader;
mod relocate;
mod resolve;
mod value;

pub use error::ConfigError;
pub use options::{multi_value_options, path_options, OptionSpec, OPTIONS};
pub use precedence::file_only_defaults;
pub use reader::{normalize_key, read_config_toml, CONFIG_FILE};
pub use relocate::relocate_paths;
pub use resolve::{resolve_defaults, Invocation, Resolution};
pub use value::{ConfigMap, ConfigValue};
