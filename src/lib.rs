//! Testlane - project test lane
//!
//! This crate implements the configuration-resolution layer of the
//! `testlane` CLI: effective runtime configuration is computed by merging
//! command-line arguments, the `[tool.testlane]` section of the project's
//! `project.toml`, and built-in defaults, with strict CLI-over-file
//! precedence per option.

pub mod config;
pub mod exclude;
pub mod project;

pub use config::{ConfigError, ConfigMap, ConfigValue, Invocation, Resolution};
pub use exclude::{ExcludeError, ExcludeRules};
pub use project::find_project_root;
