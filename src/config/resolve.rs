//! Resolution pipeline and invocation context
//!
//! `resolve_defaults` is a pure function of (CLI config, cwd, filesystem):
//! it locates the project root, reads the config file, computes file-only
//! defaults for multi-valued options, relocates path options, and returns
//! the default map as a value. `Invocation` owns the per-invocation state
//! the argument parser consults; a fresh one is required per resolution
//! round, so defaults never leak between rounds in a long-lived process.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::ConfigError;
use super::precedence::file_only_defaults;
use super::reader::{read_config_toml, CONFIG_FILE};
use super::relocate::relocate_paths;
use super::value::{ConfigMap, ConfigValue};
use crate::project::find_project_root;

/// Outcome of one resolution pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// File-derived defaults, keyed by canonical option name
    pub defaults: ConfigMap,

    /// Absolute path of the config file, when a non-empty one was used
    pub config_path: Option<PathBuf>,

    /// Project root the file-sourced paths were interpreted against
    pub project_root: PathBuf,
}

/// Run the resolution pipeline once.
///
/// Search paths are the CLI-supplied paths when any were given, else `"."`;
/// relative candidates are interpreted against `cwd`. Errors from reading
/// or relocating propagate unchanged.
pub fn resolve_defaults(cli_config: &ConfigMap, cwd: &Path) -> Result<Resolution, ConfigError> {
    let search_paths: Vec<PathBuf> = match cli_config.get("path") {
        Some(paths) if paths.is_truthy() => {
            paths.clone().into_list().into_iter().map(PathBuf::from).collect()
        }
        _ => vec![PathBuf::from(".")],
    };

    let candidates: Vec<PathBuf> = search_paths
        .iter()
        .map(|path| if path.is_absolute() { path.clone() } else { cwd.join(path) })
        .collect();
    let project_root = find_project_root(&candidates);
    debug!(root = %project_root.display(), "located project root");

    let mut file_config = read_config_toml(&project_root, CONFIG_FILE)?;
    let config_path = (!file_config.is_empty()).then(|| project_root.join(CONFIG_FILE));

    let multi_defaults = file_only_defaults(&file_config, cli_config);
    file_config.extend(multi_defaults);

    relocate_paths(&mut file_config, &project_root, cwd)?;

    Ok(Resolution {
        defaults: file_config,
        config_path,
        project_root,
    })
}

/// Per-invocation argument-resolution context.
///
/// Holds the CLI-sourced parameters and the default map the parser falls
/// back to for options with no CLI value.
#[derive(Debug, Default)]
pub struct Invocation {
    params: ConfigMap,
    default_map: ConfigMap,
    config_path: Option<PathBuf>,
}

impl Invocation {
    /// Create a context from the CLI-sourced parameters, with an empty
    /// default map.
    pub fn new(params: ConfigMap) -> Self {
        Self {
            params,
            default_map: ConfigMap::new(),
            config_path: None,
        }
    }

    /// Resolve file-derived defaults and merge them into the default map
    /// (overwrite semantics). Returns the config file path used, if any.
    ///
    /// A failure mid-pipeline leaves the default map unreliable; callers
    /// must abort the invocation.
    pub fn apply_config_defaults(&mut self, cwd: &Path) -> Result<Option<PathBuf>, ConfigError> {
        let resolution = resolve_defaults(&self.params, cwd)?;
        self.default_map.extend(resolution.defaults);
        self.config_path = resolution.config_path.clone();
        Ok(resolution.config_path)
    }

    /// The effective value for `key`: the CLI value when one was supplied,
    /// else the default-map entry.
    pub fn value(&self, key: &str) -> Option<&ConfigValue> {
        match self.params.get(key) {
            Some(value) if value.is_truthy() => Some(value),
            _ => self.default_map.get(key),
        }
    }

    /// Effective view over every key present in either source.
    pub fn effective(&self) -> ConfigMap {
        self.params
            .keys()
            .chain(self.default_map.keys())
            .filter_map(|key| self.value(key).map(|value| (key.clone(), value.clone())))
            .collect()
    }

    pub fn params(&self) -> &ConfigMap {
        &self.params
    }

    pub fn default_map(&self) -> &ConfigMap {
        &self.default_map
    }

    /// Config file discovered by the last `apply_config_defaults` call.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
