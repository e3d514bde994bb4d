//! Path relocation for file-sourced path options
//!
//! A path written in the config file is relative to the file's directory
//! (the project root); a path given on the CLI is relative to the invoking
//! shell's working directory. File-sourced paths are rewritten onto the
//! cwd-relative convention so both are uniformly consumable downstream.
//! Must be applied exactly once per resolution.

use std::path::{Component, Path, PathBuf};

use super::error::ConfigError;
use super::options;
use super::value::{ConfigMap, ConfigValue};

/// Rewrite every path-valued option in `file_config` from root-relative to
/// cwd-relative, preserving element order. Does not touch the filesystem.
pub fn relocate_paths(
    file_config: &mut ConfigMap,
    project_root: &Path,
    cwd: &Path,
) -> Result<(), ConfigError> {
    for spec in options::path_options() {
        let Some(value) = file_config.get(spec.name) else {
            continue;
        };

        let mut relocated = Vec::new();
        for raw in value.clone().into_list() {
            let absolute = project_root.join(&raw);
            let relative =
                relative_from(&absolute, cwd).ok_or_else(|| ConfigError::PathRelocation {
                    key: spec.name.to_string(),
                    path: raw.clone(),
                })?;
            relocated.push(relative.to_string_lossy().into_owned());
        }

        file_config.insert(spec.name.to_string(), ConfigValue::List(relocated));
    }

    Ok(())
}

/// Express `path` relative to `base`, walking up with `..` where needed.
///
/// Both inputs must be absolute. Returns `None` when the two share no
/// common prefix (cross-drive on Windows) or when `base` itself contains
/// unresolved `..` components.
fn relative_from(path: &Path, base: &Path) -> Option<PathBuf> {
    let path_components: Vec<Component> = path.components().collect();
    let base_components: Vec<Component> = base.components().collect();

    let mut shared = 0;
    while shared < path_components.len()
        && shared < base_components.len()
        && path_components[shared] == base_components[shared]
    {
        shared += 1;
    }
    if shared == 0 {
        return None;
    }

    let mut result = PathBuf::new();
    for component in &base_components[shared..] {
        match component {
            Component::Normal(_) => result.push(".."),
            Component::CurDir => {}
            _ => return None,
        }
    }
    for component in &path_components[shared..] {
        result.push(component.as_os_str());
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    }
    Some(result)
}
