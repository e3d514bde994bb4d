//! Project root location
//!
//! The project root anchors config-file discovery and the interpretation of
//! file-relative paths. It is the nearest common ancestor of the candidate
//! search paths that contains `project.toml` or a `.git` entry; when no
//! ancestor qualifies, the filesystem root.

use std::path::{Component, Path, PathBuf};

use crate::config::CONFIG_FILE;

/// Locate the project root for a set of absolute candidate paths.
///
/// Deterministic and read-only. File candidates count as their parent
/// directory. An empty candidate set resolves to the filesystem root.
pub fn find_project_root(candidates: &[PathBuf]) -> PathBuf {
    let dirs: Vec<PathBuf> = candidates
        .iter()
        .map(|candidate| {
            let candidate = normalize(candidate);
            if candidate.is_file() {
                candidate.parent().map(Path::to_path_buf).unwrap_or(candidate)
            } else {
                candidate
            }
        })
        .collect();

    let Some((first, rest)) = dirs.split_first() else {
        return PathBuf::from("/");
    };

    let mut common = first.clone();
    for dir in rest {
        while !dir.starts_with(&common) {
            if !common.pop() {
                break;
            }
        }
    }

    for ancestor in common.ancestors() {
        if ancestor.join(".git").exists() || ancestor.join(CONFIG_FILE).is_file() {
            return ancestor.to_path_buf();
        }
    }

    common
        .ancestors()
        .last()
        .map(Path::to_path_buf)
        .unwrap_or(common)
}

/// Lexically drop `.` components and resolve `..` against the prefix.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
