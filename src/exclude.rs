//! Exclusion rules for test discovery
//!
//! Compiles the resolved `exclude` option into a glob set, on top of the
//! patterns no test run should ever descend into.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Patterns always excluded from discovery
const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    ".git/**",
    "target",
    "target/**",
    "node_modules",
    "node_modules/**",
    "**/.DS_Store",
];

/// Errors for exclusion rules
#[derive(Debug, thiserror::Error)]
pub enum ExcludeError {
    #[error("invalid exclude pattern: {0}")]
    GlobError(#[from] globset::Error),
}

/// Compiled exclusion rules for filtering discovery paths
#[derive(Debug)]
pub struct ExcludeRules {
    glob_set: GlobSet,
}

impl ExcludeRules {
    /// Compile the default exclusions only.
    pub fn new() -> Result<Self, ExcludeError> {
        Self::with_patterns::<&str>(&[])
    }

    /// Compile the default exclusions plus configured patterns.
    ///
    /// A pattern that does not compile is a user-facing configuration
    /// error naming the pattern.
    pub fn with_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ExcludeError> {
        let mut builder = GlobSetBuilder::new();

        for pattern in DEFAULT_EXCLUDES {
            builder.add(Glob::new(pattern)?);
        }
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if !pattern.is_empty() {
                builder.add(Glob::new(pattern)?);
            }
        }

        Ok(Self {
            glob_set: builder.build()?,
        })
    }

    /// Check if a discovery path is excluded.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.glob_set.is_match(path)
    }
}
