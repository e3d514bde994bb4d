//! Config file reading (`project.toml`)
//!
//! Reads the `[tool.testlane]` section of the project manifest. A missing
//! file or missing section is an empty configuration, not an error.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use super::error::ConfigError;
use super::value::{ConfigMap, ConfigValue};

/// File name resolved beneath the project root.
pub const CONFIG_FILE: &str = "project.toml";

/// Load the tool's section of the config file beneath `project_root`.
///
/// Keys are rewritten to canonical spelling via [`normalize_key`]. A file
/// that exists but cannot be read or parsed is a fatal error carrying the
/// file name and underlying cause.
pub fn read_config_toml(project_root: &Path, filename: &str) -> Result<ConfigMap, ConfigError> {
    let path = project_root.join(filename);
    if !path.is_file() {
        return Ok(ConfigMap::new());
    }

    let contents = fs::read_to_string(&path).map_err(|e: io::Error| ConfigError::Io {
        file: filename.to_string(),
        source: e,
    })?;

    let manifest: toml::Table = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        file: filename.to_string(),
        source: e,
    })?;

    let section = manifest
        .get("tool")
        .and_then(toml::Value::as_table)
        .and_then(|tool| tool.get("testlane"))
        .and_then(toml::Value::as_table);

    let mut config = ConfigMap::new();
    if let Some(section) = section {
        for (key, value) in section {
            let key = normalize_key(key);
            let value =
                ConfigValue::from_toml(value).map_err(|found| ConfigError::UnsupportedValue {
                    file: filename.to_string(),
                    key: key.clone(),
                    found,
                })?;
            config.insert(key, value);
        }
    }

    debug!(path = %path.display(), options = config.len(), "loaded config file");
    Ok(config)
}

/// Rewrite a CLI-flag-spelled key to canonical internal spelling:
/// strip a leading `--`, convert remaining `-` separators to `_`.
pub fn normalize_key(key: &str) -> String {
    key.trim_start_matches("--").replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) {
        let mut file = fs::File::create(dir.path().join(CONFIG_FILE)).unwrap();
        write!(file, "{}", contents).unwrap();
    }

    #[test]
    fn test_missing_file_is_empty_config() {
        let dir = TempDir::new().unwrap();
        let config = read_config_toml(dir.path(), CONFIG_FILE).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_missing_section_is_empty_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
            [tool.other]
            path = "src"
            "#,
        );

        let config = read_config_toml(dir.path(), CONFIG_FILE).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_reads_only_tool_section() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
            name = "demo"

            [tool.testlane]
            path = "tests"
            timeout = 60
            capture_output = true
            exclude = ["build", "dist"]
            "#,
        );

        let config = read_config_toml(dir.path(), CONFIG_FILE).unwrap();
        assert_eq!(config.get("path"), Some(&ConfigValue::Str("tests".to_string())));
        assert_eq!(config.get("timeout"), Some(&ConfigValue::Int(60)));
        assert_eq!(config.get("capture_output"), Some(&ConfigValue::Bool(true)));
        assert_eq!(
            config.get("exclude"),
            Some(&ConfigValue::List(vec!["build".to_string(), "dist".to_string()]))
        );
        assert!(!config.contains_key("name"));
    }

    #[test]
    fn test_keys_are_normalized() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
            [tool.testlane]
            "--hook-module" = "hooks"
            "fail-limit" = 3
            "#,
        );

        let config = read_config_toml(dir.path(), CONFIG_FILE).unwrap();
        assert_eq!(config.get("hook_module"), Some(&ConfigValue::Str("hooks".to_string())));
        assert_eq!(config.get("fail_limit"), Some(&ConfigValue::Int(3)));
    }

    #[test]
    fn test_malformed_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[tool.testlane\npath = ");

        let err = read_config_toml(dir.path(), CONFIG_FILE).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_unsupported_value_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
            [tool.testlane]
            timeout = 1.5
            "#,
        );

        let err = read_config_toml(dir.path(), CONFIG_FILE).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedValue { .. }));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("--hook-module"), "hook_module");
        assert_eq!(normalize_key("fail-limit"), "fail_limit");
        assert_eq!(normalize_key("path"), "path");
    }
}
