//! CLI-over-file precedence for multi-valued options
//!
//! Precedence is all-or-nothing per key: a supplied CLI value suppresses the
//! file value entirely, never merges with it.

use super::options;
use super::value::{ConfigMap, ConfigValue};

/// Compute the multi-valued options that should be defaulted from the file
/// because the CLI did not supply them.
///
/// The result holds only keys that needed file-derived defaulting, each
/// coerced to a list. Callers merge it over the file config, where it
/// replaces the raw (possibly scalar) file value.
pub fn file_only_defaults(file_config: &ConfigMap, cli_config: &ConfigMap) -> ConfigMap {
    let mut defaults = ConfigMap::new();

    for spec in options::multi_value_options() {
        let from_cli = cli_config.get(spec.name);
        let cli_supplied = from_cli.is_some_and(ConfigValue::is_truthy);

        if let Some(from_file) = file_config.get(spec.name) {
            if from_file.is_truthy() && !cli_supplied {
                defaults.insert(
                    spec.name.to_string(),
                    ConfigValue::List(from_file.clone().into_list()),
                );
            }
        }
    }

    defaults
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, ConfigValue)]) -> ConfigMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_file_value_wins_when_cli_absent() {
        let file = map(&[("exclude", ConfigValue::List(vec!["build/".to_string()]))]);
        let cli = ConfigMap::new();

        let defaults = file_only_defaults(&file, &cli);
        assert_eq!(
            defaults.get("exclude"),
            Some(&ConfigValue::List(vec!["build/".to_string()]))
        );
    }

    #[test]
    fn test_empty_cli_value_counts_as_absent() {
        let file = map(&[("exclude", ConfigValue::List(vec!["build/".to_string()]))]);
        let cli = map(&[("exclude", ConfigValue::List(Vec::new()))]);

        let defaults = file_only_defaults(&file, &cli);
        assert_eq!(
            defaults.get("exclude"),
            Some(&ConfigValue::List(vec!["build/".to_string()]))
        );
    }

    #[test]
    fn test_cli_value_suppresses_file_value_entirely() {
        let file = map(&[("exclude", ConfigValue::List(vec!["build/".to_string()]))]);
        let cli = map(&[("exclude", ConfigValue::List(vec!["dist/".to_string()]))]);

        let defaults = file_only_defaults(&file, &cli);
        assert!(defaults.is_empty());
    }

    #[test]
    fn test_scalar_file_value_is_coerced_to_list() {
        let file = map(&[
            ("path", ConfigValue::Str("tests".to_string())),
            ("hook_module", ConfigValue::Str("hooks".to_string())),
        ]);
        let cli = ConfigMap::new();

        let defaults = file_only_defaults(&file, &cli);
        assert_eq!(
            defaults.get("path"),
            Some(&ConfigValue::List(vec!["tests".to_string()]))
        );
        assert_eq!(
            defaults.get("hook_module"),
            Some(&ConfigValue::List(vec!["hooks".to_string()]))
        );
    }

    #[test]
    fn test_path_absent_from_file_yields_no_entry() {
        let file = ConfigMap::new();
        let cli = ConfigMap::new();

        let defaults = file_only_defaults(&file, &cli);
        assert!(defaults.is_empty());
    }

    #[test]
    fn test_cli_paths_suppress_file_paths() {
        let file = map(&[("path", ConfigValue::Str("tests".to_string()))]);
        let cli = map(&[("path", ConfigValue::List(vec!["integration".to_string()]))]);

        let defaults = file_only_defaults(&file, &cli);
        assert!(!defaults.contains_key("path"));
    }

    #[test]
    fn test_scalar_options_are_not_touched() {
        let file = map(&[("timeout", ConfigValue::Int(60))]);
        let cli = ConfigMap::new();

        let defaults = file_only_defaults(&file, &cli);
        assert!(defaults.is_empty());
    }
}
