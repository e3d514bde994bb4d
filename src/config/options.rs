//! Declared option table
//!
//! Single source of truth for which options are multi-valued and which of
//! those hold filesystem paths. The CLI definition and the resolver both
//! consult this table.

/// Arity and path-handling declaration for one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Canonical underscore-spelled name
    pub name: &'static str,

    /// Value is logically a list even when a single scalar is supplied
    pub multi: bool,

    /// List elements are filesystem paths needing base-directory relocation
    pub is_path: bool,
}

/// All options with declared merge behavior. Keys not listed here pass
/// through resolution untouched.
pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec { name: "path", multi: true, is_path: true },
    OptionSpec { name: "exclude", multi: true, is_path: true },
    OptionSpec { name: "hook_module", multi: true, is_path: false },
    OptionSpec { name: "timeout", multi: false, is_path: false },
    OptionSpec { name: "fail_limit", multi: false, is_path: false },
    OptionSpec { name: "output", multi: false, is_path: false },
    OptionSpec { name: "capture_output", multi: false, is_path: false },
];

/// Options whose value is always a list.
pub fn multi_value_options() -> impl Iterator<Item = &'static OptionSpec> {
    OPTIONS.iter().filter(|spec| spec.multi)
}

/// Options whose list elements are relocated paths.
pub fn path_options() -> impl Iterator<Item = &'static OptionSpec> {
    OPTIONS.iter().filter(|spec| spec.is_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_options_are_multi_valued() {
        for spec in path_options() {
            assert!(spec.multi, "path option '{}' must be multi-valued", spec.name);
        }
    }

    #[test]
    fn test_known_multi_value_set() {
        let names: Vec<&str> = multi_value_options().map(|spec| spec.name).collect();
        assert_eq!(names, vec!["path", "exclude", "hook_module"]);
    }

    #[test]
    fn test_names_are_canonical() {
        for spec in OPTIONS {
            assert!(!spec.name.contains('-'), "'{}' is not underscore-spelled", spec.name);
        }
    }
}
