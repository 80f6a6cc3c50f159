//! Call-site manifest
//!
//! Describes every wrapper in the fixture: where it lives, how it imports its
//! helper, and which module that helper is declared to come from. Consumers use
//! this to check their own resolution against what the compiler resolved.

use std::fmt;

use clap::ValueEnum;

/// How a wrapper reaches its helper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum ImportStyle {
    /// `use crate::util_a;` then `util_a::helper()`
    Namespace,
    /// `use crate::util_a::helper as helper_a;` then `helper_a()`
    NamedAlias,
    /// `use crate::pkg_a::util as util_a;` then `util_a::helper()`
    ModuleAlias,
}

impl ImportStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportStyle::Namespace => "namespace",
            ImportStyle::NamedAlias => "named_alias",
            ImportStyle::ModuleAlias => "module_alias",
        }
    }
}

impl fmt::Display for ImportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One wrapper and the helper it resolves to
#[derive(Debug, Clone, Copy)]
pub struct CallSite {
    /// Wrapper function name
    pub caller: &'static str,
    /// Module containing the wrapper (`app`, `module_app`)
    pub caller_path: &'static str,
    /// Import style used to reach the helper
    pub style: ImportStyle,
    /// Module path the helper is declared in
    pub callee_module: &'static str,
    /// The wrapper itself
    pub invoke: fn() -> i64,
    /// The helper the wrapper should delegate to
    pub helper: fn() -> i64,
}

impl CallSite {
    /// `caller_path::caller`, e.g. `app::run_alias_a`
    pub fn qualified_caller(&self) -> String {
        format!("{}::{}", self.caller_path, self.caller)
    }
}

/// All call sites, `app` first, each group in declaration order.
pub fn call_sites() -> Vec<CallSite> {
    use crate::{app, module_app, pkg_a, pkg_b, util_a, util_b};

    vec![
        CallSite {
            caller: "run_namespace_a",
            caller_path: "app",
            style: ImportStyle::Namespace,
            callee_module: "util_a",
            invoke: app::run_namespace_a,
            helper: util_a::helper,
        },
        CallSite {
            caller: "run_namespace_b",
            caller_path: "app",
            style: ImportStyle::Namespace,
            callee_module: "util_b",
            invoke: app::run_namespace_b,
            helper: util_b::helper,
        },
        CallSite {
            caller: "run_alias_a",
            caller_path: "app",
            style: ImportStyle::NamedAlias,
            callee_module: "util_a",
            invoke: app::run_alias_a,
            helper: util_a::helper,
        },
        CallSite {
            caller: "run_alias_b",
            caller_path: "app",
            style: ImportStyle::NamedAlias,
            callee_module: "util_b",
            invoke: app::run_alias_b,
            helper: util_b::helper,
        },
        CallSite {
            caller: "run_module_a",
            caller_path: "module_app",
            style: ImportStyle::ModuleAlias,
            callee_module: "pkg_a::util",
            invoke: module_app::run_module_a,
            helper: pkg_a::util::helper,
        },
        CallSite {
            caller: "run_module_b",
            caller_path: "module_app",
            style: ImportStyle::ModuleAlias,
            callee_module: "pkg_b::util",
            invoke: module_app::run_module_b,
            helper: pkg_b::util::helper,
        },
        CallSite {
            caller: "run_alias_a",
            caller_path: "module_app",
            style: ImportStyle::NamedAlias,
            callee_module: "pkg_a::util",
            invoke: module_app::run_alias_a,
            helper: pkg_a::util::helper,
        },
        CallSite {
            caller: "run_alias_b",
            caller_path: "module_app",
            style: ImportStyle::NamedAlias,
            callee_module: "pkg_b::util",
            invoke: module_app::run_alias_b,
            helper: pkg_b::util::helper,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_call_sites_cover_every_wrapper_once() {
        let sites = call_sites();
        assert_eq!(sites.len(), 8);

        let names: HashSet<String> = sites.iter().map(|s| s.qualified_caller()).collect();
        assert_eq!(names.len(), 8);
        assert!(names.contains("app::run_namespace_a"));
        assert!(names.contains("module_app::run_alias_b"));
    }

    #[test]
    fn test_every_site_delegates_to_its_helper() {
        for site in call_sites() {
            assert_eq!(
                (site.invoke)(),
                (site.helper)(),
                "{} should return its helper's value",
                site.qualified_caller()
            );
        }
    }

    #[test]
    fn test_import_style_display() {
        assert_eq!(ImportStyle::Namespace.to_string(), "namespace");
        assert_eq!(ImportStyle::NamedAlias.to_string(), "named_alias");
        assert_eq!(ImportStyle::ModuleAlias.to_string(), "module_alias");
    }

    #[test]
    fn test_import_style_parses_cli_names() {
        assert_eq!(
            ImportStyle::from_str("named_alias", false),
            Ok(ImportStyle::NamedAlias)
        );
        assert!(ImportStyle::from_str("named-alias", false).is_err());
    }
}
