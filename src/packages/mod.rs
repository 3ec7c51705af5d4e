//! Package name resolution.
//!
//! A package has three names: the distribution name installers understand,
//! the import name used to verify it, and a display name for status output.
//! [`resolve`] maps a distribution name to all three using the built-in
//! table; [`PackageResolver`] layers user-configured aliases on top.
//!
//! # Example
//!
//! ```
//! use pyreqs::packages::resolve;
//!
//! let info = resolve("beautifulsoup4");
//! assert_eq!(info.import_name, "bs4");
//! assert_eq!(info.display_name, "Beautiful Soup");
//!
//! let unknown = resolve("tqdm");
//! assert_eq!(unknown.import_name, "tqdm");
//! ```

pub mod mapping;

pub use mapping::{lookup, PackageMapping, PACKAGE_MAPPINGS};

use serde::Deserialize;
use std::collections::HashMap;

/// Resolved names for a single package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    /// Name passed to installers, as given by the caller.
    pub distribution: String,
    /// Module path probed after install.
    pub import_name: String,
    /// Human-friendly label.
    pub display_name: String,
}

impl PackageInfo {
    /// Identity mapping: every name is the distribution name.
    pub fn identity(distribution: &str) -> Self {
        Self {
            distribution: distribution.to_string(),
            import_name: distribution.to_string(),
            display_name: distribution.to_string(),
        }
    }

    /// The portion of the import name before the first `.`.
    pub fn top_level_module(&self) -> &str {
        top_level_module(&self.import_name)
    }
}

/// A user-configured mapping for a distribution name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageAlias {
    /// Module path to probe.
    pub import: String,
    /// Display name; defaults to the distribution name.
    #[serde(default)]
    pub name: Option<String>,
}

/// The portion of a module path before the first `.`.
pub fn top_level_module(import_name: &str) -> &str {
    import_name.split('.').next().unwrap_or(import_name)
}

/// Resolve a distribution name against the built-in table.
///
/// Falls back to the identity mapping for names not in the table.
pub fn resolve(distribution: &str) -> PackageInfo {
    match lookup(distribution) {
        Some(m) => PackageInfo {
            distribution: distribution.to_string(),
            import_name: m.import_name.to_string(),
            display_name: m.display_name.to_string(),
        },
        None => PackageInfo::identity(distribution),
    }
}

/// Resolver combining configured aliases with the built-in table.
///
/// Aliases are keyed by lowercase distribution name and win over the
/// built-in table.
#[derive(Debug, Clone, Default)]
pub struct PackageResolver {
    aliases: HashMap<String, PackageAlias>,
}

impl PackageResolver {
    /// Create a resolver with no aliases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from configured aliases.
    pub fn with_aliases(aliases: HashMap<String, PackageAlias>) -> Self {
        let aliases = aliases
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self { aliases }
    }

    /// Number of configured aliases.
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Resolve a distribution name.
    pub fn resolve(&self, distribution: &str) -> PackageInfo {
        if let Some(alias) = self.aliases.get(&distribution.to_lowercase()) {
            return PackageInfo {
                distribution: distribution.to_string(),
                import_name: alias.import.clone(),
                display_name: alias
                    .name
                    .clone()
                    .unwrap_or_else(|| distribution.to_string()),
            };
        }
        resolve(distribution)
    }
}
