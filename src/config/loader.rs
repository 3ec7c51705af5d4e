//! Configuration file discovery and loading.
//!
//! Merge order (later overrides earlier):
//! 1. User global config (`<config dir>/pyreqs/config.yml`)
//! 2. Project config (`.pyreqs.yml` in the working directory)
//!
//! An explicit `--config` path replaces discovery entirely.

use crate::config::merger::merge_configs;
use crate::config::schema::PyreqsConfig;
use crate::error::{InstallError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = ".pyreqs.yml";

/// Paths to configuration files in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config.
    pub user_global: Option<PathBuf>,

    /// Project config in the working directory.
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: Self::find_project_config(project_root),
        }
    }

    /// Use a single explicit config file.
    pub fn explicit(path: &Path) -> Self {
        Self {
            user_global: None,
            project: Some(path.to_path_buf()),
        }
    }

    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("pyreqs").join("config.yml");
        path.exists().then_some(path)
    }

    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(PROJECT_CONFIG_FILE);
        path.exists().then_some(path)
    }

    /// Returns all config paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

/// Load a config file as raw YAML (for merging).
///
/// Alias keys are lowercased here, so `Foo` in one file and `foo` in a
/// later one merge as the same entry.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(InstallError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to read config {}", path.display()))
                .into());
        }
    };

    let mut value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| InstallError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    lowercase_alias_keys(&mut value);
    Ok(value)
}

fn lowercase_alias_keys(value: &mut serde_yaml::Value) {
    let Some(aliases) = value
        .get_mut("aliases")
        .and_then(serde_yaml::Value::as_mapping_mut)
    else {
        return;
    };

    // Later spellings of the same name win, as they would across files.
    for (key, entry) in std::mem::take(aliases) {
        let key = match key {
            serde_yaml::Value::String(name) => serde_yaml::Value::String(name.to_lowercase()),
            other => other,
        };
        aliases.insert(key, entry);
    }
}

/// Check that one file's contents form a valid config on their own.
fn validate_config_value(path: &Path, value: &serde_yaml::Value) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }
    serde_yaml::from_value::<PyreqsConfig>(value.clone())
        .map(|_| ())
        .map_err(|e| InstallError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load and merge every config file in `paths`.
///
/// Each file is validated before merging so errors name the file they
/// came from. No files at all yields the default config.
pub fn load_config(paths: &ConfigPaths) -> Result<PyreqsConfig> {
    let mut values = Vec::new();
    for path in paths.all() {
        tracing::debug!("Loading config from {}", path.display());
        let value = load_config_value(path)?;
        validate_config_value(path, &value)?;
        values.push(value);
    }

    let merged = merge_configs(&values);
    serde_yaml::from_value(merged)
        .map_err(|e| anyhow::Error::new(e).context("Failed to combine config files").into())
}
