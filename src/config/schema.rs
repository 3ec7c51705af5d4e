//! Configuration file schema.
//!
//! ```yaml
//! manager: mamba
//! python: /opt/conda/envs/ml/bin/python
//! verbose: false
//! aliases:
//!   my-dist:
//!     import: my_mod
//!     name: My Package
//! ```

use crate::error::Result;
use crate::installer::PackageManager;
use crate::packages::PackageAlias;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Merged user configuration. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PyreqsConfig {
    /// Preferred package manager (`conda`, `mamba` or `pip`).
    #[serde(default)]
    pub manager: Option<String>,

    /// Interpreter for import checks and pip installs.
    #[serde(default)]
    pub python: Option<PathBuf>,

    /// Pass installer output through.
    #[serde(default)]
    pub verbose: Option<bool>,

    /// Extra distribution → import/display mappings.
    #[serde(default)]
    pub aliases: HashMap<String, PackageAlias>,
}

impl PyreqsConfig {
    /// The configured manager, validated.
    ///
    /// Returns `InvalidManager` for anything other than conda, mamba or pip.
    pub fn manager(&self) -> Result<Option<PackageManager>> {
        self.manager
            .as_deref()
            .map(str::parse::<PackageManager>)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallError;

    #[test]
    fn parses_full_config() {
        let config: PyreqsConfig = serde_yaml::from_str(
            r#"
manager: mamba
python: /opt/py/bin/python
verbose: true
aliases:
  my-dist:
    import: my_mod
    name: My Package
"#,
        )
        .unwrap();

        assert_eq!(config.manager().unwrap(), Some(PackageManager::Mamba));
        assert_eq!(config.python, Some(PathBuf::from("/opt/py/bin/python")));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.aliases["my-dist"].import, "my_mod");
        assert_eq!(config.aliases["my-dist"].name.as_deref(), Some("My Package"));
    }

    #[test]
    fn missing_fields_default() {
        let config: PyreqsConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PyreqsConfig::default());
        assert_eq!(config.manager().unwrap(), None);
    }

    #[test]
    fn invalid_manager_is_a_config_error() {
        let config: PyreqsConfig = serde_yaml::from_str("manager: brew").unwrap();
        assert!(matches!(
            config.manager(),
            Err(InstallError::InvalidManager { .. })
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: std::result::Result<PyreqsConfig, _> = serde_yaml::from_str("managr: pip");
        assert!(result.is_err());
    }
}
