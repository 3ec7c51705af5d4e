//! The install command.
//!
//! Settings are layered as defaults < config files < command line.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::{load_config, ConfigPaths, PyreqsConfig};
use crate::error::Result;
use crate::installer::{default_context, install_all, Installer, PackageManager};
use crate::manifest::read_manifest;
use crate::packages::{PackageAlias, PackageResolver};
use crate::python::PythonInterpreter;
use crate::ui::{OutputMode, UserInterface};

use super::Cli;

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Manager tried first.
    pub manager: PackageManager,
    /// Explicit interpreter, if any.
    pub python: Option<PathBuf>,
    /// Verbosity for both status lines and installer output.
    pub output_mode: OutputMode,
    /// Configured name overrides.
    pub aliases: HashMap<String, PackageAlias>,
}

impl Settings {
    /// Combine command-line flags with loaded config.
    ///
    /// An invalid `manager:` in config is an error even when `--manager`
    /// is given, so a broken config never goes unnoticed. `--quiet` wins
    /// over any verbose setting.
    pub fn resolve(cli: &Cli, config: &PyreqsConfig) -> Result<Self> {
        let configured = config.manager()?;
        let output_mode = match cli.output_mode() {
            OutputMode::Normal if config.verbose.unwrap_or(false) => OutputMode::Verbose,
            mode => mode,
        };

        Ok(Self {
            manager: cli.manager.or(configured).unwrap_or_default(),
            python: cli.python.clone().or_else(|| config.python.clone()),
            output_mode,
            aliases: config.aliases.clone(),
        })
    }

    /// Load config for `project_root` (or `--config`) and resolve settings.
    pub fn load(cli: &Cli, project_root: &Path) -> Result<Self> {
        let config = load_settings_config(cli, project_root)?;
        Self::resolve(cli, &config)
    }

    /// Whether installer stdout/stderr are passed through.
    pub fn show_output(&self) -> bool {
        self.output_mode.shows_command_output()
    }
}

/// Load configuration for the current directory or an explicit file.
pub fn load_settings_config(cli: &Cli, project_root: &Path) -> Result<PyreqsConfig> {
    let paths = match &cli.config {
        Some(path) => ConfigPaths::explicit(path),
        None => ConfigPaths::discover(project_root),
    };
    load_config(&paths)
}

/// Install everything listed in the manifest named on the command line.
///
/// `ui` should have been created for `settings.output_mode`. Per-package
/// failures are reported through `ui` and do not make this return an error.
pub fn run(cli: &Cli, settings: &Settings, ui: &mut dyn UserInterface) -> Result<()> {
    tracing::debug!("Settings: {:?}", settings);

    let names = read_manifest(&cli.file)?;
    if names.is_empty() {
        ui.message(&format!("No packages listed in {}.", cli.file.display()));
        return Ok(());
    }

    let interpreter = PythonInterpreter::locate(settings.python.as_deref())?;
    let resolver = PackageResolver::with_aliases(settings.aliases.clone());
    tracing::debug!(
        "Using {} with {} alias(es), interpreter {}",
        settings.manager,
        resolver.alias_count(),
        interpreter.path().display()
    );

    let installer = Installer::new(settings.manager, interpreter.clone(), resolver);
    let ctx = default_context(interpreter, settings.show_output());
    install_all(&names, &installer, ui, &ctx);
    Ok(())
}
