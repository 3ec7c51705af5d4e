//! Install strategies.
//!
//! Each strategy runs one installer and then re-checks the import. A zero
//! exit status alone is not trusted: conda can succeed while installing a
//! package the target interpreter cannot see.

use crate::packages::PackageInfo;
use crate::python::PythonInterpreter;
use crate::shell::CommandSpec;

use super::{InstallerContext, PackageManager};

/// A single way of installing a package.
pub trait InstallStrategy {
    /// Label used in status output (e.g. "conda", "pip").
    fn name(&self) -> &str;

    /// Command that installs the package.
    fn command(&self, package: &PackageInfo) -> CommandSpec;

    /// Install the package and confirm it imports.
    ///
    /// No retries: a failed command returns `false` immediately.
    fn install(&self, package: &PackageInfo, ctx: &InstallerContext<'_>) -> bool {
        let spec = self.command(package);
        if !(ctx.run_command)(&spec) {
            tracing::debug!("{} failed for {}", self.name(), package.distribution);
            return false;
        }
        let present = (ctx.is_importable)(&package.import_name);
        if !present {
            tracing::warn!(
                "{} reported success for {} but '{}' still does not import",
                self.name(),
                package.distribution,
                package.import_name
            );
        }
        present
    }
}

/// Install with conda or mamba.
#[derive(Debug, Clone)]
pub struct ManagerStrategy {
    manager: PackageManager,
}

impl ManagerStrategy {
    /// Create a strategy for a conda-style manager.
    ///
    /// Returns `None` for pip, which must run through the target
    /// interpreter instead (see [`PipStrategy`]).
    pub fn new(manager: PackageManager) -> Option<Self> {
        manager.is_conda_like().then_some(Self { manager })
    }
}

impl InstallStrategy for ManagerStrategy {
    fn name(&self) -> &str {
        self.manager.as_str()
    }

    fn command(&self, package: &PackageInfo) -> CommandSpec {
        CommandSpec::new(self.manager.as_str()).args([
            "install",
            "-y",
            package.distribution.as_str(),
        ])
    }
}

/// Install with the target interpreter's pip.
#[derive(Debug, Clone)]
pub struct PipStrategy {
    interpreter: PythonInterpreter,
}

impl PipStrategy {
    /// Create a pip strategy bound to `interpreter`.
    pub fn new(interpreter: PythonInterpreter) -> Self {
        Self { interpreter }
    }
}

impl InstallStrategy for PipStrategy {
    fn name(&self) -> &str {
        "pip"
    }

    fn command(&self, package: &PackageInfo) -> CommandSpec {
        self.interpreter.pip_install_command(&package.distribution)
    }
}
