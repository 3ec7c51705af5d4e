//! Package installation with fallback.
//!
//! For each package the [`Installer`] checks whether it already imports,
//! then tries each [`InstallStrategy`] in order until one both succeeds and
//! leaves the package importable.
//!
//! # Modules
//!
//! - [`manager`] - The preferred package manager
//! - [`strategy`] - Individual install strategies (conda/mamba, pip)
//! - [`orchestrator`] - Presence check and strategy fallback for one package
//! - [`batch`] - Sequential installation of a list of packages

pub mod batch;
pub mod manager;
pub mod orchestrator;
pub mod strategy;

pub use batch::{install_all, install_from_manifest};
pub use manager::PackageManager;
pub use orchestrator::{InstallOutcome, Installer};
pub use strategy::{InstallStrategy, ManagerStrategy, PipStrategy};

use crate::python::{is_importable, PythonInterpreter};
use crate::shell::{execute_check, CommandOptions, CommandSpec};

/// Process-touching operations, injectable for tests.
pub struct InstallerContext<'a> {
    /// Run an installer command, returning true on a zero exit.
    pub run_command: Box<dyn Fn(&CommandSpec) -> bool + 'a>,
    /// Check whether a module path imports in the target interpreter.
    pub is_importable: Box<dyn Fn(&str) -> bool + 'a>,
}

/// Build the `InstallerContext` for production use.
///
/// `show_output` passes installer stdout/stderr through; otherwise it is
/// discarded. Import probes are always silent.
pub fn default_context(
    interpreter: PythonInterpreter,
    show_output: bool,
) -> InstallerContext<'static> {
    let options = CommandOptions { show_output };
    InstallerContext {
        run_command: Box::new(move |spec: &CommandSpec| execute_check(spec, &options)),
        is_importable: Box::new(move |name: &str| is_importable(&interpreter, name)),
    }
}
