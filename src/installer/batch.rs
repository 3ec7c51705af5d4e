//! Sequential installation of many packages.
//!
//! Packages are handled one at a time in the given order. A failure is
//! reported by the orchestrator and the batch moves on; nothing is
//! aggregated.

use crate::error::Result;
use crate::manifest::read_manifest;
use crate::ui::UserInterface;
use std::path::Path;

use super::{Installer, InstallerContext};

/// Install every package in `names`, in order.
pub fn install_all<S: AsRef<str>>(
    names: &[S],
    installer: &Installer,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
) {
    for name in names {
        let outcome = installer.install_package(name.as_ref(), ui, ctx);
        tracing::debug!("{}: {:?}", name.as_ref(), outcome);
    }
}

/// Read a manifest and install every package it lists.
///
/// Only an unreadable manifest is an error; per-package failures are not.
pub fn install_from_manifest(
    path: &Path,
    installer: &Installer,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
) -> Result<()> {
    let names = read_manifest(path)?;
    if names.is_empty() {
        tracing::info!("No packages listed in {}", path.display());
    }
    install_all(&names, installer, ui, ctx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallError;
    use crate::installer::PackageManager;
    use crate::packages::PackageResolver;
    use crate::python::PythonInterpreter;
    use crate::shell::CommandSpec;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    fn installer() -> Installer {
        Installer::new(
            PackageManager::Conda,
            PythonInterpreter::new("/env/bin/python"),
            PackageResolver::new(),
        )
    }

    #[test]
    fn visits_every_name_in_order() {
        let probed = RefCell::new(Vec::new());
        let ctx = InstallerContext {
            run_command: Box::new(|_: &CommandSpec| false),
            is_importable: Box::new(|name: &str| {
                probed.borrow_mut().push(name.to_string());
                true
            }),
        };
        let mut ui = MockUI::new();

        install_all(&["pandas", "pyyaml", "pandas"], &installer(), &mut ui, &ctx);

        assert_eq!(*probed.borrow(), vec!["pandas", "yaml", "pandas"]);
        assert_eq!(ui.successes().len(), 3);
    }

    #[test]
    fn failure_does_not_stop_the_batch() {
        let commands = RefCell::new(Vec::new());
        let ctx = InstallerContext {
            run_command: Box::new(|spec: &CommandSpec| {
                commands.borrow_mut().push(spec.to_string());
                false
            }),
            is_importable: Box::new(|name: &str| name == "seaborn"),
        };
        let mut ui = MockUI::new();

        install_all(&["broken-a", "seaborn", "broken-b"], &installer(), &mut ui, &ctx);

        // Two strategies for each broken package, none for seaborn
        assert_eq!(commands.borrow().len(), 4);
        assert!(ui.has_success("Seaborn is already installed."));
        assert!(ui.has_error("broken-a"));
        assert!(ui.has_error("broken-b"));
    }

    #[test]
    fn empty_list_does_nothing() {
        let ctx = InstallerContext {
            run_command: Box::new(|_: &CommandSpec| -> bool { panic!("no commands expected") }),
            is_importable: Box::new(|_: &str| -> bool { panic!("no probes expected") }),
        };
        let mut ui = MockUI::new();

        let names: Vec<String> = Vec::new();
        install_all(&names, &installer(), &mut ui, &ctx);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn install_from_manifest_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        fs::write(&path, "numpy>=1.20\n# comment\n\nrequests\n").unwrap();

        let probed = RefCell::new(Vec::new());
        let ctx = InstallerContext {
            run_command: Box::new(|_: &CommandSpec| false),
            is_importable: Box::new(|name: &str| {
                probed.borrow_mut().push(name.to_string());
                true
            }),
        };
        let mut ui = MockUI::new();

        install_from_manifest(&path, &installer(), &mut ui, &ctx).unwrap();
        assert_eq!(*probed.borrow(), vec!["numpy", "requests"]);
    }

    #[test]
    fn install_from_missing_manifest_errors() {
        let temp = TempDir::new().unwrap();
        let ctx = InstallerContext {
            run_command: Box::new(|_: &CommandSpec| false),
            is_importable: Box::new(|_: &str| false),
        };
        let mut ui = MockUI::new();

        let path = temp.path().join("missing.txt");
        let err = install_from_manifest(&path, &installer(), &mut ui, &ctx).unwrap_err();
        assert!(matches!(err, InstallError::ManifestRead { .. }));
    }
}
