//! Presence check and strategy fallback for a single package.
//!
//! ```text
//! CHECK_PRESENT ──present──▶ DONE(true)
//!      │ absent
//!      ▼
//! strategy[0] ──ok──▶ DONE(true)
//!      │ failed
//!      ▼
//! strategy[1] ──ok──▶ DONE(true)
//!      │ failed
//!      ▼
//! DONE(false)
//! ```

use crate::error::Result;
use crate::packages::{PackageInfo, PackageResolver};
use crate::python::PythonInterpreter;
use crate::ui::UserInterface;

use super::{InstallStrategy, InstallerContext, ManagerStrategy, PackageManager, PipStrategy};

/// How a single package ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Imported before anything was run.
    AlreadyInstalled,
    /// Installed and verified by the named strategy.
    Installed { via: String },
    /// Every strategy failed.
    Failed,
}

impl InstallOutcome {
    /// Whether the package is importable afterwards.
    pub fn succeeded(&self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Installs packages using an ordered list of strategies.
pub struct Installer {
    manager: PackageManager,
    resolver: PackageResolver,
    strategies: Vec<Box<dyn InstallStrategy>>,
}

impl Installer {
    /// Create an installer preferring `manager`, falling back to pip.
    ///
    /// Preferring pip yields a single pip strategy.
    pub fn new(
        manager: PackageManager,
        interpreter: PythonInterpreter,
        resolver: PackageResolver,
    ) -> Self {
        let mut strategies: Vec<Box<dyn InstallStrategy>> = Vec::new();
        if let Some(strategy) = ManagerStrategy::new(manager) {
            strategies.push(Box::new(strategy));
        }
        strategies.push(Box::new(PipStrategy::new(interpreter)));

        Self {
            manager,
            resolver,
            strategies,
        }
    }

    /// Create an installer from a textual manager preference.
    ///
    /// Unknown preferences are rejected here, before anything is run.
    pub fn from_preference(
        preference: &str,
        interpreter: PythonInterpreter,
        resolver: PackageResolver,
    ) -> Result<Self> {
        let manager = preference.parse::<PackageManager>()?;
        Ok(Self::new(manager, interpreter, resolver))
    }

    /// Create an installer with an explicit strategy list.
    pub fn with_strategies(
        manager: PackageManager,
        resolver: PackageResolver,
        strategies: Vec<Box<dyn InstallStrategy>>,
    ) -> Self {
        Self {
            manager,
            resolver,
            strategies,
        }
    }

    /// The preferred manager.
    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    /// Strategy names in the order they are tried.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Make sure `distribution` is importable, installing it if needed.
    pub fn install_package(
        &self,
        distribution: &str,
        ui: &mut dyn UserInterface,
        ctx: &InstallerContext<'_>,
    ) -> InstallOutcome {
        let package = self.resolver.resolve(distribution);
        tracing::debug!(
            "Resolved {} -> import '{}', display '{}'",
            package.distribution,
            package.import_name,
            package.display_name
        );

        if (ctx.is_importable)(&package.import_name) {
            ui.success(&format!("{} is already installed.", package.display_name));
            return InstallOutcome::AlreadyInstalled;
        }

        ui.message(&format!(
            "{} not found. Installing using {}...",
            package.display_name, self.manager
        ));

        self.try_strategies(&package, ui, ctx)
    }

    fn try_strategies(
        &self,
        package: &PackageInfo,
        ui: &mut dyn UserInterface,
        ctx: &InstallerContext<'_>,
    ) -> InstallOutcome {
        let display = &package.display_name;

        for (index, strategy) in self.strategies.iter().enumerate() {
            let name = strategy.name();
            tracing::info!("Installing {} with {}", package.distribution, name);

            let mut spinner =
                ui.start_spinner(&format!("Installing {} with {}...", display, name));
            let installed = strategy.install(package, ctx);
            spinner.finish();

            if installed {
                ui.success(&format!("{} successfully installed with {}.", display, name));
                return InstallOutcome::Installed {
                    via: name.to_string(),
                };
            }

            match self.strategies.get(index + 1) {
                Some(next) => ui.warning(&format!(
                    "Failed to install {} using {}. Attempting to install with {}...",
                    display,
                    name,
                    next.name()
                )),
                None if index > 0 => ui.error(&format!(
                    "Failed to install {} with {} as well.",
                    display, name
                )),
                None => ui.error(&format!("Failed to install {} using {}.", display, name)),
            }
        }

        InstallOutcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallError;
    use crate::shell::CommandSpec;
    use crate::ui::MockUI;
    use std::cell::{Cell, RefCell};

    fn installer(manager: PackageManager) -> Installer {
        Installer::new(
            manager,
            PythonInterpreter::new("/env/bin/python"),
            PackageResolver::new(),
        )
    }

    #[test]
    fn present_package_runs_nothing() {
        let commands = Cell::new(0);
        let ctx = InstallerContext {
            run_command: Box::new(|_: &CommandSpec| {
                commands.set(commands.get() + 1);
                true
            }),
            is_importable: Box::new(|_: &str| true),
        };
        let mut ui = MockUI::new();

        let outcome = installer(PackageManager::Conda).install_package("numpy", &mut ui, &ctx);

        assert_eq!(outcome, InstallOutcome::AlreadyInstalled);
        assert!(outcome.succeeded());
        assert_eq!(commands.get(), 0);
        assert!(ui.has_success("NumPy is already installed."));
    }

    #[test]
    fn manager_success_stops_before_pip() {
        let commands = RefCell::new(Vec::new());
        let probes = Cell::new(0);
        let ctx = InstallerContext {
            run_command: Box::new(|spec: &CommandSpec| {
                commands.borrow_mut().push(spec.to_string());
                true
            }),
            // Absent on the first probe, present after install
            is_importable: Box::new(|_: &str| {
                probes.set(probes.get() + 1);
                probes.get() > 1
            }),
        };
        let mut ui = MockUI::new();

        let outcome = installer(PackageManager::Mamba).install_package("Pillow", &mut ui, &ctx);

        assert_eq!(
            outcome,
            InstallOutcome::Installed {
                via: "mamba".to_string()
            }
        );
        assert_eq!(*commands.borrow(), vec!["mamba install -y Pillow"]);
        assert!(ui.has_message("Pillow not found. Installing using mamba..."));
        assert!(ui.has_success("Pillow successfully installed with mamba."));
    }

    #[test]
    fn manager_failure_falls_back_to_pip_once() {
        let commands = RefCell::new(Vec::new());
        let ctx = InstallerContext {
            run_command: Box::new(|spec: &CommandSpec| {
                commands.borrow_mut().push(spec.to_string());
                !spec.program.ends_with("conda")
            }),
            is_importable: Box::new({
                let probes = Cell::new(0);
                move |_: &str| {
                    probes.set(probes.get() + 1);
                    probes.get() > 1
                }
            }),
        };
        let mut ui = MockUI::new();

        let outcome = installer(PackageManager::Conda).install_package("requests", &mut ui, &ctx);

        assert_eq!(
            outcome,
            InstallOutcome::Installed {
                via: "pip".to_string()
            }
        );
        assert_eq!(
            *commands.borrow(),
            vec![
                "conda install -y requests",
                "/env/bin/python -m pip install requests"
            ]
        );
        assert!(ui.has_warning(
            "Failed to install Requests using conda. Attempting to install with pip..."
        ));
        assert!(ui.has_success("Requests successfully installed with pip."));
    }

    #[test]
    fn both_strategies_failing_returns_failed() {
        let commands = Cell::new(0);
        let ctx = InstallerContext {
            run_command: Box::new(|_: &CommandSpec| {
                commands.set(commands.get() + 1);
                false
            }),
            is_importable: Box::new(|_: &str| false),
        };
        let mut ui = MockUI::new();

        let outcome =
            installer(PackageManager::Conda).install_package("not-a-package", &mut ui, &ctx);

        assert_eq!(outcome, InstallOutcome::Failed);
        assert!(!outcome.succeeded());
        assert_eq!(commands.get(), 2);
        assert!(ui.has_error("Failed to install not-a-package with pip as well."));
    }

    #[test]
    fn install_without_import_counts_as_failure() {
        let commands = Cell::new(0);
        let ctx = InstallerContext {
            run_command: Box::new(|_: &CommandSpec| {
                commands.set(commands.get() + 1);
                true
            }),
            is_importable: Box::new(|_: &str| false),
        };
        let mut ui = MockUI::new();

        let outcome =
            installer(PackageManager::Conda).install_package("opencv-python", &mut ui, &ctx);

        assert_eq!(outcome, InstallOutcome::Failed);
        assert_eq!(commands.get(), 2);
        assert!(ui.has_error("OpenCV"));
    }

    #[test]
    fn pip_preference_never_runs_a_manager() {
        let commands = RefCell::new(Vec::new());
        let ctx = InstallerContext {
            run_command: Box::new(|spec: &CommandSpec| {
                commands.borrow_mut().push(spec.to_string());
                false
            }),
            is_importable: Box::new(|_: &str| false),
        };
        let mut ui = MockUI::new();

        let installer = installer(PackageManager::Pip);
        assert_eq!(installer.strategy_names(), vec!["pip"]);

        let outcome = installer.install_package("flask", &mut ui, &ctx);
        assert_eq!(outcome, InstallOutcome::Failed);
        assert_eq!(
            *commands.borrow(),
            vec!["/env/bin/python -m pip install flask"]
        );
        assert!(ui.has_error("Failed to install Flask using pip."));
    }

    #[test]
    fn probe_uses_resolved_import_name() {
        let probed = RefCell::new(Vec::new());
        let ctx = InstallerContext {
            run_command: Box::new(|_: &CommandSpec| false),
            is_importable: Box::new(|name: &str| {
                probed.borrow_mut().push(name.to_string());
                true
            }),
        };
        let mut ui = MockUI::new();

        installer(PackageManager::Conda).install_package("scikit-learn", &mut ui, &ctx);
        assert_eq!(*probed.borrow(), vec!["sklearn"]);
    }

    #[test]
    fn unknown_preference_is_rejected_up_front() {
        let result = Installer::from_preference(
            "brew",
            PythonInterpreter::new("/env/bin/python"),
            PackageResolver::new(),
        );
        assert!(matches!(result, Err(InstallError::InvalidManager { .. })));
    }

    #[test]
    fn known_preference_builds_fallback_chain() {
        let installer = Installer::from_preference(
            "mamba",
            PythonInterpreter::new("/env/bin/python"),
            PackageResolver::new(),
        )
        .unwrap();
        assert_eq!(installer.manager(), PackageManager::Mamba);
        assert_eq!(installer.strategy_names(), vec!["mamba", "pip"]);
    }

    #[test]
    fn spinner_shown_per_attempt() {
        let ctx = InstallerContext {
            run_command: Box::new(|_: &CommandSpec| false),
            is_importable: Box::new(|_: &str| false),
        };
        let mut ui = MockUI::new();

        installer(PackageManager::Conda).install_package("torch", &mut ui, &ctx);
        assert_eq!(
            ui.spinners(),
            [
                "Installing PyTorch with conda...",
                "Installing PyTorch with pip..."
            ]
        );
    }

    struct UvStrategy;

    impl InstallStrategy for UvStrategy {
        fn name(&self) -> &str {
            "uv"
        }

        fn command(&self, package: &PackageInfo) -> CommandSpec {
            CommandSpec::new("uv").args(["pip", "install", package.distribution.as_str()])
        }
    }

    #[test]
    fn custom_strategy_list_is_tried_in_order() {
        let commands = RefCell::new(Vec::new());
        let ctx = InstallerContext {
            run_command: Box::new(|spec: &CommandSpec| {
                commands.borrow_mut().push(spec.to_string());
                spec.program.ends_with("uv")
            }),
            is_importable: Box::new({
                let probes = Cell::new(0);
                move |_: &str| {
                    probes.set(probes.get() + 1);
                    probes.get() > 1
                }
            }),
        };
        let mut ui = MockUI::new();

        let strategies: Vec<Box<dyn InstallStrategy>> = vec![
            Box::new(ManagerStrategy::new(PackageManager::Conda).unwrap()),
            Box::new(PipStrategy::new(PythonInterpreter::new("/env/bin/python"))),
            Box::new(UvStrategy),
        ];
        let installer =
            Installer::with_strategies(PackageManager::Conda, PackageResolver::new(), strategies);

        let outcome = installer.install_package("httpx", &mut ui, &ctx);
        assert_eq!(
            outcome,
            InstallOutcome::Installed {
                via: "uv".to_string()
            }
        );
        assert_eq!(commands.borrow().len(), 3);
        assert!(ui.has_warning("Attempting to install with uv..."));
    }
}
