//! Target interpreter selection.
//!
//! Pip installs and import checks must run against the same interpreter,
//! otherwise a package can be installed into one environment and probed
//! in another. Selection order:
//!
//! 1. An explicit path (`--python`, `PYREQS_PYTHON`, or config `python:`)
//! 2. `$CONDA_PREFIX/bin/python` when a conda environment is active
//! 3. The first of `python3`, `python` on `PATH`

use crate::error::{InstallError, Result};
use crate::shell::{parse_system_path, resolve_tool_path, CommandSpec};
use std::path::{Path, PathBuf};

/// Interpreter names searched on `PATH`, in order.
const PATH_CANDIDATES: &[&str] = &["python3", "python"];

/// Snippet run by the import check; the module name arrives as `argv[1]`.
const IMPORT_SNIPPET: &str = "import importlib, sys; importlib.import_module(sys.argv[1])";

/// A Python interpreter that installs and import checks are bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonInterpreter {
    path: PathBuf,
}

impl PythonInterpreter {
    /// Use the interpreter at `path` as-is.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the interpreter executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Locate the interpreter using the real environment.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        Self::locate_with_env(explicit, |key: &str| std::env::var(key), &parse_system_path())
    }

    /// Locate the interpreter with a custom env var lookup and PATH.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn locate_with_env<F>(
        explicit: Option<&Path>,
        env_fn: F,
        path_entries: &[PathBuf],
    ) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        if let Some(path) = explicit {
            tracing::debug!("Using explicit interpreter {}", path.display());
            return Ok(Self::new(path));
        }

        if let Ok(prefix) = env_fn("CONDA_PREFIX") {
            let candidate = conda_env_python(Path::new(&prefix));
            if candidate.is_file() {
                tracing::debug!("Using conda environment interpreter {}", candidate.display());
                return Ok(Self::new(candidate));
            }
        }

        for name in PATH_CANDIDATES {
            if let Some(path) = resolve_tool_path(name, path_entries) {
                tracing::debug!("Using interpreter {} from PATH", path.display());
                return Ok(Self::new(path));
            }
        }

        Err(InstallError::InterpreterNotFound {
            tried: format!("$CONDA_PREFIX, {}", PATH_CANDIDATES.join(", ")),
        })
    }

    /// Command that exits 0 only if `module` imports cleanly.
    pub fn import_command(&self, module: &str) -> CommandSpec {
        CommandSpec::new(&self.path).args(["-c", IMPORT_SNIPPET, module])
    }

    /// Command that installs `distribution` with this interpreter's pip.
    pub fn pip_install_command(&self, distribution: &str) -> CommandSpec {
        CommandSpec::new(&self.path).args(["-m", "pip", "install", distribution])
    }
}

/// Interpreter location inside a conda environment prefix.
fn conda_env_python(prefix: &Path) -> PathBuf {
    if cfg!(windows) {
        prefix.join("python.exe")
    } else {
        prefix.join("bin").join("python")
    }
}
