//! External command execution.
//!
//! Installers are launched directly (no intermediate shell) so package
//! names never pass through shell quoting.

use crate::error::{InstallError, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable name or path.
    pub program: PathBuf,
    /// Arguments, passed verbatim.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a command with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandOptions {
    /// Pass the child's stdout/stderr through to ours instead of discarding them.
    pub show_output: bool,
}

/// Execute a command and wait for it to exit.
///
/// Stdin is always closed so an installer waiting for confirmation fails
/// instead of hanging. There is no timeout.
pub fn execute(spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);
    cmd.stdin(Stdio::null());

    if options.show_output {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    } else {
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());
    }

    tracing::debug!("Running: {}", spec);

    let status = cmd.status().map_err(|source| InstallError::CommandLaunch {
        command: spec.to_string(),
        source,
    })?;

    let duration = start.elapsed();
    tracing::debug!(
        "Command exited with {:?} after {:?}: {}",
        status.code(),
        duration,
        spec
    );

    Ok(CommandResult {
        exit_code: status.code(),
        duration,
        success: status.success(),
    })
}

/// Execute a command and return success/failure.
///
/// Launch errors count as failure.
pub fn execute_check(spec: &CommandSpec, options: &CommandOptions) -> bool {
    match execute(spec, options) {
        Ok(result) => result.success,
        Err(e) => {
            tracing::debug!("{}", e);
            false
        }
    }
}
