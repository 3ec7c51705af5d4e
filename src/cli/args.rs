//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::installer::PackageManager;
use crate::ui::OutputMode;

/// pyreqs - Install Python requirements with conda or mamba, falling back to pip.
#[derive(Debug, Parser)]
#[command(name = "pyreqs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the requirements file
    pub file: PathBuf,

    /// Package manager to try first (pip is always the fallback)
    #[arg(short, long, value_enum)]
    pub manager: Option<PackageManager>,

    /// Python interpreter used for import checks and pip installs
    #[arg(long, env = "PYREQS_PYTHON")]
    pub python: Option<PathBuf>,

    /// Path to config file (overrides .pyreqs.yml discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show installer output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode requested on the command line alone.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}
