//! pyreqs - Install Python requirements with conda or mamba, falling back to pip.
//!
//! Each package listed in a requirements file is checked by importing it in
//! the target interpreter. Missing packages are installed with the preferred
//! manager, then with pip if that fails, and re-checked after each attempt.
//! Packages are handled one at a time; a failure never stops the batch.
//! There is no dependency resolution.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Install strategies, fallback, and batch driving
//! - [`manifest`] - Requirements file parsing
//! - [`packages`] - Distribution/import/display name resolution
//! - [`python`] - Interpreter discovery and import probing
//! - [`shell`] - External command execution
//! - [`ui`] - Status output and spinners
//!
//! # Example
//!
//! ```
//! use pyreqs::manifest::parse_manifest;
//! use pyreqs::packages::resolve;
//!
//! let names = parse_manifest("pillow>=10\n# imaging\nnumpy\n");
//! assert_eq!(names, vec!["pillow", "numpy"]);
//! assert_eq!(resolve(&names[0]).import_name, "PIL");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod packages;
pub mod python;
pub mod shell;
pub mod ui;

pub use error::{InstallError, Result};
