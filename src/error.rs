//! Error types for pyreqs operations.
//!
//! This module defines [`InstallError`], the error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! Per-package install failures are not errors: they are reported as an
//! [`InstallOutcome`](crate::installer::InstallOutcome) and the batch moves
//! on. Only conditions that make the whole run meaningless end up here.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pyreqs operations.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The requested package manager is not one we know how to drive.
    #[error("Invalid package manager '{value}': expected one of conda, mamba, pip")]
    InvalidManager { value: String },

    /// The requirements manifest could not be read.
    #[error("Failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// A configuration file exists but could not be parsed.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// No Python interpreter could be located.
    #[error("No Python interpreter found (tried {tried})")]
    InterpreterNotFound { tried: String },

    /// An external command could not be started.
    #[error("Failed to launch '{command}': {source}")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error carrying extra context, such as an unreadable config file.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pyreqs operations.
pub type Result<T> = std::result::Result<T, InstallError>;
