//! Package manager preference.

use crate::error::InstallError;
use std::fmt;
use std::str::FromStr;

/// The installer tried first.
///
/// Conda and mamba are tried before falling back to pip. Preferring pip
/// skips the conda-style attempt entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PackageManager {
    /// `conda install -y <name>`
    #[default]
    Conda,
    /// `mamba install -y <name>`
    Mamba,
    /// `<python> -m pip install <name>`
    Pip,
}

impl PackageManager {
    /// Executable name / label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conda => "conda",
            Self::Mamba => "mamba",
            Self::Pip => "pip",
        }
    }

    /// Whether this is a conda-style manager.
    pub fn is_conda_like(&self) -> bool {
        matches!(self, Self::Conda | Self::Mamba)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = InstallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conda" => Ok(Self::Conda),
            "mamba" => Ok(Self::Mamba),
            "pip" => Ok(Self::Pip),
            _ => Err(InstallError::InvalidManager {
                value: s.to_string(),
            }),
        }
    }
}
