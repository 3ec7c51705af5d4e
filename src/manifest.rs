//! Requirements manifest parsing.
//!
//! A manifest lists one requirement per line in the usual
//! `requirements.txt` shape. Only the leading package name is kept:
//! version specifiers, extras and environment markers are dropped, since
//! every package is installed independently at whatever version the
//! installer picks.

use crate::error::{InstallError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Leading run of characters that may appear in a distribution name.
static PACKAGE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+").expect("PACKAGE_NAME_REGEX must compile")
});

/// Extract the package name from a single manifest line.
///
/// Returns `None` for blank lines, `#` comments, and lines that do not
/// start with a name character (e.g. `>=1.0`). Option lines are not
/// special: `-` is a name character, so `-r other.txt` yields `-r`.
pub fn parse_line(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    PACKAGE_NAME_REGEX.find(line).map(|m| m.as_str())
}

/// Parse manifest text into package names, in file order.
///
/// Duplicates are kept.
pub fn parse_manifest(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(parse_line)
        .map(str::to_string)
        .collect()
}

/// Read and parse a manifest file.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| InstallError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    let names = parse_manifest(&content);
    tracing::debug!("Parsed {} package(s) from {}", names.len(), path.display());
    Ok(names)
}
