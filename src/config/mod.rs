//! Configuration loading.
//!
//! # Modules
//!
//! - [`loader`] - Config file discovery and loading
//! - [`merger`] - Layering of global and project configs
//! - [`schema`] - The configuration structure

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{load_config, ConfigPaths, PROJECT_CONFIG_FILE};
pub use schema::PyreqsConfig;
