//! Command-line interface for pyreqs.
//!
//! - [`args`] - Argument definitions using clap's derive macros
//! - [`install`] - The install run driven by those arguments

pub mod args;
pub mod install;

pub use args::Cli;
pub use install::{run, Settings};
