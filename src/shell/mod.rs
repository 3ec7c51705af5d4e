//! External command execution and tool lookup.

pub mod command;
pub mod path;

pub use command::{execute, execute_check, CommandOptions, CommandResult, CommandSpec};
pub use path::{is_executable, parse_system_path, resolve_tool_path};
