//! Python interpreter discovery and import probing.

pub mod interpreter;
pub mod probe;

pub use interpreter::PythonInterpreter;
pub use probe::is_importable;
