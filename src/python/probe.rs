//! Import probing.
//!
//! A package counts as present when its top-level module imports cleanly
//! in the target interpreter. A missing module and one that raises during
//! import are both reported as absent.

use crate::packages::top_level_module;
use crate::shell::{execute, CommandOptions};

use super::PythonInterpreter;

/// Check whether `import_name` can be imported by `interpreter`.
///
/// Only the segment before the first `.` is imported, so
/// `matplotlib.pyplot` probes `matplotlib`. The probe's own output is
/// always discarded. Module-level side effects of the import do happen.
pub fn is_importable(interpreter: &PythonInterpreter, import_name: &str) -> bool {
    let module = top_level_module(import_name);
    if module.is_empty() {
        return false;
    }

    let spec = interpreter.import_command(module);
    let present = match execute(&spec, &CommandOptions::default()) {
        Ok(result) => result.success,
        Err(e) => {
            tracing::warn!("Import check could not run: {}", e);
            false
        }
    };

    tracing::debug!("Import check for '{}': {}", module, present);
    present
}
