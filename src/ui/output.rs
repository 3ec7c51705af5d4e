//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status lines plus the installers' own output.
    Verbose,
    /// Status lines with spinners while installers run.
    #[default]
    Normal,
    /// Errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode passes installer output through.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    ///
    /// Spinners would interleave with installer output in verbose mode.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_command_output() {
        assert!(OutputMode::Verbose.shows_command_output());
        assert!(!OutputMode::Normal.shows_command_output());
        assert!(!OutputMode::Quiet.shows_command_output());
    }

    #[test]
    fn output_mode_shows_spinners() {
        assert!(!OutputMode::Verbose.shows_spinners());
        assert!(OutputMode::Normal.shows_spinners());
        assert!(!OutputMode::Quiet.shows_spinners());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
