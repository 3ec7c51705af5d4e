//! pyreqs CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pyreqs::cli::{run, Cli, Settings};
use pyreqs::ui::create_ui;
use pyreqs::InstallError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so status output stays clean
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pyreqs=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pyreqs=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pyreqs starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let settings = match std::env::current_dir()
        .map_err(InstallError::from)
        .and_then(|root| Settings::load(&cli, &root))
    {
        Ok(settings) => settings,
        Err(e) => {
            create_ui(cli.output_mode()).error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let mut ui = create_ui(settings.output_mode);

    // Individual package failures never change the exit code.
    match run(&cli, &settings, ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
