//! Opens a window, draws a magenta quad every frame, and toggles it with a
//! key until the window is closed.
//!
//! Run with:
//! ```sh
//! cargo run -p fanquad-demo -- --toggle-key q
//! ```

mod app;
mod cli;
mod logging;
mod platform;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Context, Result};

use crate::{
    cli::Cli,
    logging::{LoggingConfig, init_logging},
};

fn main() -> Result<ExitCode> {
    // panic hook
    color_eyre::install()?;

    // parse command line arguments
    let cli = Cli::parse();

    // Initialize structured logging
    let logging_config =
        LoggingConfig::from_env().with_overrides(cli.log_level, cli.json_logs);
    init_logging(&logging_config).wrap_err("Failed to initialize logging")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fanquad starting up");

    // validate CLI arguments
    cli.validate()?;

    match app::run(cli.window_config(), cli.toggle_key) {
        Ok(summary) => {
            tracing::info!(
                frames_drawn = summary.frames_drawn,
                frames_cleared = summary.frames_cleared,
                "shut down"
            );
            Ok(ExitCode::SUCCESS)
        },
        // the error has been logged where it happened
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
