//! Tinct CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use tinct_cli::Args;

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Arguments decide the log level, so they come before the logger
    let args = Args::parse();

    // Fall back to `warn` on an unrecognised level name
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Tinct");
    debug!(args:?; "Parsed arguments");

    // Highlight, then report any failure as a rendered diagnostic
    if let Err(err) = tinct_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        // Render into a buffer so the report goes through the logger
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &err)
            .expect("Writing to String buffer is infallible");

        error!("{writer}");
        process::exit(1);
    }

    info!("Completed successfully");
}
