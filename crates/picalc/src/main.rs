//! PiCalc-rs: parallel Chudnovsky π calculator.

use std::process::ExitCode;

use picalc_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing on stderr so stdout carries only results
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", picalc_cli::ui::error_line(&format!("{e:#}")));
            ExitCode::from(u8::try_from(errors::exit_code(&e)).unwrap_or(1))
        }
    }
}
