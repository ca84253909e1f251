//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use picalc_cli::output::write_to_file;
use picalc_cli::{CLIResultPresenter, OutputMode};
use picalc_orchestration::{compute_pi, ResultPresenter};

use crate::config::AppConfig;
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        picalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    info!("{}", version::banner());
    run_cli(config)
}

fn output_mode(config: &AppConfig) -> OutputMode {
    if config.json {
        OutputMode::Json
    } else if config.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Text
    }
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let request = config.request();
    let result = compute_pi(&request)?;

    let presenter = CLIResultPresenter::new(output_mode(config), config.verbose);
    presenter.present_result(&result, config.details);

    if let Some(ref path) = config.output {
        write_to_file(path, &result.pi_digits)
            .with_context(|| format!("failed to write digits to {path}"))?;
    }

    Ok(())
}
