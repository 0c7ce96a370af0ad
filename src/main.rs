use dotenv::dotenv;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod api;
mod cli;
mod config;
mod error;
mod models;
mod report;

use crate::api::rugcheck::RugcheckClient;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::RugcheckError;
use crate::report::TokenSummary;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging; stdout is reserved for the report
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse_args();
    let colored = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();

    let result = match cli.token_address() {
        Some(token) => match Config::load() {
            Ok(config) => run(token, &config, colored).await,
            Err(e) => Err(RugcheckError::Config(format!("{:#}", e))),
        },
        None => Err(RugcheckError::MissingArgument),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(RugcheckError::MissingArgument) => {
            eprintln!("{}", RugcheckError::MissingArgument);
            ExitCode::from(RugcheckError::MissingArgument.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Fetches the report for the requested token and renders it.
async fn run(token: &str, config: &Config, colored: bool) -> Result<String, RugcheckError> {
    let client = RugcheckClient::new(config)
        .map_err(|e| RugcheckError::Config(format!("{:#}", e)))?;
    info!("Checking token {} against {}", token, config.api_url);

    let report = client.get_token_report(token).await?;
    let summary = TokenSummary::from_report(&report)?;
    debug!("Primary risk score {} classified as {}", summary.risk_score, summary.severity);

    Ok(summary.render(colored))
}
