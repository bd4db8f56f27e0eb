//! Kudos CLI entrypoint for the feedback kiosk.

use std::io::{self, Write};
use std::process::ExitCode;

use kudos::{KudosConfig, LaunchError};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), LaunchError> {
    let config = load_config()?;
    kudos::cli::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`LaunchError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<KudosConfig, LaunchError> {
    KudosConfig::load().map_err(|error| LaunchError::Configuration {
        message: error.to_string(),
    })
}
