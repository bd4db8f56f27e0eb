//! CLI operation mode handlers.
//!
//! This module wires configuration to the two ways the application runs:
//! the interactive terminal kiosk (capture or dashboard view) and the
//! headless `--summary` mode that prints aggregate statistics to stdout.

use std::io::{self, Write};

use bubbletea_rs::Program;
use thiserror::Error;

use crate::config::{KudosConfig, OperationMode};
use crate::persistence::DirectoryStore;
use crate::ratings::RatingStore;
use crate::tui::components::{SummaryComponent, SummaryViewContext};
use crate::tui::{
    KudosApp, ViewMode, set_initial_store, set_initial_terminal_size, set_initial_view_mode,
};

/// Errors surfaced to the user when launching the application.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LaunchError {
    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {message}")]
    Configuration {
        /// Human-readable description of the failure.
        message: String,
    },
    /// Writing to stdout failed.
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable description of the failure.
        message: String,
    },
    /// The terminal UI failed to start or run.
    #[error("TUI error: {message}")]
    Tui {
        /// Human-readable description of the failure.
        message: String,
    },
}

/// Runs the application in the mode selected by configuration.
///
/// # Errors
///
/// Returns [`LaunchError`] when the summary cannot be written or the TUI
/// fails to initialise. Storage problems are not fatal: the session
/// degrades to in-memory storage.
pub async fn run(config: &KudosConfig) -> Result<(), LaunchError> {
    match config.operation_mode() {
        OperationMode::Summary => print_summary(config),
        OperationMode::Capture => run_kiosk(config, ViewMode::Capture).await,
        OperationMode::Dashboard => run_kiosk(config, ViewMode::Dashboard).await,
    }
}

/// Opens the rating store at the configured directory.
///
/// A directory that cannot be opened degrades to an in-memory store so the
/// kiosk keeps working; the condition is logged, not fatal.
fn open_store(config: &KudosConfig) -> RatingStore {
    let data_dir = config.resolve_data_dir();
    DirectoryStore::open(&data_dir).map_or_else(
        |error| {
            tracing::warn!("falling back to in-memory storage: {error}");
            RatingStore::in_memory()
        },
        |backend| RatingStore::open(Box::new(backend)),
    )
}

/// Prints aggregate statistics to stdout and returns.
fn print_summary(config: &KudosConfig) -> Result<(), LaunchError> {
    let store = open_store(config);
    let text = summary_text(&store);

    let mut stdout = io::stdout().lock();
    write!(stdout, "{text}").map_err(|error| LaunchError::Io {
        message: error.to_string(),
    })
}

/// Renders the headless summary block for a store.
fn summary_text(store: &RatingStore) -> String {
    SummaryComponent::view(&SummaryViewContext {
        ratings: store.ratings(),
    })
}

/// Runs the interactive kiosk starting on the given view.
async fn run_kiosk(config: &KudosConfig, view_mode: ViewMode) -> Result<(), LaunchError> {
    let store = open_store(config);

    // Store startup context for Model::init() to retrieve. If already set
    // (e.g. re-running in the same process), these are no-ops and the
    // existing context remains.
    let _ = set_initial_store(store);
    let _ = set_initial_view_mode(view_mode);
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| LaunchError::Tui {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `KudosApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // Build and run the program using the builder pattern.
    // KudosApp::init() will retrieve its store from module-level storage.
    let program = Program::<KudosApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
