//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.kudos.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `KUDOS_DATA_DIR`
//! 4. **Command-line arguments** – `--data-dir`/`-d`, `--dashboard`/`-D`,
//!    `--summary`/`-s`
//!
//! # Configuration File
//!
//! Place `.kudos.toml` in the current directory, home directory, or XDG
//! config directory with:
//!
//! ```toml
//! data_dir = "/var/lib/kudos"
//! dashboard = true
//! ```

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive terminal session starting on the capture view.
    Capture,
    /// Interactive terminal session starting on the dashboard view.
    Dashboard,
    /// Print aggregate statistics to stdout and exit.
    Summary,
}

/// Default storage directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".kudos";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `KUDOS_DATA_DIR` or `--data-dir`: Storage directory for rating data
///
/// # Example
///
/// ```no_run
/// use kudos::KudosConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = KudosConfig::load().expect("failed to load configuration");
/// let data_dir = config.resolve_data_dir();
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "KUDOS",
    discovery(
        dotfile_name = ".kudos.toml",
        config_file_name = "kudos.toml",
        app_name = "kudos"
    )
)]
pub struct KudosConfig {
    /// Directory the rating collection is persisted under.
    ///
    /// Can be provided via:
    /// - CLI: `--data-dir <DIR>` or `-d <DIR>`
    /// - Environment: `KUDOS_DATA_DIR`
    /// - Config file: `data_dir = "..."`
    #[ortho_config(cli_short = 'd')]
    pub data_dir: Option<String>,

    /// Starts the interactive session on the dashboard view.
    ///
    /// Can be provided via:
    /// - CLI: `--dashboard` / `-D`
    /// - Config file: `dashboard = true`
    ///
    /// Note: Environment variable `KUDOS_DASHBOARD` is not supported because
    /// `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 'D')]
    pub dashboard: bool,

    /// Prints aggregate statistics to stdout and exits without entering the
    /// terminal UI.
    ///
    /// Can be provided via:
    /// - CLI: `--summary` / `-s`
    /// - Config file: `summary = true`
    #[ortho_config(cli_short = 's')]
    pub summary: bool,
}

impl KudosConfig {
    /// Returns the storage directory, falling back to [`DEFAULT_DATA_DIR`].
    #[must_use]
    pub fn resolve_data_dir(&self) -> Utf8PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR), Utf8PathBuf::from)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// `--summary` wins over `--dashboard`; without either flag the session
    /// starts on the capture view.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.summary {
            OperationMode::Summary
        } else if self.dashboard {
            OperationMode::Dashboard
        } else {
            OperationMode::Capture
        }
    }
}
