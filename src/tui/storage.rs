//! Startup context storage for TUI bootstrapping.
//!
//! This module owns the global `OnceLock` values used during TUI
//! bootstrapping and provides the setter/getter functions consumed by CLI
//! wiring and `KudosApp::init()`. The pattern exists because bubbletea-rs
//! requires `Model::init()` to be a static function with no arguments.

use std::sync::{Mutex, OnceLock, PoisonError};

use crossterm::terminal;

use crate::ratings::RatingStore;

use super::app::ViewMode;

/// Global storage for the rating store handed to the application.
///
/// Wrapped in a `Mutex<Option<_>>` because the store is not `Clone`:
/// `KudosApp::init()` takes ownership out of the slot exactly once.
static INITIAL_STORE: OnceLock<Mutex<Option<RatingStore>>> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts and read by `KudosApp::new()`
/// so the first frame uses the actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for the view the session starts on.
static INITIAL_VIEW_MODE: OnceLock<ViewMode> = OnceLock::new();

/// Sets the rating store for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The store
/// is taken by `KudosApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the store was set, `false` if one was already set.
pub fn set_initial_store(store: RatingStore) -> bool {
    INITIAL_STORE.set(Mutex::new(Some(store))).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// This should be called before starting the bubbletea-rs program so the
/// initial render can use the actual terminal size instead of fallbacks.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the view the session starts on.
///
/// # Returns
///
/// `true` if the mode was set, `false` if one was already set.
pub fn set_initial_view_mode(mode: ViewMode) -> bool {
    INITIAL_VIEW_MODE.set(mode).is_ok()
}

/// Takes ownership of the configured rating store.
///
/// Called internally by `KudosApp::init()`. Falls back to an in-memory
/// store when no store was configured (or it was already taken), so the
/// session keeps working without persistence.
pub(crate) fn take_initial_store() -> RatingStore {
    INITIAL_STORE
        .get()
        .and_then(|slot| {
            slot.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take()
        })
        .unwrap_or_else(|| {
            tracing::warn!("no rating store configured, falling back to in-memory storage");
            RatingStore::in_memory()
        })
}

/// Gets the initial terminal dimensions from storage.
///
/// Called internally by `KudosApp::new()`. Returns the stored dimensions or
/// fallback dimensions if none were set.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

/// Gets the configured starting view, defaulting to the capture view.
pub(crate) fn get_initial_view_mode() -> ViewMode {
    INITIAL_VIEW_MODE.get().copied().unwrap_or(ViewMode::Capture)
}
