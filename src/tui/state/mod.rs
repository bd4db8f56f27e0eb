//! State management for the feedback kiosk TUI.
//!
//! This module provides the core state types: the capture flow state
//! machine, the dashboard filter and cursor state, and the confirmation
//! dialog for destructive actions.

mod capture;
mod confirm;
mod filter_state;

pub use capture::{CapturePhase, CaptureState, FieldErrors, FormField};
pub use confirm::ConfirmDialog;
pub use filter_state::FilterState;
