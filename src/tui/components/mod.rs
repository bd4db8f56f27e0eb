//! UI components for the feedback kiosk TUI.
//!
//! This module provides reusable rendering components following the
//! bubbletea-rs Model-View pattern. Components are pure: each takes a view
//! context and produces terminal output without mutating state.

mod capture_form;
mod confirm_dialog;
mod rating_list;
mod stars;
mod summary;

pub use capture_form::{CaptureFormComponent, CaptureFormViewContext};
pub use confirm_dialog::ConfirmDialogComponent;
pub use rating_list::{RatingListComponent, RatingListViewContext};
pub use stars::{StarRowComponent, StarRowViewContext};
pub use summary::{SummaryComponent, SummaryViewContext};
