//! Terminal user interface for capturing and reviewing ratings.
//!
//! This module provides the interactive feedback kiosk built on the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::KudosApp`]
//! - **View**: Rendering logic in the components and `rendering` module
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Capture flow, filter, and confirmation state
//! - [`components`]: Reusable UI components
//! - [`input`]: Context-aware key-to-message mapping
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, module-level storage carries the rating store into the
//! program. Call [`set_initial_store`] before starting the program, and
//! `KudosApp::init()` will take ownership of the store.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::{KudosApp, ViewMode};
pub use storage::{set_initial_store, set_initial_terminal_size, set_initial_view_mode};
