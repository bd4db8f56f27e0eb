//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! feedback kiosk. It coordinates the capture flow, the dashboard filter
//! state, and persistence through the rating store.
//!
//! # Module Structure
//!
//! - `capture_handlers`: Star picker, feedback form, and reset timer
//! - `dashboard_handlers`: Navigation, filtering, and the clear flow
//! - `rendering`: View rendering methods for terminal output

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::ratings::{self, Rating, RatingStore};

use super::components::RatingListComponent;
use super::input::{InputContext, map_key_to_message};
use super::messages::AppMsg;
use super::state::{CapturePhase, CaptureState, ConfirmDialog, FilterState};

mod capture_handlers;
mod dashboard_handlers;
mod rendering;

/// View the application is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Star picker and feedback form for submitting a rating.
    #[default]
    Capture,
    /// Aggregate statistics and the filtered rating list.
    Dashboard,
}

/// Main application model for the feedback kiosk TUI.
#[derive(Debug)]
pub struct KudosApp {
    /// Canonical rating store, owned for the whole session.
    pub(crate) store: RatingStore,
    /// View currently shown.
    pub(crate) view_mode: ViewMode,
    /// Capture flow state.
    pub(crate) capture: CaptureState,
    /// Dashboard filter and cursor state.
    pub(crate) filter_state: FilterState,
    /// Cached indices of ratings matching the current filter, newest first.
    /// Invalidated when the collection or the filter changes.
    filtered_indices: Vec<usize>,
    /// Pending confirmation dialog, if any.
    pub(crate) confirm: Option<ConfirmDialog>,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Rating list component.
    rating_list: RatingListComponent,
}

impl KudosApp {
    /// Creates a new application around the given store, starting on the
    /// given view.
    #[must_use]
    pub fn new(store: RatingStore, view_mode: ViewMode) -> Self {
        let (width, height) = super::storage::get_initial_terminal_size();
        let mut app = Self {
            store,
            view_mode,
            capture: CaptureState::new(),
            filter_state: FilterState::new(),
            filtered_indices: Vec::new(),
            confirm: None,
            error: None,
            width,
            height,
            rating_list: RatingListComponent::new(),
        };
        app.rebuild_filter_cache();
        app
    }

    /// Creates an application with an empty in-memory store.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(RatingStore::in_memory(), ViewMode::default())
    }

    /// Returns the full rating collection in insertion order.
    #[must_use]
    pub fn ratings(&self) -> &[Rating] {
        self.store.ratings()
    }

    /// Returns the count of ratings matching the current filter.
    #[must_use]
    #[expect(clippy::missing_const_for_fn, reason = "Vec::len is not const-stable")]
    pub fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the rating under the dashboard cursor, if any.
    #[must_use]
    pub fn selected_rating(&self) -> Option<&Rating> {
        self.filtered_indices
            .get(self.filter_state.cursor_position)
            .and_then(|&index| self.store.ratings().get(index))
    }

    /// Rebuilds the filtered indices cache from the store and active filter.
    ///
    /// Call this after any mutation of the collection or filter change.
    pub(crate) fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = ratings::filter_and_sort_indices(
            self.store.ratings(),
            self.filter_state.active_filter,
        );
        self.filter_state.clamp_cursor(self.filtered_indices.len());
        self.adjust_scroll_to_cursor();
    }

    /// Returns the cached filtered indices, newest first.
    pub(crate) fn filtered_indices(&self) -> &[usize] {
        &self.filtered_indices
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to
    /// specialised handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::PreviewPrevious
            | AppMsg::PreviewNext
            | AppMsg::ChooseScore(_)
            | AppMsg::ChoosePreviewed
            | AppMsg::InputChar(_)
            | AppMsg::Backspace
            | AppMsg::FocusNextField
            | AppMsg::SubmitFeedback
            | AppMsg::CancelCapture
            | AppMsg::ResetNow
            | AppMsg::ResetTimerFired { .. } => self.handle_capture_msg(msg),

            AppMsg::CursorUp
            | AppMsg::CursorDown
            | AppMsg::Home
            | AppMsg::End
            | AppMsg::SetFilter(_)
            | AppMsg::CycleFilter
            | AppMsg::ClearRequested
            | AppMsg::ConfirmAccepted
            | AppMsg::ConfirmCancelled => self.handle_dashboard_msg(msg),

            AppMsg::SwitchView => self.handle_switch_view(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::Initialized => None,
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
        }
    }

    /// Returns the current input context for context-aware key mapping.
    pub(crate) const fn input_context(&self) -> InputContext {
        if self.confirm.is_some() {
            return InputContext::Confirm;
        }
        match self.view_mode {
            ViewMode::Dashboard => InputContext::Dashboard,
            ViewMode::Capture => match self.capture.phase() {
                CapturePhase::Picking => InputContext::StarPicker,
                CapturePhase::Commenting => InputContext::FeedbackForm,
                CapturePhase::Submitted => InputContext::Submitted,
            },
        }
    }

    /// Records a persistence failure for the status line.
    ///
    /// The in-memory state has already been mutated; the error only tells
    /// the user that durability is currently degraded.
    pub(crate) fn record_store_error(&mut self, action: &str, error: &impl std::fmt::Display) {
        tracing::warn!("failed to {action}: {error}");
        self.error = Some(format!("Could not {action}: {error}"));
    }

    fn handle_switch_view(&mut self) -> Option<Cmd> {
        self.confirm = None;
        if self.view_mode == ViewMode::Capture {
            // The preview is picker-local; leaving the picker discards it.
            self.capture.clear_preview();
        }
        self.view_mode = match self.view_mode {
            ViewMode::Capture => ViewMode::Dashboard,
            ViewMode::Dashboard => ViewMode::Capture,
        };
        if self.view_mode == ViewMode::Dashboard {
            self.rebuild_filter_cache();
        }
        None
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        let list_height = self.calculate_list_height();
        self.rating_list.set_visible_height(list_height);
        self.adjust_scroll_to_cursor();
        None
    }
}

impl Model for KudosApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the store and starting view from module-level storage.
        let store = super::storage::take_initial_store();
        let view_mode = super::storage::get_initial_view_mode();
        let model = Self::new(store, view_mode);

        // Emit an immediate startup message to trigger the first render
        // cycle without waiting for user input.
        let cmd = Self::immediate_init_cmd();

        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs with context-aware mapping
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let context = self.input_context();
            if let Some(mapped) = map_key_to_message(key_msg, context) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        self.render()
    }
}

impl KudosApp {
    /// Creates a command that emits `Initialized` immediately.
    fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
