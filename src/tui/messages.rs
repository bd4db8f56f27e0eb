//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::ratings::{Score, ScoreFilter};

/// Messages for the feedback kiosk TUI application.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    // Capture flow
    /// Move the star preview one step down.
    PreviewPrevious,
    /// Move the star preview one step up.
    PreviewNext,
    /// Choose a score directly.
    ChooseScore(Score),
    /// Choose the currently previewed score.
    ChoosePreviewed,
    /// Type a character into the focused form field.
    InputChar(char),
    /// Delete the last character of the focused form field.
    Backspace,
    /// Move focus to the next form field.
    FocusNextField,
    /// Submit the capture form as a new rating.
    SubmitFeedback,
    /// Abandon the capture form and return to the star picker.
    CancelCapture,
    /// Reset the thank-you screen without waiting for the timer.
    ResetNow,
    /// The post-submission reset timer elapsed.
    ///
    /// Carries the capture generation it was armed for; a stale generation
    /// means the user already moved on and the message is ignored.
    ResetTimerFired {
        /// Capture generation at the time the timer was armed.
        generation: u64,
    },

    // Dashboard navigation
    /// Move cursor up one item.
    CursorUp,
    /// Move cursor down one item.
    CursorDown,
    /// Move cursor to first item.
    Home,
    /// Move cursor to last item.
    End,

    // Filter changes
    /// Apply a new filter.
    SetFilter(ScoreFilter),
    /// Cycle through available filters.
    CycleFilter,

    // Destructive actions
    /// Ask for confirmation before clearing all ratings.
    ClearRequested,
    /// The pending confirmation was accepted.
    ConfirmAccepted,
    /// The pending confirmation was declined.
    ConfirmCancelled,

    // Application lifecycle
    /// Switch between the capture and dashboard views.
    SwitchView,
    /// Quit the application.
    Quit,
    /// Synthetic startup event emitted by `init`.
    Initialized,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}
