//! Input handling for the TUI application.
//!
//! This module provides context-aware key-to-message mapping. The same key
//! means different things depending on where the user is: `q` quits from the
//! star picker but is ordinary text inside the feedback form, and `y`/`n`
//! only answer a pending confirmation dialog.

use crate::ratings::{Score, ScoreFilter};

use super::messages::AppMsg;

/// Input context determining how key events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Choosing a star score on the capture view.
    StarPicker,
    /// Typing into the name/feedback form.
    FeedbackForm,
    /// Thank-you screen shown after submission.
    Submitted,
    /// A confirmation dialog is awaiting an answer.
    Confirm,
    /// Browsing the dashboard list.
    Dashboard,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::StarPicker => map_star_picker_key(key),
        InputContext::FeedbackForm => map_feedback_form_key(key),
        InputContext::Submitted => map_submitted_key(key),
        InputContext::Confirm => map_confirm_key(key),
        InputContext::Dashboard => map_dashboard_key(key),
    }
}

fn map_star_picker_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(AppMsg::PreviewPrevious),
        KeyCode::Right | KeyCode::Char('l') => Some(AppMsg::PreviewNext),
        KeyCode::Enter => Some(AppMsg::ChoosePreviewed),
        KeyCode::Tab => Some(AppMsg::SwitchView),
        KeyCode::Char(digit) => score_from_digit(digit).map(AppMsg::ChooseScore),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_feedback_form_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Esc => Some(AppMsg::CancelCapture),
        KeyCode::Enter => Some(AppMsg::SubmitFeedback),
        KeyCode::Tab | KeyCode::Down | KeyCode::Up => Some(AppMsg::FocusNextField),
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Char(ch) => Some(AppMsg::InputChar(ch)),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_submitted_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Tab => Some(AppMsg::SwitchView),
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(AppMsg::ResetNow),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_confirm_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(AppMsg::ConfirmAccepted),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(AppMsg::ConfirmCancelled),
        _ => None,
    }
}

fn map_dashboard_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('f') => Some(AppMsg::CycleFilter),
        KeyCode::Char('a') | KeyCode::Esc => Some(AppMsg::SetFilter(ScoreFilter::All)),
        KeyCode::Char('c') => Some(AppMsg::ClearRequested),
        KeyCode::Tab => Some(AppMsg::SwitchView),
        KeyCode::Char(digit) => score_from_digit(digit)
            .map(|score| AppMsg::SetFilter(ScoreFilter::Only(score))),
        _ => None,
    }
}

/// Converts a `1`-`5` digit key to a score.
fn score_from_digit(digit: char) -> Option<Score> {
    let value = digit.to_digit(10)?;
    u8::try_from(value).ok().and_then(|v| Score::new(v).ok())
}
