//! Confirmation dialog component for destructive actions.

use crate::tui::state::ConfirmDialog;

/// Component for displaying a pending yes/no confirmation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfirmDialogComponent;

impl ConfirmDialogComponent {
    /// Renders the dialog as a framed block with an answer hint.
    #[must_use]
    pub fn view(dialog: &ConfirmDialog) -> String {
        let width = dialog
            .title
            .chars()
            .count()
            .max(dialog.message.chars().count())
            .max("[y] confirm   [n] cancel".len());
        let rule = "─".repeat(width + 2);

        format!(
            "┌{rule}┐\n│ {title:<width$} │\n│ {message:<width$} │\n│ {hint:<width$} │\n└{rule}┘\n",
            title = dialog.title,
            message = dialog.message,
            hint = "[y] confirm   [n] cancel",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_frames_title_message_and_hint() {
        let dialog = ConfirmDialog::clear_ratings(2);
        let output = ConfirmDialogComponent::view(&dialog);

        assert!(output.contains("Clear all ratings?"));
        assert!(output.contains("2 ratings"));
        assert!(output.contains("[y] confirm"));
        assert!(output.starts_with('┌'));
    }
}
