//! Feedback form component shown after a score is chosen.

use crate::ratings::Score;
use crate::tui::state::{FieldErrors, FormField};

use super::stars::{StarRowComponent, StarRowViewContext};

/// Context for rendering the capture form.
#[derive(Debug, Clone, Copy)]
pub struct CaptureFormViewContext<'a> {
    /// The score the user chose.
    pub score: Score,
    /// Current name draft.
    pub name: &'a str,
    /// Current feedback draft.
    pub feedback: &'a str,
    /// Field currently receiving input.
    pub focus: FormField,
    /// Validation failures from the last submit attempt.
    pub errors: FieldErrors,
}

/// Component for displaying the name/feedback entry form.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureFormComponent;

impl CaptureFormComponent {
    /// Renders the form with the chosen stars above the input fields.
    ///
    /// The focused field carries a `>` marker and a trailing cursor block;
    /// each field that failed the last submit shows its message below.
    #[must_use]
    pub fn view(ctx: &CaptureFormViewContext<'_>) -> String {
        let stars = StarRowComponent::view(&StarRowViewContext {
            preview: None,
            selected: Some(ctx.score),
        });

        let mut output = format!("{stars}\n\n");
        output.push_str(&Self::field_line(
            "Name",
            ctx.name,
            ctx.focus == FormField::Name,
        ));
        output.push('\n');
        if ctx.errors.name_missing {
            output.push_str("  ! Please enter your name.\n");
        }
        output.push_str(&Self::field_line(
            "Feedback",
            ctx.feedback,
            ctx.focus == FormField::Feedback,
        ));
        output.push('\n');
        if ctx.errors.feedback_missing {
            output.push_str("  ! Please enter your feedback.\n");
        }
        output
    }

    fn field_line(label: &str, draft: &str, focused: bool) -> String {
        let marker = if focused { ">" } else { " " };
        let cursor = if focused { "_" } else { "" };
        format!("{marker} {label}: {draft}{cursor}")
    }
}
