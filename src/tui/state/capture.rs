//! Capture flow state machine for submitting a new rating.
//!
//! The flow moves through three phases: picking a star score, filling in the
//! feedback form (name and feedback, both required after trimming), and a
//! thank-you screen that resets back to the picker. Each observable
//! transition bumps a generation counter so the delayed reset timer can
//! detect that it has gone stale.

use crate::ratings::{NewRating, Score};

/// Maximum characters accepted in the feedback field.
pub const MAX_FEEDBACK_CHARS: usize = 500;

/// Maximum characters accepted in the name field.
pub const MAX_NAME_CHARS: usize = 60;

/// Phase of the capture flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePhase {
    /// Choosing a star score.
    #[default]
    Picking,
    /// Entering optional name and feedback text.
    Commenting,
    /// Thank-you screen after a successful submission.
    Submitted,
}

/// Form field that currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// The submitter name.
    #[default]
    Name,
    /// The free-text feedback.
    Feedback,
}

/// Per-field validation failures from the last submit attempt.
///
/// Both fields are validated independently so the form can point at every
/// field that needs correcting, not just the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    /// The name was empty after trimming.
    pub name_missing: bool,
    /// The feedback was empty after trimming.
    pub feedback_missing: bool,
}

impl FieldErrors {
    /// Returns true when no field failed validation.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.name_missing && !self.feedback_missing
    }
}

/// State for the rating capture flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptureState {
    phase: CapturePhase,
    preview: Option<Score>,
    selected: Option<Score>,
    name: String,
    feedback: String,
    focus: FormField,
    errors: FieldErrors,
    generation: u64,
}

impl CaptureState {
    /// Creates a fresh capture state on the star picker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> CapturePhase {
        self.phase
    }

    /// Returns the previewed score, if any.
    #[must_use]
    pub const fn preview(&self) -> Option<Score> {
        self.preview
    }

    /// Returns the chosen score, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<Score> {
        self.selected
    }

    /// Returns the current name draft.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the current feedback draft.
    #[must_use]
    pub const fn feedback(&self) -> &str {
        self.feedback.as_str()
    }

    /// Returns the focused form field.
    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Returns the validation failures from the last submit attempt.
    #[must_use]
    pub const fn errors(&self) -> FieldErrors {
        self.errors
    }

    /// Returns the current generation counter.
    ///
    /// Delayed commands record this value when armed and compare it on
    /// delivery; a mismatch means the state has since moved on.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves the star preview one step up, starting at one star.
    pub fn preview_next(&mut self) {
        self.preview = Some(self.preview.map_or(Score::LOWEST, Score::saturating_up));
    }

    /// Moves the star preview one step down, starting at one star.
    pub fn preview_previous(&mut self) {
        self.preview = Some(self.preview.map_or(Score::LOWEST, Score::saturating_down));
    }

    /// Chooses a score and advances to the feedback form.
    ///
    /// The preview is picker-local and does not survive leaving the picker.
    pub fn choose(&mut self, score: Score) {
        self.selected = Some(score);
        self.preview = None;
        self.phase = CapturePhase::Commenting;
        self.bump_generation();
    }

    /// Chooses the previewed score, if one is previewed.
    pub fn choose_previewed(&mut self) {
        if let Some(score) = self.preview {
            self.choose(score);
        }
    }

    /// Clears the transient star preview.
    ///
    /// Call this when focus leaves the star picker.
    pub const fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Types a character into the focused field.
    ///
    /// Characters beyond the field's limit are dropped.
    pub fn push_char(&mut self, character: char) {
        let (field, limit) = match self.focus {
            FormField::Name => (&mut self.name, MAX_NAME_CHARS),
            FormField::Feedback => (&mut self.feedback, MAX_FEEDBACK_CHARS),
        };
        if field.chars().count() < limit {
            field.push(character);
        }
    }

    /// Deletes the last character of the focused field, if present.
    pub fn backspace(&mut self) {
        let field = match self.focus {
            FormField::Name => &mut self.name,
            FormField::Feedback => &mut self.feedback,
        };
        let _ = field.pop();
    }

    /// Moves focus to the other form field.
    pub const fn focus_next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Feedback,
            FormField::Feedback => FormField::Name,
        };
    }

    /// Submits the form, producing the new rating to store.
    ///
    /// Both drafts are trimmed and must be non-empty; a failed validation
    /// records which fields are missing, keeps the commenting phase, and
    /// yields nothing. Returns `None` as well when no score has been chosen,
    /// which only happens if a submit message arrives outside the commenting
    /// phase.
    pub fn submit(&mut self) -> Option<NewRating> {
        let score = self.selected?;
        let author = normalize_draft(&self.name);
        let comment = normalize_draft(&self.feedback);

        self.errors = FieldErrors {
            name_missing: author.is_none(),
            feedback_missing: comment.is_none(),
        };
        if !self.errors.is_empty() {
            return None;
        }

        self.phase = CapturePhase::Submitted;
        self.bump_generation();
        Some(NewRating {
            score,
            comment,
            author,
        })
    }

    /// Abandons the form and returns to a fresh star picker.
    pub fn cancel(&mut self) {
        self.selected = None;
        self.name.clear();
        self.feedback.clear();
        self.focus = FormField::default();
        self.errors = FieldErrors::default();
        self.phase = CapturePhase::Picking;
        self.bump_generation();
    }

    /// Resets the whole flow back to a fresh star picker.
    pub fn reset(&mut self) {
        let generation = self.generation;
        *self = Self::new();
        self.generation = generation;
        self.bump_generation();
    }

    const fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

/// Trims a draft, mapping whitespace-only input to `None`.
fn normalize_draft(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: u8) -> Score {
        Score::new(value).expect("valid score")
    }

    #[test]
    fn new_state_starts_on_the_picker_with_nothing_chosen() {
        let state = CaptureState::new();
        assert_eq!(state.phase(), CapturePhase::Picking);
        assert_eq!(state.preview(), None);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn preview_starts_at_one_star_and_saturates() {
        let mut state = CaptureState::new();

        state.preview_next();
        assert_eq!(state.preview(), Some(score(1)));

        for _ in 0..10 {
            state.preview_next();
        }
        assert_eq!(state.preview(), Some(score(5)));

        for _ in 0..10 {
            state.preview_previous();
        }
        assert_eq!(state.preview(), Some(score(1)));
    }

    #[test]
    fn choosing_a_score_advances_to_the_form() {
        let mut state = CaptureState::new();
        state.choose(score(4));

        assert_eq!(state.phase(), CapturePhase::Commenting);
        assert_eq!(state.selected(), Some(score(4)));
    }

    #[test]
    fn choosing_clears_the_transient_preview() {
        let mut state = CaptureState::new();
        state.preview_next();
        state.choose_previewed();

        assert_eq!(state.selected(), Some(score(1)));
        assert_eq!(state.preview(), None);

        state.cancel();
        assert_eq!(state.preview(), None);
    }

    #[test]
    fn choose_previewed_does_nothing_without_a_preview() {
        let mut state = CaptureState::new();
        state.choose_previewed();
        assert_eq!(state.phase(), CapturePhase::Picking);
    }

    #[test]
    fn typing_targets_the_focused_field() {
        let mut state = CaptureState::new();
        state.choose(score(5));

        state.push_char('a');
        state.focus_next_field();
        state.push_char('h');
        state.push_char('i');

        assert_eq!(state.name(), "a");
        assert_eq!(state.feedback(), "hi");

        state.backspace();
        assert_eq!(state.feedback(), "h");
    }

    #[test]
    fn fields_stop_accepting_input_at_their_limits() {
        let mut state = CaptureState::new();
        state.choose(score(3));

        for _ in 0..(MAX_NAME_CHARS + 10) {
            state.push_char('x');
        }
        assert_eq!(state.name().chars().count(), MAX_NAME_CHARS);
    }

    fn type_text(state: &mut CaptureState, text: &str) {
        for ch in text.chars() {
            state.push_char(ch);
        }
    }

    #[test]
    fn submit_trims_both_drafts() {
        let mut state = CaptureState::new();
        state.choose(score(4));
        type_text(&mut state, " alice ");
        state.focus_next_field();
        type_text(&mut state, " nice site ");

        let submission = state.submit().expect("submission");
        assert_eq!(submission.score, score(4));
        assert_eq!(submission.author.as_deref(), Some("alice"));
        assert_eq!(submission.comment.as_deref(), Some("nice site"));
        assert_eq!(state.phase(), CapturePhase::Submitted);
        assert!(state.errors().is_empty());
    }

    #[test]
    fn submit_with_both_fields_blank_reports_both_failures() {
        let mut state = CaptureState::new();
        state.choose(score(3));

        assert_eq!(state.submit(), None);
        assert_eq!(state.phase(), CapturePhase::Commenting);
        assert!(state.errors().name_missing);
        assert!(state.errors().feedback_missing);
    }

    #[test]
    fn whitespace_only_feedback_fails_validation() {
        let mut state = CaptureState::new();
        state.choose(score(5));
        type_text(&mut state, "alice");
        state.focus_next_field();
        type_text(&mut state, "   ");

        assert_eq!(state.submit(), None);
        assert_eq!(state.phase(), CapturePhase::Commenting);
        assert!(!state.errors().name_missing);
        assert!(state.errors().feedback_missing);
    }

    #[test]
    fn submit_without_a_score_yields_nothing() {
        let mut state = CaptureState::new();
        assert_eq!(state.submit(), None);
        assert_eq!(state.phase(), CapturePhase::Picking);
    }

    #[test]
    fn cancel_returns_to_the_picker_and_clears_drafts_and_errors() {
        let mut state = CaptureState::new();
        state.choose(score(2));
        state.push_char('a');
        let _ = state.submit();
        assert!(state.errors().feedback_missing);

        state.cancel();

        assert_eq!(state.phase(), CapturePhase::Picking);
        assert_eq!(state.selected(), None);
        assert_eq!(state.name(), "");
        assert!(state.errors().is_empty());
    }

    fn fill_and_submit(state: &mut CaptureState, value: u8) -> Option<NewRating> {
        state.choose(score(value));
        type_text(state, "pat");
        state.focus_next_field();
        type_text(state, "fine");
        state.submit()
    }

    #[test]
    fn transitions_bump_the_generation() {
        let mut state = CaptureState::new();
        let initial = state.generation();

        state.choose(score(5));
        let after_choose = state.generation();
        assert_ne!(after_choose, initial);

        type_text(&mut state, "pat");
        state.focus_next_field();
        type_text(&mut state, "fine");
        assert!(state.submit().is_some());
        let after_submit = state.generation();
        assert_ne!(after_submit, after_choose);

        state.reset();
        assert_ne!(state.generation(), after_submit);
    }

    #[test]
    fn reset_restores_a_fresh_picker() {
        let mut state = CaptureState::new();
        assert!(fill_and_submit(&mut state, 1).is_some());

        state.reset();

        assert_eq!(state.phase(), CapturePhase::Picking);
        assert_eq!(state.selected(), None);
        assert_eq!(state.feedback(), "");
    }
}
