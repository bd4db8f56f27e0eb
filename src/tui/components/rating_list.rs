//! Rating list component for the dashboard.
//!
//! Renders a scrollable, filtered list of ratings with cursor highlighting,
//! newest first. Each line shows the stars, submission time, author, and a
//! one-line feedback preview.

use unicode_width::UnicodeWidthChar;

use crate::ratings::{DisplayRating, Rating};

/// Default visible height for the rating list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Maximum visible width of the feedback preview.
const FEEDBACK_PREVIEW_WIDTH: usize = 50;

/// Context for rendering the rating list view.
///
/// Bundles the data needed to render a filtered list of ratings without
/// requiring per-frame allocations.
#[derive(Debug, Clone)]
pub struct RatingListViewContext<'a> {
    /// Full slice of all ratings in insertion order.
    pub ratings: &'a [Rating],
    /// Indices of ratings matching the current filter, newest first.
    pub filtered_indices: &'a [usize],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of lines scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in lines.
    pub visible_height: usize,
}

/// Component for displaying a list of ratings.
#[derive(Debug, Clone)]
pub struct RatingListComponent {
    visible_height: usize,
}

impl Default for RatingListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingListComponent {
    /// Creates a new rating list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Renders the rating list as a string.
    ///
    /// Only renders ratings within the visible window (based on scroll
    /// offset and visible height) for performance with large lists.
    #[must_use]
    pub fn view(&self, ctx: &RatingListViewContext<'_>) -> String {
        if ctx.filtered_indices.is_empty() {
            return "  No ratings found.\n".to_owned();
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let start = ctx.scroll_offset;
        let end = (ctx.scroll_offset + visible_height).min(ctx.filtered_indices.len());

        let mut output = String::new();
        for (display_index, &rating_index) in ctx
            .filtered_indices
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            let Some(rating) = ctx.ratings.get(rating_index) else {
                continue;
            };
            let prefix = if display_index == ctx.cursor_position {
                ">"
            } else {
                " "
            };
            output.push_str(&Self::format_rating_line(rating, prefix));
            output.push('\n');
        }

        output
    }

    /// Formats a single rating line for display.
    fn format_rating_line(rating: &Rating, prefix: &str) -> String {
        let display = DisplayRating::from(rating);
        let stars: String = (1..=5)
            .map(|value| if value <= display.rating { '★' } else { '☆' })
            .collect();
        let author = display.author.as_deref().unwrap_or("anonymous");
        let feedback = display
            .feedback
            .as_deref()
            .map(|text| truncate_feedback(text, FEEDBACK_PREVIEW_WIDTH))
            .unwrap_or_default();

        format!("{prefix} {stars}  {}  [{author}]  {feedback}", display.timestamp)
    }
}

/// Truncates feedback text to a maximum display width, adding an ellipsis.
///
/// Takes the first line only and measures display width rather than bytes so
/// wide characters cannot push the line past the column budget.
fn truncate_feedback(feedback: &str, max_width: usize) -> String {
    let first_line = feedback.lines().next().unwrap_or("").trim();

    let mut output = String::new();
    let mut used = 0usize;
    for ch in first_line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > max_width.saturating_sub(1) {
            output.push('…');
            return output;
        }
        output.push(ch);
        used = used.saturating_add(char_width);
    }

    output
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use crate::ratings::Score;

    use super::*;

    fn rating(score: u8, author: Option<&str>, feedback: Option<&str>) -> Rating {
        Rating {
            id: None,
            score: Score::new(score).expect("valid score"),
            comment: feedback.map(ToOwned::to_owned),
            author: author.map(ToOwned::to_owned),
            timestamp: Some(0),
        }
    }

    #[fixture]
    fn two_ratings() -> Vec<Rating> {
        vec![
            rating(5, Some("alice"), Some("Loved it")),
            rating(2, None, None),
        ]
    }

    #[test]
    fn view_shows_empty_message_when_no_ratings_match() {
        let component = RatingListComponent::new();
        let ctx = RatingListViewContext {
            ratings: &[],
            filtered_indices: &[],
            cursor_position: 0,
            scroll_offset: 0,
            visible_height: 10,
        };
        assert!(component.view(&ctx).contains("No ratings found."));
    }

    #[rstest]
    fn view_shows_cursor_indicator(two_ratings: Vec<Rating>) {
        let component = RatingListComponent::new();
        let filtered_indices = vec![0, 1];
        let ctx = RatingListViewContext {
            ratings: &two_ratings,
            filtered_indices: &filtered_indices,
            cursor_position: 1,
            scroll_offset: 0,
            visible_height: 10,
        };
        let output = component.view(&ctx);

        assert!(output.contains("  ★★★★★"));
        assert!(output.contains("> ★★☆☆☆"));
    }

    #[rstest]
    fn format_line_includes_all_fields(two_ratings: Vec<Rating>) {
        let first = two_ratings.first().expect("fixture rating");
        let line = RatingListComponent::format_rating_line(first, " ");

        assert!(line.contains("★★★★★"));
        assert!(line.contains("1970-01-01T00:00:00.000Z"));
        assert!(line.contains("[alice]"));
        assert!(line.contains("Loved it"));
    }

    #[rstest]
    fn missing_author_renders_as_anonymous(two_ratings: Vec<Rating>) {
        let second = two_ratings.get(1).expect("fixture rating");
        let line = RatingListComponent::format_rating_line(second, " ");
        assert!(line.contains("[anonymous]"));
    }

    #[test]
    fn truncate_feedback_shortens_long_text() {
        let long_text = "This is a very long comment that should be truncated for the list";
        let truncated = truncate_feedback(long_text, 20);
        assert!(truncated.ends_with('…'));
        assert!(truncated.chars().count() <= 20);
    }

    #[test]
    fn truncate_feedback_takes_first_line_only() {
        let multiline = "First line\nSecond line";
        assert_eq!(truncate_feedback(multiline, 50), "First line");
    }
}
