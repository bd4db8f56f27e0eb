//! Star row component for the rating picker.
//!
//! Renders the five-star row with filled stars up to the highlighted score
//! and brackets marking the previewed position.

use crate::ratings::Score;

/// Context for rendering the star row.
#[derive(Debug, Clone, Copy)]
pub struct StarRowViewContext {
    /// Score currently previewed by keyboard navigation, if any.
    pub preview: Option<Score>,
    /// Score the user has committed to, if any.
    pub selected: Option<Score>,
}

/// Component for displaying the interactive five-star row.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarRowComponent;

impl StarRowComponent {
    /// Renders the star row as a single line.
    ///
    /// Stars up to the highlighted score render filled; the previewed star
    /// is wrapped in brackets so keyboard position stays visible even when
    /// a score is already selected.
    #[must_use]
    pub fn view(ctx: &StarRowViewContext) -> String {
        let highlight = ctx.selected.or(ctx.preview);
        let mut output = String::new();

        for score in Score::ALL {
            let filled = highlight.is_some_and(|h| score <= h);
            let symbol = if filled { '★' } else { '☆' };
            let marked = ctx.preview == Some(score);
            if marked {
                output.push('[');
                output.push(symbol);
                output.push(']');
            } else {
                output.push(' ');
                output.push(symbol);
                output.push(' ');
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: u8) -> Score {
        Score::new(value).expect("valid score")
    }

    #[test]
    fn empty_row_shows_five_hollow_stars() {
        let row = StarRowComponent::view(&StarRowViewContext {
            preview: None,
            selected: None,
        });
        assert_eq!(row.matches('☆').count(), 5);
        assert_eq!(row.matches('★').count(), 0);
    }

    #[test]
    fn preview_fills_stars_up_to_the_previewed_score() {
        let row = StarRowComponent::view(&StarRowViewContext {
            preview: Some(score(3)),
            selected: None,
        });
        assert_eq!(row.matches('★').count(), 3);
        assert_eq!(row.matches('☆').count(), 2);
        assert!(row.contains("[★]"));
    }

    #[test]
    fn selection_wins_over_a_lower_preview_for_fill() {
        let row = StarRowComponent::view(&StarRowViewContext {
            preview: Some(score(2)),
            selected: Some(score(4)),
        });
        assert_eq!(row.matches('★').count(), 4);
    }
}
