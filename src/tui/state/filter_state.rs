//! Filter and cursor state for the dashboard rating list.
//!
//! Tracks which ratings are displayed and the user's position within the
//! filtered list. Cursor position is retained when filters change, clamped
//! to the new list length.

use crate::ratings::{Score, ScoreFilter};

/// State managing the active filter and cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Currently active filter.
    pub active_filter: ScoreFilter,
    /// Current cursor position (0-indexed) within the filtered list.
    pub cursor_position: usize,
    /// Scroll offset for virtual scrolling (lines scrolled from top).
    pub scroll_offset: usize,
}

impl FilterState {
    /// Creates a new filter state showing all ratings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next filter in the cycle: All, 1 star through 5 stars,
    /// then back to All.
    #[must_use]
    pub fn next_filter(&self) -> ScoreFilter {
        match self.active_filter {
            ScoreFilter::All => ScoreFilter::Only(Score::LOWEST),
            ScoreFilter::Only(score) if score.value() < Score::MAX => {
                ScoreFilter::Only(score.saturating_up())
            }
            ScoreFilter::Only(_) => ScoreFilter::All,
        }
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor is set to 0. If cursor exceeds the list
    /// length, it is set to the last valid index.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count - 1;
        }
    }

    /// Moves the cursor up by one position if possible.
    pub const fn cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Moves the cursor down by one position if within bounds.
    pub const fn cursor_down(&mut self, max_index: usize) {
        if self.cursor_position < max_index {
            self.cursor_position = self.cursor_position.saturating_add(1);
        }
    }

    /// Moves the cursor to the first item.
    pub const fn home(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last item.
    pub const fn end(&mut self, max_index: usize) {
        self.cursor_position = max_index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: u8) -> Score {
        Score::new(value).expect("valid score")
    }

    #[test]
    fn cycle_walks_all_then_each_score_then_back() {
        let mut state = FilterState::new();

        let mut seen = vec![state.active_filter];
        for _ in 0..6 {
            state.active_filter = state.next_filter();
            seen.push(state.active_filter);
        }

        assert_eq!(
            seen,
            vec![
                ScoreFilter::All,
                ScoreFilter::Only(score(1)),
                ScoreFilter::Only(score(2)),
                ScoreFilter::Only(score(3)),
                ScoreFilter::Only(score(4)),
                ScoreFilter::Only(score(5)),
                ScoreFilter::All,
            ]
        );
    }

    #[test]
    fn clamp_cursor_sets_to_zero_when_empty() {
        let mut state = FilterState {
            cursor_position: 5,
            ..FilterState::default()
        };
        state.clamp_cursor(0);
        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn clamp_cursor_reduces_to_last_valid_index() {
        let mut state = FilterState {
            cursor_position: 10,
            ..FilterState::default()
        };
        state.clamp_cursor(5);
        assert_eq!(state.cursor_position, 4);
    }

    #[test]
    fn cursor_navigation_respects_bounds() {
        let mut state = FilterState::new();

        state.cursor_up();
        assert_eq!(state.cursor_position, 0);

        state.cursor_down(2);
        state.cursor_down(2);
        state.cursor_down(2);
        assert_eq!(state.cursor_position, 2);

        state.home();
        assert_eq!(state.cursor_position, 0);

        state.end(2);
        assert_eq!(state.cursor_position, 2);
    }
}
