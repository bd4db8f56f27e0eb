//! Confirmation dialog state for destructive actions.

/// A pending yes/no confirmation shown over the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    /// Dialog title line.
    pub title: String,
    /// Explanation of what accepting will do.
    pub message: String,
}

impl ConfirmDialog {
    /// Builds the confirmation shown before clearing every stored rating.
    #[must_use]
    pub fn clear_ratings(count: usize) -> Self {
        let noun = if count == 1 { "rating" } else { "ratings" };
        Self {
            title: "Clear all ratings?".to_owned(),
            message: format!("This permanently deletes {count} {noun}."),
        }
    }
}
