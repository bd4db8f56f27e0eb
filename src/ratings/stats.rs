//! Pure statistics and filtering over a rating collection snapshot.
//!
//! Every function here is stateless and deterministic: it takes a slice of
//! ratings and derives a value without side effects, so the dashboard can
//! recompute its view on every render pass.

use super::model::{Rating, Score};

/// Filter criteria for the rating list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreFilter {
    /// Include every rating.
    #[default]
    All,
    /// Include only ratings with exactly this score.
    Only(Score),
}

impl ScoreFilter {
    /// Returns true if this filter matches the given rating.
    #[must_use]
    pub fn matches(self, rating: &Rating) -> bool {
        match self {
            Self::All => true,
            Self::Only(score) => rating.score == score,
        }
    }

    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::All => "All".to_owned(),
            Self::Only(score) if score.value() == 1 => "1 star".to_owned(),
            Self::Only(score) => format!("{score} stars"),
        }
    }
}

/// One slot of the five-bucket score distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBucket {
    /// The score this bucket counts.
    pub score: Score,
    /// Number of ratings with this score.
    pub count: usize,
    /// Share of the whole collection, in percent (0.0 for an empty one).
    pub percent: f64,
}

impl HistogramBucket {
    /// Formats the percentage to one decimal place, e.g. `"33.3"`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.1}", self.percent)
    }
}

/// Arithmetic mean of all scores, formatted to one decimal place.
///
/// Returns `"0.0"` for an empty collection.
#[must_use]
pub fn average(ratings: &[Rating]) -> String {
    if ratings.is_empty() {
        return "0.0".to_owned();
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(r.score.value())).sum();
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "Mean of scores bounded by 5 * collection length fits f64 comfortably"
    )]
    let mean = f64::from(sum) / ratings.len() as f64;
    format!("{mean:.1}")
}

/// Highest score present, or 0 for an empty collection.
#[must_use]
pub fn maximum(ratings: &[Rating]) -> u8 {
    ratings
        .iter()
        .map(|rating| rating.score.value())
        .max()
        .unwrap_or(0)
}

/// Five-bucket score distribution with per-bucket percentages.
///
/// Bucket counts always sum to the collection length; percentages are 0 for
/// an empty collection.
#[must_use]
pub fn histogram(ratings: &[Rating]) -> [HistogramBucket; 5] {
    Score::ALL.map(|score| {
        let count = ratings
            .iter()
            .filter(|rating| rating.score == score)
            .count();
        let percent = if ratings.is_empty() {
            0.0
        } else {
            #[expect(
                clippy::cast_precision_loss,
                clippy::float_arithmetic,
                reason = "Bucket share of a small collection is well within f64 precision"
            )]
            let share = 100.0 * count as f64 / ratings.len() as f64;
            share
        };
        HistogramBucket {
            score,
            count,
            percent,
        }
    })
}

/// Applies `filter` and orders the survivors newest-first.
///
/// Ratings without a timestamp sort as the epoch (oldest). The sort is
/// stable, so entries with equal timestamps keep their insertion order.
#[must_use]
pub fn filter_and_sort(ratings: &[Rating], filter: ScoreFilter) -> Vec<&Rating> {
    let mut selected: Vec<&Rating> = ratings
        .iter()
        .filter(|rating| filter.matches(rating))
        .collect();
    selected.sort_by(|a, b| b.timestamp_millis().cmp(&a.timestamp_millis()));
    selected
}

/// Index-based variant of [`filter_and_sort`] for cursor bookkeeping.
///
/// Returns positions into `ratings` in the same order `filter_and_sort`
/// would return the records themselves.
#[must_use]
pub fn filter_and_sort_indices(ratings: &[Rating], filter: ScoreFilter) -> Vec<usize> {
    let mut selected: Vec<usize> = ratings
        .iter()
        .enumerate()
        .filter(|(_, rating)| filter.matches(rating))
        .map(|(index, _)| index)
        .collect();
    selected.sort_by(|&a, &b| {
        let left = ratings.get(b).map_or(0, Rating::timestamp_millis);
        let right = ratings.get(a).map_or(0, Rating::timestamp_millis);
        left.cmp(&right)
    });
    selected
}
