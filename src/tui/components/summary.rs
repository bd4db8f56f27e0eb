//! Summary component showing aggregate statistics and the score histogram.

use crate::ratings::{self, Rating};

/// Width of a full histogram bar in characters.
const BAR_WIDTH: usize = 20;

/// Context for rendering the summary block.
#[derive(Debug, Clone, Copy)]
pub struct SummaryViewContext<'a> {
    /// Full rating collection the statistics are derived from.
    pub ratings: &'a [Rating],
}

/// Component for displaying aggregate statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryComponent;

impl SummaryComponent {
    /// Renders the headline statistics and the five-bucket histogram.
    ///
    /// Histogram bars scale against the whole collection, so a bucket
    /// holding every rating renders a full-width bar.
    #[must_use]
    pub fn view(ctx: &SummaryViewContext<'_>) -> String {
        let count = ctx.ratings.len();
        let average = ratings::average(ctx.ratings);
        let highest = ratings::maximum(ctx.ratings);

        let mut output = format!("Ratings: {count}   Average: {average}   Highest: {highest}\n\n");

        for bucket in ratings::histogram(ctx.ratings).iter().rev() {
            let bar = bar_for_percent(bucket.percent);
            let percent = bucket.percent_label();
            output.push_str(&format!(
                "{} ★ |{bar:<BAR_WIDTH$}| {:>3} ({percent}%)\n",
                bucket.score, bucket.count
            ));
        }

        output
    }
}

/// Builds a bar whose length is proportional to the given percentage.
fn bar_for_percent(percent: f64) -> String {
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::float_arithmetic,
        reason = "Percent is within 0-100 and bar width is tiny"
    )]
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}
