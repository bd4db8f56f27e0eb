//! Rating domain: record model, canonical store, and derived statistics.

mod model;
mod stats;
mod store;

pub use model::{DisplayRating, InvalidScore, NewRating, Rating, Score};
pub use stats::{
    HistogramBucket, ScoreFilter, average, filter_and_sort, filter_and_sort_indices, histogram,
    maximum,
};
pub use store::{RATINGS_KEY, RatingStore};
