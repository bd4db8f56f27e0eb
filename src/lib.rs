//! Kudos library crate providing terminal-based website feedback capture.
//!
//! The library stores 1-5 star ratings with optional feedback text, derives
//! aggregate statistics over the collection, and presents both a capture
//! flow and a dashboard through a terminal user interface.

pub mod cli;
pub mod config;
pub mod persistence;
pub mod ratings;
pub mod tui;

pub use cli::LaunchError;
pub use config::KudosConfig;
pub use persistence::{DirectoryStore, KeyValueStore, MemoryStore, PersistenceError};
pub use ratings::{NewRating, Rating, RatingStore, Score, ScoreFilter};
