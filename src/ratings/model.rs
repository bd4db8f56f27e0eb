//! Core rating data model.
//!
//! [`Rating`] is the persisted record shape; [`NewRating`] is what the
//! capture flow submits before the store synthesizes an id and timestamp;
//! [`DisplayRating`] is the transient presentation projection rebuilt on
//! every render. [`Score`] makes out-of-range values unrepresentable, so the
//! 1–5 invariant holds at the store boundary and a persisted blob carrying
//! an invalid score fails deserialization.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A star score in the closed range 1–5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

/// A score value outside the 1–5 range was supplied.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("score {value} is outside the valid range 1-5")]
pub struct InvalidScore {
    /// The rejected value.
    pub value: u8,
}

impl Score {
    /// Lowest accepted score value.
    pub const MIN: u8 = 1;
    /// Highest accepted score value.
    pub const MAX: u8 = 5;
    /// All five scores in ascending order.
    pub const ALL: [Self; 5] = [Self(1), Self(2), Self(3), Self(4), Self(5)];
    /// The one-star score.
    pub const LOWEST: Self = Self(Self::MIN);
    /// The five-star score.
    pub const HIGHEST: Self = Self(Self::MAX);

    /// Creates a score, rejecting values outside 1–5.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidScore`] when `value` is not within 1–5.
    pub const fn new(value: u8) -> Result<Self, InvalidScore> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(InvalidScore { value })
        }
    }

    /// Returns the numeric score value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the next higher score, saturating at five.
    #[must_use]
    pub const fn saturating_up(self) -> Self {
        if self.0 < Self::MAX {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// Returns the next lower score, saturating at one.
    #[must_use]
    pub const fn saturating_down(self) -> Self {
        if self.0 > Self::MIN {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl TryFrom<u8> for Score {
    type Error = InvalidScore;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted user rating.
///
/// `id` and `timestamp` are synthesized by the store at creation time; they
/// are optional in the serialized shape so blobs written by older clients
/// still parse. Records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Opaque unique token assigned at creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Star score, 1–5.
    pub score: Score,
    /// Free-text feedback supplied with the rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Name the submitter provided, when collected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Milliseconds since the Unix epoch; used only for ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Rating {
    /// Returns the timestamp for ordering purposes.
    ///
    /// A record without a timestamp sorts as the epoch, i.e. oldest.
    #[must_use]
    pub const fn timestamp_millis(&self) -> i64 {
        match self.timestamp {
            Some(millis) => millis,
            None => 0,
        }
    }
}

/// A rating submission before the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRating {
    /// Star score chosen by the user.
    pub score: Score,
    /// Free-text feedback, already trimmed by the capture flow.
    pub comment: Option<String>,
    /// Submitter name, already trimmed by the capture flow.
    pub author: Option<String>,
}

/// Read-only projection of a [`Rating`] for presentation.
///
/// Recomputed from the canonical record on every render pass; it has no
/// identity or lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRating {
    /// Numeric score for display.
    pub rating: u8,
    /// Submission time formatted as an ISO 8601 string.
    pub timestamp: String,
    /// Feedback text for display.
    pub feedback: Option<String>,
    /// Submitter name for display.
    pub author: Option<String>,
}

impl From<&Rating> for DisplayRating {
    fn from(rating: &Rating) -> Self {
        let formatted = DateTime::<Utc>::from_timestamp_millis(rating.timestamp_millis())
            .unwrap_or(DateTime::UNIX_EPOCH)
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        Self {
            rating: rating.score.value(),
            timestamp: formatted,
            feedback: rating.comment.clone(),
            author: rating.author.clone(),
        }
    }
}
