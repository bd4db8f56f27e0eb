//! The canonical rating collection and its persistence bridge.
//!
//! [`RatingStore`] is the single source of truth for ratings within one
//! session. Every mutation re-serializes the whole collection to the backing
//! [`KeyValueStore`] under one fixed key; there is no incremental persistence
//! and no transaction log. That rewrite-everything contract is observable
//! (tests inspect the stored blob) and intentional at this collection size.

use chrono::Utc;
use uuid::Uuid;

use crate::persistence::{KeyValueStore, MemoryStore, PersistenceError};

use super::model::{NewRating, Rating};

/// Fixed key the rating collection is persisted under.
pub const RATINGS_KEY: &str = "website-ratings";

/// Owner of the canonical rating collection.
///
/// Constructed once at the application's composition point and handed to the
/// UI by value; readers get an immutable view through [`RatingStore::ratings`]
/// and never mutate records directly.
pub struct RatingStore {
    backend: Box<dyn KeyValueStore>,
    ratings: Vec<Rating>,
}

impl RatingStore {
    /// Opens the store, rehydrating any previously persisted collection.
    ///
    /// A missing blob yields an empty collection. A blob that fails to parse
    /// as the expected shape is treated as corruption: it is logged, the key
    /// is removed, and the store starts empty. Neither case is surfaced to
    /// the caller.
    #[must_use]
    pub fn open(backend: Box<dyn KeyValueStore>) -> Self {
        let ratings = rehydrate(backend.as_ref());
        Self { backend, ratings }
    }

    /// Creates a store with no durable backing.
    ///
    /// Used when no storage directory is available; contents last for the
    /// session only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStore::new()))
    }

    /// Returns a read-only view of the collection in insertion order.
    #[must_use]
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Returns the number of ratings in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Returns true when the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Appends a new rating, synthesizing its id and timestamp, and persists
    /// the full collection.
    ///
    /// The in-memory append always takes effect; a persistence failure is
    /// reported but does not roll it back, so the session keeps working with
    /// the data the user just entered.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when writing the collection fails.
    pub fn add(&mut self, new_rating: NewRating) -> Result<(), PersistenceError> {
        let rating = Rating {
            id: Some(Uuid::new_v4().to_string()),
            score: new_rating.score,
            comment: new_rating.comment,
            author: new_rating.author,
            timestamp: Some(Utc::now().timestamp_millis()),
        };
        self.ratings.push(rating);
        self.persist()
    }

    /// Empties the collection and persists the empty state.
    ///
    /// Idempotent: clearing an already-empty store rewrites the same empty
    /// blob. Confirmation is a UI concern layered above this call.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when writing the empty collection fails.
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.ratings.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), PersistenceError> {
        let blob =
            serde_json::to_vec(&self.ratings).map_err(|error| PersistenceError::WriteFailed {
                key: RATINGS_KEY.to_owned(),
                message: error.to_string(),
            })?;
        tracing::debug!(
            count = self.ratings.len(),
            "persisting rating collection under '{RATINGS_KEY}'"
        );
        self.backend.set(RATINGS_KEY, &blob)
    }
}

impl std::fmt::Debug for RatingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingStore")
            .field("ratings", &self.ratings.len())
            .finish_non_exhaustive()
    }
}

/// Loads the persisted collection, recovering locally from every failure.
///
/// Corrupt data is discarded (and its key removed) rather than surfaced; a
/// backend read failure degrades to an empty collection. Startup never fails
/// because of bad stored state.
fn rehydrate(backend: &dyn KeyValueStore) -> Vec<Rating> {
    let blob = match backend.get(RATINGS_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!("failed to read stored ratings, starting empty: {error}");
            return Vec::new();
        }
    };

    serde_json::from_slice(&blob).unwrap_or_else(|error| {
        tracing::warn!("discarding corrupt rating data under '{RATINGS_KEY}': {error}");
        if let Err(remove_error) = backend.remove(RATINGS_KEY) {
            tracing::warn!("failed to remove corrupt rating data: {remove_error}");
        }
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::persistence::MockKeyValueStore;
    use crate::ratings::model::Score;

    use super::*;

    fn submission(score: u8, comment: &str) -> NewRating {
        NewRating {
            score: Score::new(score).expect("valid score"),
            comment: Some(comment.to_owned()),
            author: Some("alice".to_owned()),
        }
    }

    fn shared_backend() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }

    fn stored_ratings(backend: &MemoryStore) -> Vec<Rating> {
        let blob = backend
            .get(RATINGS_KEY)
            .expect("read blob")
            .expect("blob present");
        serde_json::from_slice(&blob).expect("valid blob")
    }

    #[test]
    fn open_with_empty_backend_starts_empty() {
        let store = RatingStore::open(Box::new(MemoryStore::new()));
        assert!(store.is_empty());
    }

    #[test]
    fn add_synthesizes_id_and_timestamp() {
        let mut store = RatingStore::in_memory();
        store.add(submission(4, "Nice site")).expect("add");

        let rating = store.ratings().first().expect("one rating");
        let id = rating.id.as_deref().expect("id assigned");
        assert!(Uuid::parse_str(id).is_ok(), "id should be a uuid: {id}");
        assert!(rating.timestamp.expect("timestamp assigned") > 0);
        assert_eq!(rating.comment.as_deref(), Some("Nice site"));
        assert_eq!(rating.author.as_deref(), Some("alice"));
    }

    #[test]
    fn every_mutation_rewrites_the_whole_blob() {
        let backend = shared_backend();
        let mut store = RatingStore::open(Box::new(Arc::clone(&backend)));

        store.add(submission(5, "first")).expect("add");
        assert_eq!(stored_ratings(&backend).len(), 1);

        store.add(submission(3, "second")).expect("add");
        let stored = stored_ratings(&backend);
        assert_eq!(stored.len(), 2);
        assert_eq!(stored.first().map(|r| r.score.value()), Some(5));
    }

    #[test]
    fn reopen_rehydrates_persisted_collection() {
        let backend = shared_backend();
        {
            let mut store = RatingStore::open(Box::new(Arc::clone(&backend)));
            store.add(submission(2, "round trip")).expect("add");
        }

        let reopened = RatingStore::open(Box::new(Arc::clone(&backend)));
        assert_eq!(reopened.len(), 1);
        let rating = reopened.ratings().first().expect("one rating");
        assert_eq!(rating.score.value(), 2);
        assert_eq!(rating.comment.as_deref(), Some("round trip"));
        assert!(rating.id.is_some());
        assert!(rating.timestamp.is_some());
    }

    #[test]
    fn corrupt_blob_resets_to_empty_and_removes_key() {
        let backend = shared_backend();
        backend.set(RATINGS_KEY, b"{not valid json").expect("seed corrupt blob");

        let store = RatingStore::open(Box::new(Arc::clone(&backend)));
        assert!(store.is_empty());
        assert_eq!(backend.get(RATINGS_KEY), Ok(None));
    }

    #[test]
    fn out_of_range_score_in_blob_counts_as_corruption() {
        let backend = shared_backend();
        backend
            .set(RATINGS_KEY, br#"[{"score":9}]"#)
            .expect("seed invalid blob");

        let store = RatingStore::open(Box::new(Arc::clone(&backend)));
        assert!(store.is_empty());
        assert_eq!(backend.get(RATINGS_KEY), Ok(None));
    }

    #[test]
    fn clear_is_idempotent_and_persists_empty_array() {
        let backend = shared_backend();
        let mut store = RatingStore::open(Box::new(Arc::clone(&backend)));
        store.add(submission(5, "to be cleared")).expect("add");

        store.clear().expect("first clear");
        store.clear().expect("second clear");

        assert!(store.is_empty());
        assert_eq!(backend.get(RATINGS_KEY), Ok(Some(b"[]".to_vec())));
    }

    #[test]
    fn write_failure_is_surfaced_but_keeps_memory_state() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|_| Ok(None));
        backend.expect_set().returning(|key, _| {
            Err(PersistenceError::WriteFailed {
                key: key.to_owned(),
                message: "disk full".to_owned(),
            })
        });

        let mut store = RatingStore::open(Box::new(backend));
        let result = store.add(submission(4, "kept in memory"));

        assert!(matches!(
            result,
            Err(PersistenceError::WriteFailed { .. })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn backend_read_failure_degrades_to_empty() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|key| {
            Err(PersistenceError::ReadFailed {
                key: key.to_owned(),
                message: "permission denied".to_owned(),
            })
        });

        let store = RatingStore::open(Box::new(backend));
        assert!(store.is_empty());
    }
}
