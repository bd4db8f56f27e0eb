//! Integration tests for durable rating persistence.
//!
//! These tests exercise the public library API end to end: a rating
//! submitted through one store instance must survive reopening from the
//! same directory, and corrupt on-disk state must reset to empty without
//! failing startup.

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use kudos::ratings::{NewRating, RATINGS_KEY, RatingStore};
use kudos::{DirectoryStore, KeyValueStore, Score};

#[fixture]
fn data_dir() -> TempDir {
    TempDir::new().expect("temp dir")
}

fn dir_path(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path")
}

fn open_store(dir: &TempDir) -> RatingStore {
    let backend = DirectoryStore::open(&dir_path(dir)).expect("open backend");
    RatingStore::open(Box::new(backend))
}

fn submission(score: u8, comment: &str) -> NewRating {
    NewRating {
        score: Score::new(score).expect("valid score"),
        comment: Some(comment.to_owned()),
        author: None,
    }
}

#[rstest]
fn ratings_survive_reopening_the_directory(data_dir: TempDir) {
    {
        let mut store = open_store(&data_dir);
        store.add(submission(5, "first visit")).expect("add");
        store.add(submission(2, "second visit")).expect("add");
    }

    let reopened = open_store(&data_dir);
    assert_eq!(reopened.len(), 2);

    let first = reopened.ratings().first().expect("first rating");
    assert_eq!(first.score.value(), 5);
    assert_eq!(first.comment.as_deref(), Some("first visit"));
    assert!(first.id.is_some(), "id should be synthesized and persisted");
    assert!(first.timestamp.is_some());
}

#[rstest]
fn stored_blob_is_a_json_array_under_the_fixed_key(data_dir: TempDir) {
    let mut store = open_store(&data_dir);
    store.add(submission(4, "format check")).expect("add");
    drop(store);

    let backend = DirectoryStore::open(&dir_path(&data_dir)).expect("open backend");
    let blob = backend
        .get(RATINGS_KEY)
        .expect("read blob")
        .expect("blob present");
    let parsed: serde_json::Value = serde_json::from_slice(&blob).expect("valid json");
    let records = parsed.as_array().expect("top-level array");
    assert_eq!(records.len(), 1);
    assert_eq!(
        records.first().and_then(|r| r.get("score")),
        Some(&serde_json::json!(4))
    );
}

#[rstest]
fn corrupt_on_disk_state_resets_to_empty(data_dir: TempDir) {
    let backend = DirectoryStore::open(&dir_path(&data_dir)).expect("open backend");
    backend
        .set(RATINGS_KEY, b"definitely not json")
        .expect("seed corrupt blob");
    drop(backend);

    let store = open_store(&data_dir);
    assert!(store.is_empty());

    // The corrupt value is gone, not resurrected on the next start.
    let reopened_backend = DirectoryStore::open(&dir_path(&data_dir)).expect("open backend");
    assert_eq!(reopened_backend.get(RATINGS_KEY), Ok(None));
}

#[rstest]
fn clear_persists_across_reopen(data_dir: TempDir) {
    {
        let mut store = open_store(&data_dir);
        store.add(submission(3, "soon gone")).expect("add");
        store.clear().expect("clear");
    }

    let reopened = open_store(&data_dir);
    assert!(reopened.is_empty());
}
