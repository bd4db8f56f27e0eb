//! Filesystem-backed key-value store.
//!
//! Each key maps to one file inside a storage directory opened through
//! cap-std, so all access stays scoped to that directory. Values are written
//! whole; there is no incremental update path, matching the store's
//! rewrite-everything persistence contract.

use std::io;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::error::PersistenceError;
use super::KeyValueStore;

/// Key-value store keeping one file per key under a single directory.
#[derive(Debug)]
pub struct DirectoryStore {
    dir: Dir,
    path: String,
}

impl DirectoryStore {
    /// Opens the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::OpenFailed`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> Result<Self, PersistenceError> {
        let dir = open_or_create_dir(path).map_err(|error| PersistenceError::OpenFailed {
            path: path.to_string(),
            message: error.to_string(),
        })?;
        Ok(Self {
            dir,
            path: path.to_string(),
        })
    }

    /// Returns the directory path this store was opened at.
    #[must_use]
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    fn file_name(key: &str) -> String {
        sanitize_key(key)
    }
}

impl KeyValueStore for DirectoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        match self.dir.read(Self::file_name(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(PersistenceError::ReadFailed {
                key: key.to_owned(),
                message: error.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), PersistenceError> {
        self.dir
            .write(Self::file_name(key), value)
            .map_err(|error| PersistenceError::WriteFailed {
                key: key.to_owned(),
                message: error.to_string(),
            })
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        match self.dir.remove_file(Self::file_name(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(PersistenceError::RemoveFailed {
                key: key.to_owned(),
                message: error.to_string(),
            }),
        }
    }
}

/// Opens `path` as a capability directory, creating it when absent.
///
/// Absolute paths are resolved from the filesystem root; relative paths from
/// the current working directory.
fn open_or_create_dir(path: &Utf8Path) -> io::Result<Dir> {
    let (base, relative) = if path.is_absolute() {
        let root = Dir::open_ambient_dir("/", ambient_authority())?;
        let relative = path
            .strip_prefix("/")
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "unresolvable path"))?;
        (root, relative)
    } else {
        let cwd = Dir::open_ambient_dir(".", ambient_authority())?;
        (cwd, path)
    };

    if relative.as_str().is_empty() || relative == Utf8Path::new(".") {
        return Ok(base);
    }

    base.create_dir_all(relative)?;
    base.open_dir(relative)
}

/// Maps a key to a safe file name.
///
/// Keys are expected to be short identifiers; anything outside the
/// alphanumeric/`-`/`_`/`.` set is replaced so a key can never escape the
/// storage directory.
fn sanitize_key(key: &str) -> String {
    const fn is_safe_for_filename(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.'
    }

    let sanitized: String = key
        .chars()
        .map(|ch| if is_safe_for_filename(ch) { ch } else { '-' })
        .collect();
    if sanitized.is_empty() {
        "-".to_owned()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    use super::*;

    fn open_temp_store() -> (TempDir, DirectoryStore) {
        let temp = TempDir::new().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp path");
        let store = DirectoryStore::open(&path).expect("open store");
        (temp, store)
    }

    #[test]
    fn get_returns_none_for_missing_key() {
        let (_temp, store) = open_temp_store();
        assert_eq!(store.get("website-ratings"), Ok(None));
    }

    #[test]
    fn set_then_get_round_trips_bytes() {
        let (_temp, store) = open_temp_store();
        store.set("website-ratings", b"[1,2,3]").expect("set");
        assert_eq!(store.get("website-ratings"), Ok(Some(b"[1,2,3]".to_vec())));
    }

    #[test]
    fn set_replaces_previous_value() {
        let (_temp, store) = open_temp_store();
        store.set("k", b"old").expect("set");
        store.set("k", b"new").expect("set");
        assert_eq!(store.get("k"), Ok(Some(b"new".to_vec())));
    }

    #[test]
    fn remove_is_idempotent() {
        let (_temp, store) = open_temp_store();
        store.set("k", b"value").expect("set");
        store.remove("k").expect("first remove");
        store.remove("k").expect("second remove");
        assert_eq!(store.get("k"), Ok(None));
    }

    #[test]
    fn open_creates_missing_directory() {
        let temp = TempDir::new().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(temp.path().join("nested/storage"))
            .expect("utf-8 temp path");
        let store = DirectoryStore::open(&path).expect("open nested store");
        store.set("k", b"v").expect("set");
        assert_eq!(store.get("k"), Ok(Some(b"v".to_vec())));
    }

    #[test]
    fn sanitize_key_replaces_path_separators() {
        assert_eq!(sanitize_key("../escape"), "..-escape");
        assert_eq!(sanitize_key("website-ratings"), "website-ratings");
        assert_eq!(sanitize_key(""), "-");
    }
}
