//! # Document Store
//!
//! Generic load/save of named JSON documents to durable flat files.
//!
//! ## Persistence Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Whole-Document Persistence                          │
//! │                                                                         │
//! │  load("payments", default)                                             │
//! │       │                                                                 │
//! │       ├── <dir>/payments.json exists? ── no ──► return default         │
//! │       │                                         (nothing written!)     │
//! │       ▼                                                                 │
//! │  parse as T ── fails ──► StoreError::Malformed (no auto-repair)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  document                                                              │
//! │                                                                         │
//! │  save("payments", &doc)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write <dir>/payments.json.tmp                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rename over <dir>/payments.json   ← atomic on POSIX                   │
//! │                                                                         │
//! │  Readers never observe a partially written document; a failed save     │
//! │  leaves the prior version intact. Each save fully supersedes the       │
//! │  previous document - no merge, no versioning.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// Flat-file JSON document store.
///
/// One file per key: `<dir>/<key>.json`, pretty-printed (the documents
/// are small and operators do read them by hand).
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    /// Creates a store rooted at `dir`.
    ///
    /// The directory itself is created on the first save, not here:
    /// constructing a store (or loading from it) must have no side
    /// effects on disk.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DocumentStore { dir: dir.into() }
    }

    /// Returns the file path backing a document key.
    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Loads a document, falling back to `default` when none was ever
    /// saved.
    ///
    /// ## Guarantees
    /// - A missing file yields `default()` and writes **nothing** - a
    ///   pure read can never create a persisted artifact.
    /// - A present-but-unparsable file is a fatal
    ///   [`StoreError::Malformed`]; the store never auto-repairs or
    ///   silently replaces existing data.
    pub async fn load<T: DeserializeOwned>(
        &self,
        key: &str,
        default: impl FnOnce() -> T,
    ) -> StoreResult<T> {
        let path = self.path(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, "document absent, using default");
                return Ok(default());
            }
            Err(err) => return Err(StoreError::io(key, err)),
        };

        let doc = serde_json::from_slice(&bytes).map_err(|err| {
            warn!(key, path = %path.display(), %err, "stored document failed to parse");
            StoreError::malformed(key, err)
        })?;

        debug!(key, bytes = bytes.len(), "document loaded");
        Ok(doc)
    }

    /// Saves a document with an atomic whole-file replacement.
    ///
    /// The document is serialized in full, written to a sibling temp
    /// file, and renamed into place. Rename is atomic on the
    /// filesystems we target, so a crash mid-save leaves either the old
    /// or the new document - never a mix.
    pub async fn save<T: Serialize>(&self, key: &str, doc: &T) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(doc).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|err| StoreError::io(key, err))?;

        let path = self.path(key);
        let tmp = tmp_path(&path);

        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|err| StoreError::io(key, err))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|err| StoreError::io(key, err))?;

        debug!(key, bytes = json.len(), "document saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}
