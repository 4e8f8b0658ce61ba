//! Filesystem-mirrored resume storage.
//!
//! The in-memory mapping is the sole source of truth for `get` and `list`;
//! every successful save also writes one pretty-printed JSON file under the
//! storage directory. The two sides are not reconciled: the mapping starts
//! empty each process lifetime, files left by previous runs are ignored, and
//! a failed file write leaves the already-inserted in-memory entry in place.
//! Identifiers have second granularity, so two saves inside the same second
//! overwrite one another. Both limitations are part of the storage contract.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local};
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;

/// Default storage directory, relative to the process working directory.
pub const DEFAULT_RESUME_DIR: &str = "saved_resumes";

const ID_PREFIX: &str = "resume_";
const FILE_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to serialize resume document")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Default)]
struct StoreInner {
    entries: HashMap<String, Value>,
    /// Insertion order of identifiers; an overwrite keeps its original slot.
    order: Vec<String>,
}

/// In-memory resume store with a one-file-per-document disk mirror.
///
/// Cheap to clone — handlers share the same interior through `Arc`.
#[derive(Clone)]
pub struct ResumeStore {
    inner: Arc<RwLock<StoreInner>>,
    dir: PathBuf,
}

impl ResumeStore {
    /// Creates an empty store mirroring to `dir`. The directory is created
    /// lazily on the first save, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
            dir: dir.into(),
        }
    }

    /// Saves a document: injects `id` and `saved_at`, inserts it in memory,
    /// then mirrors it to `<dir>/<id>.json`. Returns the generated identifier.
    ///
    /// Caller key order is preserved (`serde_json` runs with `preserve_order`)
    /// and the injected fields append after the caller's keys.
    ///
    /// The in-memory insert is deliberately not rolled back when the file
    /// write fails — the caller sees the error while the entry stays served
    /// by `get`/`list`.
    pub async fn save(&self, mut document: Map<String, Value>) -> Result<String, StoreError> {
        let now = Local::now();
        let resume_id = generate_resume_id(&now);

        document.insert("id".to_string(), Value::String(resume_id.clone()));
        document.insert(
            "saved_at".to_string(),
            Value::String(now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()),
        );
        let document = Value::Object(document);

        self.insert_entry(&resume_id, document.clone()).await;
        self.write_mirror(&resume_id, &document).await?;

        debug!(%resume_id, "resume saved");
        Ok(resume_id)
    }

    /// Returns the stored document, or `None` for unknown identifiers.
    /// Never falls back to reading the on-disk file.
    pub async fn get(&self, resume_id: &str) -> Option<Value> {
        self.inner.read().await.entries.get(resume_id).cloned()
    }

    /// All identifiers in insertion order. Does not touch the filesystem.
    pub async fn list(&self) -> Vec<String> {
        self.inner.read().await.order.clone()
    }

    /// Absolute or relative path of the mirror file for an identifier.
    pub fn file_path(&self, resume_id: &str) -> PathBuf {
        self.dir.join(format!("{resume_id}.{FILE_EXTENSION}"))
    }

    async fn insert_entry(&self, resume_id: &str, document: Value) {
        let mut inner = self.inner.write().await;
        if inner
            .entries
            .insert(resume_id.to_string(), document)
            .is_none()
        {
            inner.order.push(resume_id.to_string());
        }
    }

    async fn write_mirror(&self, resume_id: &str, document: &Value) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).await?;
        let pretty = serde_json::to_string_pretty(document)?;
        fs::write(self.file_path(resume_id), pretty).await?;
        Ok(())
    }
}

/// `resume_` + wall-clock time at second granularity, e.g.
/// `resume_20240131_093015`. No collision handling: a second save in the
/// same second produces the same identifier.
fn generate_resume_id(now: &DateTime<Local>) -> String {
    format!("{ID_PREFIX}{}", now.format("%Y%m%d_%H%M%S"))
}
