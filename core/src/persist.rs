use crate::error::PersistenceError;
use crate::{DocId, Token};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Persisted shape of one indexed document: `{"id": 1, "tokens": ["cat", "dog"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: DocId,
    pub tokens: Vec<Token>,
}

/// Write side of document persistence. Records are never read back into the index.
pub trait DocumentStore: Send + Sync {
    fn persist(&self, id: DocId, tokens: &[Token]) -> Result<(), PersistenceError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for Box<S> {
    fn persist(&self, id: DocId, tokens: &[Token]) -> Result<(), PersistenceError> {
        (**self).persist(id, tokens)
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    fn persist(&self, id: DocId, tokens: &[Token]) -> Result<(), PersistenceError> {
        (**self).persist(id, tokens)
    }
}

/// One JSON file per call, named `<uuid>.json`, under a single directory.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, PersistenceError> {
        let root = root.as_ref().to_path_buf();
        create_dir_all(&root).map_err(|source| PersistenceError::CreateDir { path: root.clone(), source })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path { &self.root }

    fn record_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", Uuid::new_v4()))
    }
}

impl DocumentStore for FsDocumentStore {
    fn persist(&self, id: DocId, tokens: &[Token]) -> Result<(), PersistenceError> {
        let record = StoredDocument { id, tokens: tokens.to_vec() };
        let json = serde_json::to_string(&record).map_err(|source| PersistenceError::Encode { id, source })?;
        let path = self.record_path();
        let write = |path: &Path| -> std::io::Result<()> {
            let mut f = File::create(path)?;
            f.write_all(json.as_bytes())
        };
        write(&path).map_err(|source| PersistenceError::Write { id, path: path.clone(), source })?;
        tracing::debug!(id, path = %path.display(), "persisted document");
        Ok(())
    }
}

/// Keeps records in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    records: Mutex<Vec<StoredDocument>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self { Self::default() }

    /// Snapshot of everything persisted so far, in call order.
    pub fn records(&self) -> Vec<StoredDocument> { self.records.lock().clone() }
}

impl DocumentStore for MemoryDocumentStore {
    fn persist(&self, id: DocId, tokens: &[Token]) -> Result<(), PersistenceError> {
        self.records.lock().push(StoredDocument { id, tokens: tokens.to_vec() });
        Ok(())
    }
}
