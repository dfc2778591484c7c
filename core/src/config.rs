use crate::error::PersistenceError;
use crate::persist::{DocumentStore, FsDocumentStore, MemoryDocumentStore};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DOCUMENTS_DIR: &str = "./documents";

/// Where indexed documents are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreConfig {
    Filesystem { dir: PathBuf },
    Memory,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Filesystem { dir: PathBuf::from(DEFAULT_DOCUMENTS_DIR) }
    }
}

impl StoreConfig {
    /// Filesystem store at `dir`, or the in-memory store when `persist` is false.
    pub fn from_args(dir: impl Into<PathBuf>, persist: bool) -> Self {
        if persist { StoreConfig::Filesystem { dir: dir.into() } } else { StoreConfig::Memory }
    }

    pub fn open(&self) -> Result<Box<dyn DocumentStore>, PersistenceError> {
        match self {
            StoreConfig::Filesystem { dir } => {
                let store = FsDocumentStore::open(dir)?;
                tracing::info!(dir = %dir.display(), "writing documents to filesystem");
                Ok(Box::new(store))
            }
            StoreConfig::Memory => {
                tracing::info!("documents kept in memory only");
                Ok(Box::new(MemoryDocumentStore::new()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_documents_dir() {
        assert_eq!(StoreConfig::default(), StoreConfig::Filesystem { dir: PathBuf::from("./documents") });
    }

    #[test]
    fn deserializes_tagged_form() {
        let cfg: StoreConfig = serde_json::from_str(r#"{"kind":"filesystem","dir":"/tmp/docs"}"#).unwrap();
        assert_eq!(cfg, StoreConfig::Filesystem { dir: PathBuf::from("/tmp/docs") });
        let cfg: StoreConfig = serde_json::from_str(r#"{"kind":"memory"}"#).unwrap();
        assert_eq!(cfg, StoreConfig::Memory);
    }

    #[test]
    fn open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("documents");
        let store = StoreConfig::from_args(&target, true).open().unwrap();
        store.persist(1, &["cat".to_string()]).unwrap();
        assert_eq!(std::fs::read_dir(&target).unwrap().count(), 1);
    }

    #[test]
    fn no_persist_selects_memory() {
        assert_eq!(StoreConfig::from_args("ignored", false), StoreConfig::Memory);
    }
}
