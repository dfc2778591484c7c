pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod indexer;
pub mod persist;
pub mod query;
pub mod token;

pub use command::{Command, Reply};
pub use config::StoreConfig;
pub use engine::Engine;
pub use error::{EngineError, ParseError, PersistenceError, Result, ValidationError};
pub use index::{DocId, InvertedIndex, Token};
pub use persist::{DocumentStore, FsDocumentStore, MemoryDocumentStore, StoredDocument};
pub use query::{evaluate, normalize, parse, Dnf, Expr, QueryResult};
