use crate::command::{validate_tokens, Command, Reply};
use crate::error::{EngineError, Result};
use crate::indexer::index_document;
use crate::persist::DocumentStore;
use crate::query::{self, QueryResult};
use crate::{DocId, InvertedIndex, Token};

/// Service context: one inverted index and the store its documents are written to.
///
/// Methods take `&mut self` to write and `&self` to read, so wrapping an
/// engine in a `RwLock` makes every indexing call one critical section.
pub struct Engine<S> {
    index: InvertedIndex,
    store: S,
}

impl<S: DocumentStore> Engine<S> {
    pub fn new(store: S) -> Self {
        Self { index: InvertedIndex::new(), store }
    }

    pub fn inverted_index(&self) -> &InvertedIndex { &self.index }

    pub fn store(&self) -> &S { &self.store }

    /// Index `tokens` under `id`. Tokens are validated first; a persistence
    /// error is reported after the index has already been updated.
    pub fn index(&mut self, id: DocId, tokens: &[Token]) -> Result<DocId> {
        let tokens = validate_tokens(tokens.iter().map(String::as_str))?;
        index_document(&mut self.index, &self.store, id, &tokens)?;
        Ok(id)
    }

    pub fn query(&self, expression: &str) -> Result<QueryResult> {
        Ok(query::search(expression, &self.index)?)
    }

    /// Run one command line. Never fails; errors become error replies.
    pub fn execute(&mut self, line: &str) -> Reply {
        let reply = match Command::parse(line) {
            Ok(Command::Index { id, tokens }) => match index_document(&mut self.index, &self.store, id, &tokens) {
                Ok(()) => Reply::Indexed(id),
                Err(err) => Reply::IndexFailed(err.to_string()),
            },
            Ok(Command::Query { expression }) => match self.query(&expression) {
                Ok(ids) => Reply::Results(ids),
                Err(err) => Reply::QueryFailed(err.to_string()),
            },
            Err(EngineError::InvalidCommand) => Reply::InvalidCommand,
            Err(err) => Reply::IndexFailed(err.to_string()),
        };
        if reply.is_error() {
            tracing::debug!(line, %reply, "command failed");
        }
        reply
    }
}
