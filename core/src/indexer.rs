use crate::error::PersistenceError;
use crate::persist::DocumentStore;
use crate::{DocId, InvertedIndex, Token};

/// Add a validated document to the index, then ask the store to persist it.
///
/// The index is mutated before persistence is attempted and is not rolled
/// back when the store fails: the caller gets the error while queries already
/// see the document.
pub fn index_document<S: DocumentStore + ?Sized>(
    index: &mut InvertedIndex,
    store: &S,
    id: DocId,
    tokens: &[Token],
) -> Result<(), PersistenceError> {
    index.add_document(id, tokens);
    tracing::info!(id, tokens = tokens.len(), num_tokens = index.token_count(), "indexed document");

    if let Err(err) = store.persist(id, tokens) {
        tracing::warn!(id, error = %err, "document indexed but not persisted");
        return Err(err);
    }
    Ok(())
}
