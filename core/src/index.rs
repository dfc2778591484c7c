use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

pub type DocId = i32;
pub type Token = String;

lazy_static! {
    static ref NO_POSTINGS: HashSet<DocId> = HashSet::new();
}

/// Token -> set of document ids containing it.
///
/// An id is in a token's posting set iff that pair was added at least once.
/// Tokens that were never added have no entry; [`InvertedIndex::postings`]
/// answers them with an empty set.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    postings: HashMap<Token, HashSet<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Insert `id` into the posting set of `token`. Re-adding a pair is a no-op.
    pub fn add(&mut self, token: &str, id: DocId) {
        match self.postings.get_mut(token) {
            Some(set) => { set.insert(id); }
            None => { self.postings.insert(token.to_owned(), HashSet::from([id])); }
        }
    }

    /// Add every token of a document. Callers holding the index behind a lock
    /// get the whole document applied inside one critical section.
    pub fn add_document<T: AsRef<str>>(&mut self, id: DocId, tokens: &[T]) {
        for token in tokens {
            self.add(token.as_ref(), id);
        }
    }

    /// Posting set of `token`, empty when the token was never indexed.
    pub fn postings(&self, token: &str) -> &HashSet<DocId> {
        self.postings.get(token).unwrap_or(&NO_POSTINGS)
    }

    pub fn contains(&self, token: &str, id: DocId) -> bool {
        self.postings(token).contains(&id)
    }

    /// Number of distinct tokens with at least one posting.
    pub fn token_count(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_token_has_empty_postings() {
        let mut index = InvertedIndex::new();
        assert!(index.postings("fish").is_empty());
        index.add("cat", 1);
        assert!(index.postings("fish").is_empty());
        assert!(index.postings("Cat").is_empty());
    }

    #[test]
    fn add_is_idempotent() {
        let mut index = InvertedIndex::new();
        index.add("cat", 1);
        index.add("cat", 1);
        index.add("cat", 2);
        assert_eq!(index.postings("cat").len(), 2);
        assert!(index.contains("cat", 1));
        assert!(index.contains("cat", 2));
        assert_eq!(index.token_count(), 1);
    }

    #[test]
    fn add_document_touches_every_token() {
        let mut index = InvertedIndex::new();
        index.add_document(7, &["cat", "dog", "cat"]);
        assert!(index.contains("cat", 7));
        assert!(index.contains("dog", 7));
        assert_eq!(index.token_count(), 2);
        assert!(!index.is_empty());
    }
}
