use super::dnf::Dnf;
use crate::{DocId, InvertedIndex, Token};
use std::collections::{BTreeSet, HashSet};

/// Matching document ids, ascending.
pub type QueryResult = BTreeSet<DocId>;

/// Resolve a normalized query against the index: union over groups of the
/// intersection of each group's postings. Unknown tokens match nothing.
pub fn evaluate(dnf: &Dnf, index: &InvertedIndex) -> QueryResult {
    if let Some(token) = dnf.single_literal() {
        return index.postings(token).iter().copied().collect();
    }
    match dnf.groups() {
        [group] => intersect(group, index),
        groups => {
            let mut result = QueryResult::new();
            for group in groups {
                result.extend(intersect(group, index));
            }
            result
        }
    }
}

fn intersect(group: &[Token], index: &InvertedIndex) -> QueryResult {
    let mut lists: Vec<&HashSet<DocId>> = Vec::with_capacity(group.len());
    for token in group {
        let postings = index.postings(token);
        if postings.is_empty() {
            return QueryResult::new();
        }
        lists.push(postings);
    }
    // smallest first: fewer membership checks
    lists.sort_by_key(|postings| postings.len());
    match lists.split_first() {
        Some((smallest, rest)) => smallest
            .iter()
            .copied()
            .filter(|id| rest.iter().all(|postings| postings.contains(id)))
            .collect(),
        None => QueryResult::new(),
    }
}
