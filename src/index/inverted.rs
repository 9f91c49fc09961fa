use std::collections::HashMap;

use crate::core::types::DocId;
use crate::index::posting::PostingSet;

/// In-memory inverted index: term → set of documents containing it.
///
/// Terms are only added together with a document id, so every posting set is
/// non-empty. Equality is per-term set equality; map order never matters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    postings: HashMap<String, PostingSet>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
        }
    }

    /// Record one occurrence of `term` in `doc_id`.
    pub fn insert(&mut self, term: &str, doc_id: DocId) {
        self.postings
            .entry(term.to_string())
            .or_default()
            .insert(doc_id);
    }

    pub fn get(&self, term: &str) -> Option<&PostingSet> {
        self.postings.get(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &PostingSet)> {
        self.postings.iter().map(|(term, set)| (term.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Merge another index in by posting-set union.
    pub fn merge(&mut self, other: InvertedIndex) {
        for (term, set) in other.postings {
            self.postings.entry(term).or_default().union_with(&set);
        }
    }

    /// Insert a whole posting set, merging with any existing entry.
    ///
    /// Empty sets are dropped, so decoded indexes keep the non-empty
    /// posting-set invariant.
    pub(crate) fn insert_set(&mut self, term: String, set: PostingSet) {
        if set.is_empty() {
            return;
        }
        self.postings.entry(term).or_default().union_with(&set);
    }
}
