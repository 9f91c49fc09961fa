use crate::core::logger::Logger;
use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;

/// Evaluates term queries against a loaded index.
pub struct QueryEngine<'a> {
    index: &'a InvertedIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        QueryEngine { index }
    }

    /// Intersect the posting sets of all query terms.
    ///
    /// An empty query is empty by definition, not the universal set. A term
    /// missing from the index contributes an empty set, so one unknown term
    /// empties the whole result. Ids come back in ascending order.
    pub fn search(&self, terms: &[String], logger: &dyn Logger) -> Vec<DocId> {
        logger.log(&format!("query inverted index with request {:?}", terms));

        let mut sets = terms
            .iter()
            .map(|term| self.index.get(term).cloned().unwrap_or_default());

        let Some(first) = sets.next() else {
            return Vec::new();
        };

        sets.fold(first, |acc, set| acc.intersect(&set)).to_vec()
    }
}
