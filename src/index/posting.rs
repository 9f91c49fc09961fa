use roaring::RoaringBitmap;

use crate::core::types::DocId;

/// Set of document ids for a single term.
///
/// Backed by a roaring bitmap, so ids iterate in ascending order and
/// intersection is a bitmap AND instead of a hand-rolled merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostingSet {
    ids: RoaringBitmap,
}

impl PostingSet {
    pub fn new() -> Self {
        PostingSet {
            ids: RoaringBitmap::new(),
        }
    }

    pub fn insert(&mut self, doc_id: DocId) {
        self.ids.insert(doc_id.0);
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.ids.contains(doc_id.0)
    }

    pub fn len(&self) -> usize {
        self.ids.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ascending doc-id order.
    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.ids.iter().map(DocId)
    }

    pub fn to_vec(&self) -> Vec<DocId> {
        self.iter().collect()
    }

    pub fn intersect(&self, other: &PostingSet) -> PostingSet {
        PostingSet {
            ids: &self.ids & &other.ids,
        }
    }

    pub fn union_with(&mut self, other: &PostingSet) {
        self.ids |= &other.ids;
    }
}

impl FromIterator<DocId> for PostingSet {
    fn from_iter<I: IntoIterator<Item = DocId>>(iter: I) -> Self {
        let mut set = PostingSet::new();
        for doc_id in iter {
            set.insert(doc_id);
        }
        set
    }
}
