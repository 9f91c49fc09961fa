use std::collections::HashMap;

use rayon::prelude::*;

use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::logger::Logger;
use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;

/// Builds an inverted index from a doc_id → content map.
pub struct IndexBuilder {
    pub tokenizer: Box<dyn Tokenizer>,
    pub workers: usize,
    pub batch_size: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        IndexBuilder {
            tokenizer: Box::new(WhitespaceTokenizer),
            workers: 1,
            batch_size: 1000,
        }
    }

    /// Builder with a rayon pool of `workers` threads for `build_parallel`.
    pub fn with_workers(workers: usize) -> Self {
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global()
            .ok();

        IndexBuilder {
            tokenizer: Box::new(WhitespaceTokenizer),
            workers,
            batch_size: 1000,
        }
    }

    /// Sequential build: one pass over the documents.
    pub fn build(
        &self,
        documents: &HashMap<DocId, String>,
        logger: &dyn Logger,
    ) -> InvertedIndex {
        logger.log("building inverted index for provided documents...");

        let mut index = InvertedIndex::new();
        for (&doc_id, text) in documents {
            self.index_document(&mut index, doc_id, text);
        }
        index
    }

    /// Chunked parallel build. Posting-set union is commutative and
    /// associative, so the merged result is content-equal to `build`.
    pub fn build_parallel(
        &self,
        documents: &HashMap<DocId, String>,
        logger: &dyn Logger,
    ) -> InvertedIndex {
        if self.workers <= 1 || documents.len() <= self.batch_size {
            return self.build(documents, logger);
        }

        logger.log(&format!(
            "building inverted index for provided documents on {} workers...",
            self.workers
        ));

        let entries: Vec<(DocId, &String)> =
            documents.iter().map(|(&doc_id, text)| (doc_id, text)).collect();

        entries
            .par_chunks(self.batch_size)
            .map(|chunk| {
                let mut partial = InvertedIndex::new();
                for &(doc_id, text) in chunk {
                    self.index_document(&mut partial, doc_id, text);
                }
                partial
            })
            .reduce(InvertedIndex::new, |mut acc, partial| {
                acc.merge(partial);
                acc
            })
    }

    fn index_document(&self, index: &mut InvertedIndex, doc_id: DocId, text: &str) {
        for term in self.tokenizer.tokenize(text) {
            index.insert(term, doc_id);
        }
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
