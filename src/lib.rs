pub mod core;
pub mod analysis;
pub mod corpus;
pub mod index;
pub mod storage;
pub mod query;

/*
┌────────────────────────────────────────────────────────────────────┐
│                        TABDEX STRUCTURE                            │
└────────────────────────────────────────────────────────────────────┘

  corpus::loader           id<TAB>content lines → HashMap<DocId, String>
        │
        ▼
  index::IndexBuilder      tokenize (analysis::Tokenizer seam) and
        │                  accumulate term → PostingSet per document
        ▼
  index::InvertedIndex     HashMap<String, PostingSet>
        │                  PostingSet = roaring bitmap of DocIds
        ├────────────────────────────┐
        ▼                            ▼
  storage::codec             query::QueryEngine
  encode / decode (bytes)    intersection across posting sets
  dump / load (disk)         → Vec<DocId>, ascending

  core::error              Error { kind, context } + Result alias
  core::logger             Logger trait, passed into every operation
  core::config             default paths, worker count
*/
