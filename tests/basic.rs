use std::fs::File;
use std::io::Write;

use tempfile::tempdir;

use tabdex::core::logger::NullLogger;
use tabdex::core::types::DocId;
use tabdex::corpus::loader::load_documents_from_path;
use tabdex::index::builder::IndexBuilder;
use tabdex::query::engine::QueryEngine;
use tabdex::storage::codec;

const TINY_DATASET: &str = "123\tsome words A_word and nothing\n\
2\tsome word B_word in this document\n\
5\tfamous_phrases to be or not to be\n\
37\tall words such as A_word and B_word\tare here\n";

#[test]
fn smoke_build_dump_load_and_query() {
    let tmp = tempdir().unwrap();
    let logger = NullLogger;

    let dataset_path = tmp.path().join("dataset.txt");
    let mut file = File::create(&dataset_path).unwrap();
    file.write_all(TINY_DATASET.as_bytes()).unwrap();

    let documents = load_documents_from_path(&dataset_path, &logger).unwrap();
    assert_eq!(documents.len(), 4);

    let index = IndexBuilder::new().build(&documents, &logger);

    let index_path = tmp.path().join("inverted.index");
    codec::dump(&index, &index_path, &logger).unwrap();
    let loaded = codec::load(&index_path, &logger).unwrap();
    assert_eq!(index, loaded);

    let engine = QueryEngine::new(&loaded);
    let hits = engine.search(
        &["A_word".to_string(), "B_word".to_string()],
        &logger,
    );
    assert_eq!(hits, vec![DocId(37)]);
}

#[test]
fn load_fails_for_missing_dataset() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("no_such_file");

    assert!(load_documents_from_path(&missing, &NullLogger).is_err());
    assert!(codec::load(&missing, &NullLogger).is_err());
}
