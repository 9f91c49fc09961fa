use std::collections::HashMap;
use std::io::Cursor;

use tabdex::core::error::ErrorKind;
use tabdex::core::logger::NullLogger;
use tabdex::core::types::DocId;
use tabdex::corpus::loader::load_documents;
use tabdex::index::builder::IndexBuilder;
use tabdex::index::inverted::InvertedIndex;
use tabdex::index::posting::PostingSet;
use tabdex::storage::codec::{decode, encode};

const TINY_DATASET: &str = "123\tsome words A_word and nothing\n\
2\tsome word B_word in this document\n\
5\tfamous_phrases to be or not to be\n\
37\tall words such as A_word and B_word\tare here\n";

fn tiny_index() -> InvertedIndex {
    let documents: HashMap<DocId, String> =
        load_documents(Cursor::new(TINY_DATASET), &NullLogger).unwrap();
    IndexBuilder::new().build(&documents, &NullLogger)
}

#[test]
fn roundtrip_preserves_index() {
    let index = tiny_index();
    let decoded = decode(&encode(&index).unwrap()).unwrap();
    assert_eq!(index, decoded);
}

#[test]
fn empty_index_roundtrips() {
    let index = InvertedIndex::new();
    let bytes = encode(&index).unwrap();
    assert_eq!(bytes, vec![0, 0, 0, 0]);
    assert!(decode(&bytes).unwrap().is_empty());
}

#[test]
fn single_term_encoding_is_byte_exact() {
    let mut index = InvertedIndex::new();
    index.insert("be", DocId(5));

    let bytes = encode(&index).unwrap();
    assert_eq!(
        bytes,
        vec![
            0, 0, 0, 1, // term count, i32 BE
            0, 2, b'b', b'e', // term length + UTF-8 bytes
            0, 1, // posting count
            0, 5, // doc id
        ]
    );
}

#[test]
fn every_truncation_of_the_stream_is_a_format_error() {
    let bytes = encode(&tiny_index()).unwrap();

    for len in 0..bytes.len() {
        let err = decode(&bytes[..len]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Format, "prefix of {} bytes", len);
    }
}

#[test]
fn header_claiming_more_terms_than_present_is_a_format_error() {
    let mut bytes = encode(&tiny_index()).unwrap();
    // Patch the term count header to promise far more records than follow.
    bytes[..4].copy_from_slice(&500i32.to_be_bytes());

    let err = decode(&bytes).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Format);
}

#[test]
fn trailing_bytes_are_a_format_error() {
    let mut bytes = encode(&tiny_index()).unwrap();
    bytes.push(0);

    let err = decode(&bytes).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Format);
}

#[test]
fn negative_term_count_is_a_format_error() {
    let err = decode(&(-1i32).to_be_bytes()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Format);
}

#[test]
fn invalid_utf8_term_is_a_format_error() {
    // One record: term of a single 0xFF byte, posting set {5}.
    let bytes = [0, 0, 0, 1, 0, 1, 0xFF, 0, 1, 0, 5];

    let err = decode(&bytes).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Format);
}

#[test]
fn zero_posting_count_record_adds_no_term() {
    // One record: term "x" with an empty posting set.
    let bytes = [0, 0, 0, 1, 0, 1, b'x', 0, 0];

    let index = decode(&bytes).unwrap();
    assert!(index.is_empty());
}

#[test]
fn duplicate_term_records_merge_by_union() {
    let bytes = [
        0, 0, 0, 2, // two records for the same term
        0, 1, b'x', 0, 1, 0, 5, // "x" → {5}
        0, 1, b'x', 0, 1, 0, 7, // "x" → {7}
    ];

    let index = decode(&bytes).unwrap();
    assert_eq!(index.len(), 1);
    let expected: PostingSet = [DocId(5), DocId(7)].into_iter().collect();
    assert_eq!(index.get("x"), Some(&expected));
}

#[test]
fn doc_id_beyond_u16_fails_at_encode_time() {
    let mut index = InvertedIndex::new();
    index.insert("word", DocId(70_000));

    let err = encode(&index).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[test]
fn oversized_term_fails_at_encode_time() {
    let mut index = InvertedIndex::new();
    index.insert(&"a".repeat(65_536), DocId(1));

    let err = encode(&index).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[test]
fn posting_count_beyond_u16_fails_at_encode_time() {
    let mut index = InvertedIndex::new();
    for id in 0..65_536u32 {
        index.insert("crowded", DocId(id));
    }

    let err = encode(&index).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[test]
fn postings_at_the_u16_limits_still_encode() {
    let mut index = InvertedIndex::new();
    index.insert("edge", DocId(65_535));

    let decoded = decode(&encode(&index).unwrap()).unwrap();
    assert_eq!(index, decoded);
    assert!(decoded.get("edge").unwrap().contains(DocId(65_535)));
}
