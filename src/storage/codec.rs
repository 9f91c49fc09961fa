use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::logger::Logger;
use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::PostingSet;

// On-disk layout, all integers big-endian:
//
// [ i32 term count ]
// [ u16 term len | term UTF-8 bytes | u16 posting count | u16 doc id ... ]  per term
//
// Fixed widths keep the binary size deterministic and the format platform
// independent. No compression, no varints.

/// Serialize an index into the fixed big-endian record format.
///
/// The 16-bit field widths are a hard format limit: oversized terms, posting
/// counts, or doc ids fail with `InvalidInput` instead of truncating.
pub fn encode(index: &InvertedIndex) -> Result<Vec<u8>> {
    if index.len() > i32::MAX as usize {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("term count {} exceeds the i32 header", index.len()),
        ));
    }

    let mut out = Vec::new();
    out.extend_from_slice(&(index.len() as i32).to_be_bytes());

    for (term, postings) in index.terms() {
        let term_bytes = term.as_bytes();
        if term_bytes.len() > u16::MAX as usize {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "term of {} bytes exceeds the 65535-byte format limit",
                    term_bytes.len()
                ),
            ));
        }
        if postings.len() > u16::MAX as usize {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "term {:?} has {} postings, format limit is 65535",
                    term,
                    postings.len()
                ),
            ));
        }

        out.extend_from_slice(&(term_bytes.len() as u16).to_be_bytes());
        out.extend_from_slice(term_bytes);
        out.extend_from_slice(&(postings.len() as u16).to_be_bytes());

        for doc_id in postings.iter() {
            let id = doc_id.value();
            if id > u16::MAX as u32 {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("doc id {} does not fit the 16-bit wire format", id),
                ));
            }
            out.extend_from_slice(&(id as u16).to_be_bytes());
        }
    }

    Ok(out)
}

/// Inverse of `encode`.
///
/// Truncated or malformed input is a `Format` error, never a partial index.
/// A record with posting count 0 adds no entry; duplicate term records merge
/// by set union.
pub fn decode(bytes: &[u8]) -> Result<InvertedIndex> {
    let mut reader = ByteReader::new(bytes);

    let term_count = reader.read_i32()?;
    if term_count < 0 {
        return Err(Error::new(
            ErrorKind::Format,
            format!("negative term count {} in header", term_count),
        ));
    }

    let mut index = InvertedIndex::new();
    for _ in 0..term_count {
        let term_len = reader.read_u16()? as usize;
        let term_bytes = reader.read_bytes(term_len)?;
        let term = std::str::from_utf8(term_bytes)
            .map_err(|_| Error::new(ErrorKind::Format, "invalid UTF-8 in term".to_string()))?
            .to_string();

        let posting_count = reader.read_u16()?;
        let mut postings = PostingSet::new();
        for _ in 0..posting_count {
            postings.insert(DocId(reader.read_u16()? as u32));
        }
        index.insert_set(term, postings);
    }

    if !reader.is_at_end() {
        return Err(Error::new(
            ErrorKind::Format,
            format!("{} trailing bytes after the last record", reader.remaining()),
        ));
    }

    Ok(index)
}

/// Encode the index and write it to `path`.
pub fn dump(index: &InvertedIndex, path: &Path, logger: &dyn Logger) -> Result<()> {
    logger.log(&format!("dumping inverted index to {}", path.display()));

    let bytes = encode(index)?;
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    file.sync_all()?;
    Ok(())
}

/// Read an index back from `path`.
pub fn load(path: &Path, logger: &dyn Logger) -> Result<InvertedIndex> {
    logger.log(&format!("loading inverted index from {}", path.display()));

    let bytes = std::fs::read(path)?;
    decode(&bytes)
}

/// Cursor over the encoded byte stream. Every read checks the remaining
/// length, so truncation surfaces as a `Format` error at the exact field.
struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        ByteReader { buf, pos: 0 }
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.buf.len() - self.pos < len {
            return Err(Error::new(
                ErrorKind::Format,
                format!(
                    "unexpected end of index data: need {} bytes at offset {}, have {}",
                    len,
                    self.pos,
                    self.buf.len() - self.pos
                ),
            ));
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}
