use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::logger::Logger;
use crate::core::types::DocId;

/// Read a tab-separated corpus into a doc_id → content map.
///
/// Each line is `<id>\t<content>`. Tabs inside the content are rejoined with
/// single spaces and the result is trimmed. Lines without a tab carry no
/// document and are skipped. Duplicate ids are last-write-wins.
pub fn load_documents<R: BufRead>(
    reader: R,
    logger: &dyn Logger,
) -> Result<HashMap<DocId, String>> {
    let mut documents = HashMap::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let Some((id, content)) = line.split_once('\t') else {
            continue;
        };
        let id = id.trim().parse::<u32>().map_err(|_| {
            Error::new(
                ErrorKind::Parse,
                format!("line {}: invalid document id {:?}", line_no + 1, id),
            )
        })?;
        let content = content.replace('\t', " ");
        documents.insert(DocId(id), content.trim().to_string());
    }

    logger.log(&format!("loaded {} documents", documents.len()));
    Ok(documents)
}

/// Open `path` and load the corpus from it. An unreadable path is fatal for
/// the caller; the underlying I/O error is propagated as-is.
pub fn load_documents_from_path(
    path: &Path,
    logger: &dyn Logger,
) -> Result<HashMap<DocId, String>> {
    logger.log(&format!(
        "loading documents from {} to build inverted index...",
        path.display()
    ));
    let file = File::open(path)?;
    load_documents(BufReader::new(file), logger)
}
