// Word-set extraction — the map side of the similarity job.
//
// Each input line `<docId><whitespace><content>` becomes one Document whose
// word set is the normalized, deduplicated content. Every document is emitted
// under the same configured aggregation key, which is what routes the whole
// corpus to a single reduce call.
//
// Blank lines and lines with no content after the id are dropped without
// error. Counting those drops is the runner's job.

use crate::corpus::normalize::{is_separator, word_set};
use crate::corpus::Document;
use crate::pipeline::traits::{KeyedRecord, Mapper};

/// Parse one raw record into a Document.
///
/// Returns `None` for a blank line or a line with only an id. Content that
/// normalizes to nothing still yields a document (with an empty word set).
/// Only ASCII whitespace separates the id from the content.
pub fn parse_record(line: &str) -> Option<Document> {
    let line = line.trim_matches(is_separator);
    let (id, content) = line.split_once(is_separator)?;

    // `line` is trimmed, so whatever follows the first whitespace run is non-empty
    let content = content.trim_start_matches(is_separator);
    if content.is_empty() {
        return None;
    }

    Document::new(id, word_set(content)).ok()
}

/// Maps raw records to serialized documents under one shared key.
#[derive(Debug, Clone)]
pub struct WordSetExtractor {
    aggregation_key: String,
}

impl WordSetExtractor {
    pub fn new(aggregation_key: impl Into<String>) -> Self {
        Self {
            aggregation_key: aggregation_key.into(),
        }
    }

    /// Key every extracted document is emitted under.
    pub fn aggregation_key(&self) -> &str {
        &self.aggregation_key
    }

    /// Extract and serialize one record, tagged with the aggregation key.
    pub fn extract(&self, line: &str) -> Option<KeyedRecord> {
        parse_record(line).map(|doc| KeyedRecord {
            key: self.aggregation_key.clone(),
            value: doc.serialize(),
        })
    }
}

impl Mapper for WordSetExtractor {
    fn map(&self, record: &str) -> Option<KeyedRecord> {
        self.extract(record)
    }
}
