// Document — the immutable per-record value that flows from extraction to
// aggregation — and its wire form between the two stages.
//
// Wire form: `<id>\t<word>,<word>,...`. The word list may be empty (the line
// then ends right after the tab). Word order on the wire follows set
// iteration order and carries no meaning.

use std::collections::HashSet;

use anyhow::Result;

/// Separates the document id from its word list.
pub const ID_DELIMITER: char = '\t';

/// Separates words within the word list.
pub const WORD_DELIMITER: char = ',';

/// One extracted document: an id plus its normalized word set.
///
/// Constructed once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: String,
    words: HashSet<String>,
}

impl Document {
    /// Build a document. Fails on an empty id or an empty word.
    pub fn new(id: impl Into<String>, words: HashSet<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            anyhow::bail!("Document id must not be empty");
        }
        if words.contains("") {
            anyhow::bail!("Document {id} contains an empty word");
        }
        Ok(Self { id, words })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    /// Encode as `<id>\t<w1>,<w2>,...` with no trailing delimiter.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(
            self.id.len() + 1 + self.words.iter().map(|w| w.len() + 1).sum::<usize>(),
        );
        out.push_str(&self.id);
        out.push(ID_DELIMITER);
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(WORD_DELIMITER);
            }
            out.push_str(word);
        }
        out
    }

    /// Decode the wire form produced by [`Document::serialize`].
    ///
    /// Blank entries in the word list are skipped, so `"doc\t"` and
    /// `"doc\t,,"` both decode to an empty word set.
    pub fn deserialize(value: &str) -> Result<Self> {
        let Some((id, word_list)) = value.split_once(ID_DELIMITER) else {
            anyhow::bail!("Serialized document has no id delimiter: {value:?}");
        };

        let words = word_list
            .split(WORD_DELIMITER)
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        Self::new(id, words)
    }
}
