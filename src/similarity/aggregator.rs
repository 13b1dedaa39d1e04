// All-pairs similarity — the reduce side of the similarity job.
//
// Receives every serialized document in one call, rebuilds the documents in
// arrival order, and scores every pair of list positions i < j. Output lines
// follow that enumeration order exactly; nothing is sorted. The whole corpus
// is held in memory for the duration of the call.

use std::fmt;

use tracing::{info, warn};

use super::jaccard::Jaccard;
use crate::corpus::Document;
use crate::pipeline::traits::Reducer;

/// Number of unordered pairs among `n` documents.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// The score for one unordered pair of documents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairResult<'a> {
    pub left: &'a str,
    pub right: &'a str,
    pub score: Jaccard,
}

impl PairResult<'_> {
    pub fn similarity(&self) -> f64 {
        self.score.similarity()
    }
}

/// Output line form: `doc1, doc2 Similarity: 0.56`.
impl fmt::Display for PairResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} Similarity: {}", self.left, self.right, self.score)
    }
}

/// Score every pair of positions i < j, in enumeration order.
///
/// Two documents with the same id are still two positions and still
/// produce a pair.
pub fn pairs(documents: &[Document]) -> impl Iterator<Item = PairResult<'_>> + '_ {
    documents.iter().enumerate().flat_map(move |(i, a)| {
        documents[i + 1..].iter().map(move |b| PairResult {
            left: a.id(),
            right: b.id(),
            score: Jaccard::between(a.words(), b.words()),
        })
    })
}

/// Decode serialized documents, keeping arrival order.
///
/// Values that do not decode are skipped with a warning.
pub fn parse_documents<S: AsRef<str>>(values: &[S]) -> Vec<Document> {
    values
        .iter()
        .filter_map(|value| match Document::deserialize(value.as_ref()) {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!(error = %e, "Skipping undecodable document");
                None
            }
        })
        .collect()
}

/// Reduces the whole corpus to one output line per document pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityAggregator;

impl SimilarityAggregator {
    /// Score and format every pair among `values`.
    pub fn aggregate<S: AsRef<str>>(&self, values: &[S]) -> Vec<String> {
        let documents = parse_documents(values);
        let expected = pair_count(documents.len());

        info!(
            documents = documents.len(),
            pairs = expected,
            "Comparing all document pairs"
        );

        let mut lines = Vec::with_capacity(expected);
        lines.extend(pairs(&documents).map(|pair| pair.to_string()));
        lines
    }
}

impl Reducer for SimilarityAggregator {
    fn reduce(&self, _key: &str, values: Vec<String>) -> Vec<String> {
        self.aggregate(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(3), 3);
        assert_eq!(pair_count(100), 4950);
    }

    #[test]
    fn test_pairs_enumerate_in_position_order() {
        let docs = parse_documents(&["a\tx", "b\tx", "c\ty"]);
        let ids: Vec<(&str, &str)> = pairs(&docs).map(|p| (p.left, p.right)).collect();
        assert_eq!(ids, vec![("a", "b"), ("a", "c"), ("b", "c")]);
    }

    #[test]
    fn test_duplicate_ids_still_pair() {
        let docs = parse_documents(&["same\tw", "same\tw"]);
        let all: Vec<_> = pairs(&docs).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].to_string(), "same, same Similarity: 1.00");
    }

    #[test]
    fn test_single_document_has_no_pairs() {
        let docs = parse_documents(&["only\ta,b"]);
        assert_eq!(pairs(&docs).count(), 0);
    }

    #[test]
    fn test_undecodable_values_are_skipped() {
        let docs = parse_documents(&["good\ta", "no-tab-here", "\tnoid"]);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id(), "good");
    }

    #[test]
    fn test_aggregate_formats_lines() {
        let lines = SimilarityAggregator.aggregate(&["doc1\tthe,cat,sat", "doc2\tsat,dog,the"]);
        assert_eq!(lines, vec!["doc1, doc2 Similarity: 0.50".to_string()]);
    }

    #[test]
    fn test_empty_word_sets_participate() {
        let lines = SimilarityAggregator.aggregate(&["e1\t", "e2\t", "w\tword"]);
        assert_eq!(
            lines,
            vec![
                "e1, e2 Similarity: 0.00".to_string(),
                "e1, w Similarity: 0.00".to_string(),
                "e2, w Similarity: 0.00".to_string(),
            ]
        );
    }
}
