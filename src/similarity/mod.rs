// Document similarity — word-set extraction (map) and all-pairs Jaccard
// scoring (reduce).

pub mod aggregator;
pub mod extractor;
pub mod jaccard;

pub use aggregator::{PairResult, SimilarityAggregator};
pub use extractor::WordSetExtractor;
pub use jaccard::Jaccard;
