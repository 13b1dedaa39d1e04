// docsim: all-pairs Jaccard similarity over a batch corpus
//
// This is the library root. Each module corresponds to a stage or concern
// of the similarity job.

pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod similarity;
