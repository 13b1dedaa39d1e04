// Corpus — documents, their normalization, and synthetic corpus generation.

pub mod document;
pub mod generate;
pub mod normalize;

pub use document::Document;
