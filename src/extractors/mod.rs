// src/extractors/mod.rs
pub mod fields;
pub mod normalize;
pub mod record;
pub mod vocabulary;
pub mod window;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use {
    fields::FieldExtractor,
    normalize::normalize,
    record::{ExtractionOutcome, ExtractionRecord},
    vocabulary::Vocabulary,
};
