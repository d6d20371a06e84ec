// src/source/mod.rs
pub mod discovery;
pub mod reader;

use std::path::Path;

use crate::utils::error::RetrievalError;

/// Anything that can turn a document on disk into plain text.
///
/// Failures are per document; callers turn them into error records and keep going.
pub trait TextSource {
    fn extract_text(&self, path: &Path) -> Result<String, RetrievalError>;
}

pub use discovery::discover_documents;
#[allow(unused_imports)]
pub use reader::{DocumentSource, PdfTextSource, PlainTextSource};
