// src/source/reader.rs
use std::path::Path;

use crate::source::TextSource;
use crate::utils::error::RetrievalError;

/// File extensions the default source knows how to read.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["pdf", "txt"];

/// Page-concatenated text of a PDF.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn extract_text(&self, path: &Path) -> Result<String, RetrievalError> {
        let bytes = std::fs::read(path)?;
        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            RetrievalError::Pdf(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        tracing::info!(
            "Successfully extracted text from {} ({} chars)",
            path.display(),
            text.len()
        );
        Ok(text)
    }
}

/// Already-converted text files, read verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract_text(&self, path: &Path) -> Result<String, RetrievalError> {
        let text = std::fs::read_to_string(path)?;
        tracing::debug!("Read {} chars from {}", text.len(), path.display());
        Ok(text)
    }
}

/// Dispatches on the file extension (case-insensitive).
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentSource {
    pdf: PdfTextSource,
    plain: PlainTextSource,
}

impl DocumentSource {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Lowercased extension when it is one of [`SUPPORTED_EXTENSIONS`].
pub fn supported_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    SUPPORTED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

impl TextSource for DocumentSource {
    fn extract_text(&self, path: &Path) -> Result<String, RetrievalError> {
        match supported_extension(path).as_deref() {
            Some("pdf") => self.pdf.extract_text(path),
            Some("txt") => self.plain.extract_text(path),
            _ => Err(RetrievalError::Unsupported(path.display().to_string())),
        }
    }
}
