// src/extractors/record.rs
use std::collections::BTreeSet;

use serde::Serialize;

/// Error message of the record produced when a document yields no text.
pub const TEXT_UNAVAILABLE: &str = "Could not extract text from PDF";

/// Column order of the CSV output.
pub const CSV_HEADER: [&str; 6] = ["file_name", "name", "email", "phone", "education", "skills"];

/// Separator used when flattening `education` and `skills` into one CSV cell.
pub const CSV_LIST_SEPARATOR: &str = "; ";

/// Structured fields pulled out of one resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionRecord {
    pub file_name: String,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Always `(AAA) NNN-NNNN` when present.
    pub phone: Option<String>,
    /// Title-cased degree lines in document order. Repeats are kept.
    pub education: Vec<String>,
    /// Title-cased, deduplicated.
    pub skills: BTreeSet<String>,
}

impl ExtractionRecord {
    /// Flattens the record into the CSV column order.
    pub fn csv_row(&self) -> [String; 6] {
        [
            self.file_name.clone(),
            self.name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.phone.clone().unwrap_or_default(),
            self.education.join(CSV_LIST_SEPARATOR),
            self.skills.iter().map(String::as_str).collect::<Vec<_>>().join(CSV_LIST_SEPARATOR),
        ]
    }
}

/// What a document turned into: a record, or a single-field error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    Extracted(ExtractionRecord),
    Failed { error: String },
}

impl ExtractionOutcome {
    pub fn text_unavailable() -> Self {
        ExtractionOutcome::Failed { error: TEXT_UNAVAILABLE.to_string() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionOutcome::Extracted(_))
    }

    pub fn record(&self) -> Option<&ExtractionRecord> {
        match self {
            ExtractionOutcome::Extracted(record) => Some(record),
            ExtractionOutcome::Failed { .. } => None,
        }
    }
}
