// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractors::record::CSV_HEADER;
use crate::extractors::ExtractionOutcome;
use crate::pipeline::{BatchReport, DocumentResult};
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Writes one CSV row per extracted record under the fixed header.
    ///
    /// Error outcomes have no columns to fill, so they are skipped with a warning.
    pub fn save_csv(
        &self,
        results: &[DocumentResult],
        filename: &str,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(filename);
        let mut writer = csv::Writer::from_path(&file_path)?;
        writer.write_record(CSV_HEADER)?;

        let mut written = 0;
        for result in results {
            match result.outcome.record() {
                Some(record) => {
                    writer.write_record(record.csv_row())?;
                    written += 1;
                }
                None => tracing::warn!(
                    "Skipping {} in CSV output: extraction failed",
                    result.file_name
                ),
            }
        }

        writer.flush()?;
        tracing::info!("Saved {} rows to {}", written, file_path.display());
        Ok(file_path)
    }

    /// Writes all outcomes as a pretty-printed JSON array (2-space indent, UTF-8 kept verbatim).
    pub fn save_json(
        &self,
        results: &[DocumentResult],
        filename: &str,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(filename);
        let outcomes: Vec<_> = results.iter().map(|r| &r.outcome).collect();

        let json = serde_json::to_string_pretty(&outcomes)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json)?;

        tracing::info!("Saved {} records to {}", outcomes.len(), file_path.display());
        Ok(file_path)
    }

    /// Saves the batch tally and per-file status in JSON format
    pub fn save_run_summary(
        &self,
        report: &BatchReport,
        filename: &str,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(filename);

        let documents: Vec<_> = report
            .results
            .iter()
            .map(|r| match &r.outcome {
                ExtractionOutcome::Extracted(_) => serde_json::json!({
                    "file_name": r.file_name,
                    "path": r.path.display().to_string(),
                    "status": "ok",
                }),
                ExtractionOutcome::Failed { error } => serde_json::json!({
                    "file_name": r.file_name,
                    "path": r.path.display().to_string(),
                    "status": "error",
                    "error": error,
                }),
            })
            .collect();

        let summary = serde_json::json!({
            "total": report.results.len(),
            "succeeded": report.succeeded,
            "failed": report.failed,
            "documents": documents,
            "generated_at": chrono::Utc::now().to_rfc3339(),
        });

        let summary_str = serde_json::to_string_pretty(&summary)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, summary_str)?;

        tracing::info!("Saved run summary to {}", file_path.display());
        Ok(file_path)
    }
}
