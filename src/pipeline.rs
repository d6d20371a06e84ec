// src/pipeline.rs
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::extractors::{normalize, ExtractionOutcome, FieldExtractor};
use crate::source::TextSource;
use crate::utils::error::RetrievalError;

/// How a batch is run.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Documents processed at once. 1 keeps the reference sequential behaviour.
    pub jobs: usize,
    /// Upper bound on a single text retrieval.
    pub timeout: Option<Duration>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { jobs: 1, timeout: None }
    }
}

/// One document's outcome, keyed by where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentResult {
    pub path: PathBuf,
    pub file_name: String,
    pub outcome: ExtractionOutcome,
}

/// Results in input order plus the success/failure tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub results: Vec<DocumentResult>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn from_results(results: Vec<DocumentResult>) -> Self {
        let succeeded = results.iter().filter(|r| r.outcome.is_success()).count();
        let failed = results.len() - succeeded;
        Self { results, succeeded, failed }
    }
}

/// Final path component, used as the record's `file_name`.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Normalizes already-retrieved text and extracts its fields.
pub fn process_text(
    extractor: &FieldExtractor,
    file_name: &str,
    raw_text: &str,
) -> ExtractionOutcome {
    let normalized = normalize(raw_text);
    extractor.extract(file_name, &normalized)
}

/// Retrieves, normalizes and extracts one document. Never fails: retrieval problems become
/// the error outcome.
pub async fn process_document<S>(
    source: Arc<S>,
    extractor: Arc<FieldExtractor>,
    path: PathBuf,
    timeout: Option<Duration>,
) -> DocumentResult
where
    S: TextSource + Send + Sync + 'static,
{
    let file_name = file_name_of(&path);
    tracing::info!("Processing resume: {}", path.display());

    let outcome = match retrieve_text(source, path.clone(), timeout).await {
        Ok(raw_text) => process_text(&extractor, &file_name, &raw_text),
        Err(e) => {
            tracing::warn!("Could not retrieve text from {}: {}", path.display(), e);
            ExtractionOutcome::text_unavailable()
        }
    };

    tracing::info!(
        "Extraction completed for {} (success: {})",
        path.display(),
        outcome.is_success()
    );
    DocumentResult { path, file_name, outcome }
}

async fn retrieve_text<S>(
    source: Arc<S>,
    path: PathBuf,
    timeout: Option<Duration>,
) -> Result<String, RetrievalError>
where
    S: TextSource + Send + Sync + 'static,
{
    // PDF decoding is CPU-bound and synchronous; keep it off the async workers.
    let task = tokio::task::spawn_blocking(move || source.extract_text(&path));

    let joined = match timeout {
        Some(limit) => tokio::time::timeout(limit, task)
            .await
            .map_err(|_| RetrievalError::Timeout(limit.as_secs()))?,
        None => task.await,
    };

    joined.map_err(|e| RetrievalError::Join(e.to_string()))?
}

/// Processes every path, at most `options.jobs` at a time, and returns results in input order.
pub async fn process_batch<S>(
    source: Arc<S>,
    extractor: Arc<FieldExtractor>,
    paths: Vec<PathBuf>,
    options: BatchOptions,
) -> BatchReport
where
    S: TextSource + Send + Sync + 'static,
{
    let total = paths.len();
    tracing::info!("Processing {} documents with {} job(s)", total, options.jobs.max(1));

    let permits = Arc::new(Semaphore::new(options.jobs.max(1)));
    let mut tasks = JoinSet::new();

    for (index, path) in paths.iter().cloned().enumerate() {
        let source = Arc::clone(&source);
        let extractor = Arc::clone(&extractor);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            // The semaphore is never closed, so acquire only fails if that invariant breaks.
            let _permit = permits.acquire_owned().await.ok();
            (index, process_document(source, extractor, path, options.timeout).await)
        });
    }

    let mut slots: Vec<Option<DocumentResult>> = vec![None; total];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => slots[index] = Some(result),
            Err(e) => tracing::error!("Document task failed: {}", e),
        }
    }

    let results = slots
        .into_iter()
        .zip(paths)
        .map(|(slot, path)| {
            slot.unwrap_or_else(|| DocumentResult {
                file_name: file_name_of(&path),
                path,
                outcome: ExtractionOutcome::text_unavailable(),
            })
        })
        .collect();

    let report = BatchReport::from_results(results);
    tracing::info!(
        "Processing finished. Success: {}, Failures: {}",
        report.succeeded,
        report.failed
    );
    report
}
