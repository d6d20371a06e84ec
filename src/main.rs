// src/main.rs
mod config;
mod extractors;
mod pipeline;
mod source;
mod storage;
mod utils;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use config::{OutputFormat, Profile};
use extractors::{FieldExtractor, Vocabulary};
use pipeline::{BatchOptions, BatchReport};
use source::DocumentSource;
use storage::StorageManager;
use utils::AppError;

const BATCH_STEM: &str = "extracted_resumes";
const RUN_SUMMARY_FILE: &str = "run_summary.json";

/// Extract structured data (name, email, phone, education, skills) from resume PDFs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input directory of resumes (.pdf or .txt)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Both)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Process a single resume file
    #[arg(short, long)]
    single: Option<PathBuf>,

    /// Number of documents processed concurrently
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// Per-document limit on text retrieval, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// JSON file overriding the built-in keyword and skill lists
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Also append log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (RUST_LOG wins over --verbose and the profile default)
    let profile = Profile::from_env();
    let level = config::log_level(args.verbose, profile);
    utils::logging::setup_logging(level, args.log_file.as_deref())?;
    tracing::info!("Starting resume extraction ({:?} profile), args: {:?}", profile, args);

    // 3. Load vocabulary and initialize collaborators
    let extractor = match &args.vocabulary {
        Some(path) => FieldExtractor::with_vocabulary(Vocabulary::from_json_file(path)?),
        None => FieldExtractor::new(),
    };
    let extractor = Arc::new(extractor);
    let source = Arc::new(DocumentSource::new());
    let storage = StorageManager::new(&args.output)?;
    let options = BatchOptions {
        jobs: args.jobs.max(1),
        timeout: args.timeout_secs.map(Duration::from_secs),
    };

    // 4. Single file or whole directory
    let plan = resolve_run(args.single.as_deref(), args.input.as_deref())?;

    // 5. Process and persist
    let report = pipeline::process_batch(source, extractor, plan.paths.clone(), options).await;
    save_outputs(&storage, &report, &plan, args.format)?;

    println!(
        "Processing complete! {} resumes processed ({} succeeded, {} failed). Results saved to {}",
        report.results.len(),
        report.succeeded,
        report.failed,
        storage.base_dir().display()
    );

    if report.succeeded == 0 && report.failed > 0 {
        return Err(AppError::Processing(format!(
            "Failed to extract any resume from {} documents",
            report.failed
        )));
    }

    Ok(())
}

/// What one invocation processes and how its output files are named.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunPlan {
    paths: Vec<PathBuf>,
    /// Output file stem: the input's stem in single-file mode, `extracted_resumes` otherwise.
    stem: String,
    /// Directory runs also write `run_summary.json`.
    with_summary: bool,
}

/// `--single` wins over `--input`; with neither, `sample_resumes` is scanned.
fn resolve_run(single: Option<&Path>, input: Option<&Path>) -> Result<RunPlan, AppError> {
    match single {
        Some(file) => {
            if !file.is_file() {
                return Err(AppError::Config(format!("File {} not found", file.display())));
            }
            tracing::info!("Processing single file: {}", file.display());
            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| BATCH_STEM.to_string());
            Ok(RunPlan { paths: vec![file.to_path_buf()], stem, with_summary: false })
        }
        None => {
            let input_dir = input.unwrap_or_else(|| Path::new("sample_resumes"));
            Ok(RunPlan {
                paths: collect_inputs(input_dir)?,
                stem: BATCH_STEM.to_string(),
                with_summary: true,
            })
        }
    }
}

fn collect_inputs(input_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !input_dir.is_dir() {
        return Err(AppError::Config(format!("Directory {} not found", input_dir.display())));
    }

    let paths = source::discover_documents(input_dir).map_err(|e| AppError::Io(e.into()))?;
    if paths.is_empty() {
        return Err(AppError::Config(format!(
            "No PDF or text files found in {}",
            input_dir.display()
        )));
    }
    Ok(paths)
}

fn save_outputs(
    storage: &StorageManager,
    report: &BatchReport,
    plan: &RunPlan,
    format: OutputFormat,
) -> Result<(), AppError> {
    if format.writes_csv() {
        storage.save_csv(&report.results, &format!("{}.csv", plan.stem))?;
    }
    if format.writes_json() {
        storage.save_json(&report.results, &format!("{}.json", plan.stem))?;
    }
    if plan.with_summary {
        storage.save_run_summary(report, RUN_SUMMARY_FILE)?;
    }
    Ok(())
}
