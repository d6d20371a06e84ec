// src/source/discovery.rs
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::source::reader::supported_extension;

/// Lists supported documents directly inside `dir` (no recursion), sorted by path.
pub fn discover_documents<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() && supported_extension(entry.path()).is_some() {
            documents.push(entry.into_path());
        }
    }

    documents.sort();
    tracing::info!("Found {} supported documents in {}", documents.len(), dir.as_ref().display());
    Ok(documents)
}
