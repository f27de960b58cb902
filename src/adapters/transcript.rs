//! Plain-text export of generated documents.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::domain::AppError;

/// Write the document to `<prefix>_<YYYYMMDD_HHMMSS>.txt` under `dir` and
/// return the path. Content is the result text UTF-8 verbatim.
pub fn export_document(
    dir: &Path,
    prefix: &str,
    text: &str,
    at: DateTime<Local>,
) -> Result<PathBuf, AppError> {
    let filename = format!("{}_{}.txt", prefix, at.format("%Y%m%d_%H%M%S"));
    let path = dir.join(filename);
    fs::write(&path, text)?;
    Ok(path)
}
