use crate::config::ScanConfig;
use crate::error::IndexError;
use crate::types::FileRecord;
use chrono::{DateTime, Local};
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Collect a record for every regular file directly inside `dir` whose name
/// matches `cfg`. Records come back in listing order; sorting is the
/// caller's job.
pub fn scan_folder(dir: &Path, cfg: &ScanConfig) -> Result<Vec<FileRecord>, IndexError> {
    let mut records = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| IndexError::ReadDir {
            path: source.path().unwrap_or(dir).to_path_buf(),
            source,
        })?;

        let name = entry.file_name().to_string_lossy().to_string();

        if !entry.file_type().is_file() || !cfg.matches(&name) {
            log::trace!("skipping {}", entry.path().display());
            continue;
        }
        // Never list the manifest inside itself.
        if name == cfg.output_file {
            continue;
        }

        let metadata = entry.metadata().map_err(|source| IndexError::ReadDir {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let modified = metadata
            .modified()
            .map_err(|source| IndexError::Metadata {
                path: entry.path().to_path_buf(),
                source,
            })?;

        records.push(FileRecord {
            path: record_path(&cfg.folder, &name),
            date: format_date(modified),
            name,
            modified,
        });
    }

    log::debug!("{}: {} matching files", dir.display(), records.len());
    Ok(records)
}

/// `./<folder>/<name>` with forward slashes on every platform.
#[must_use]
pub fn record_path(folder: &str, name: &str) -> String {
    let folder = folder.replace('\\', "/");
    format!("./{}/{}", folder.trim_end_matches('/'), name)
}

#[must_use]
pub fn format_date(modified: SystemTime) -> String {
    let local: DateTime<Local> = modified.into();
    local.format(DATE_FORMAT).to_string()
}
