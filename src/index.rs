use crate::config::ScanConfig;
use crate::error::IndexError;
use crate::report;
use crate::scanner;
use crate::types::{FileRecord, IndexOutcome};
use std::fs;
use std::path::Path;

/// Scan `<root>/<cfg.folder>` and write its manifest next to the files.
///
/// A missing folder is reported and skipped, not treated as an error.
/// Listing, metadata and write failures are returned to the caller.
pub fn generate_index(
    root: &Path,
    cfg: &ScanConfig,
    quiet: bool,
) -> Result<IndexOutcome, IndexError> {
    let folder = root.join(&cfg.folder);

    if !folder.exists() {
        log::info!("{} does not exist, skipping", folder.display());
        if !quiet {
            report::print_missing(&folder);
        }
        return Ok(IndexOutcome::MissingFolder { folder });
    }

    let mut records = scanner::scan_folder(&folder, cfg)?;
    sort_records(&mut records);

    let json = render(&records)?;
    let output_path = folder.join(&cfg.output_file);
    fs::write(&output_path, &json).map_err(|source| IndexError::Write {
        path: output_path.clone(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", json.len(), output_path.display());

    if !quiet {
        report::print_written(&output_path, records.len());
    }

    Ok(IndexOutcome::Written {
        output_path,
        entries: records.len(),
        bytes: json.len() as u64,
    })
}

/// Newest first; equal timestamps fall back to name order so repeated runs
/// produce identical bytes.
pub fn sort_records(records: &mut [FileRecord]) {
    records.sort_by(|a, b| {
        b.modified
            .cmp(&a.modified)
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Pretty JSON, two-space indent, non-ASCII left as is.
pub fn render(records: &[FileRecord]) -> Result<String, IndexError> {
    Ok(serde_json::to_string_pretty(records)?)
}
