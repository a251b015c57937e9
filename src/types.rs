use serde::Serialize;
use std::path::PathBuf;
use std::time::SystemTime;

/// One entry of a generated index.
///
/// `modified` is only the sort key and is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub name: String,
    pub path: String,
    pub date: String,
    #[serde(skip)]
    pub modified: SystemTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    Written {
        output_path: PathBuf,
        entries: usize,
        bytes: u64,
    },
    MissingFolder {
        folder: PathBuf,
    },
}
