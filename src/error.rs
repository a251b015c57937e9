use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Failed to list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read metadata of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
