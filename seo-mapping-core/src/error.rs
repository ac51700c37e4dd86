use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("cannot prepare output directory {path}: {source}")]
    OutputDir { path: PathBuf, source: io::Error },

    #[error("failed to serialize {artifact}: {source}")]
    Serialize {
        artifact: &'static str,
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}
