use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("Input file '{}' not found.", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize transcript")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CleanupError>;
