use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CutError {
    #[error("{tool} binary not found in PATH")]
    BinaryNotFound { tool: &'static str },
    #[error("download failed (exit_code={exit_code:?}): {stderr}")]
    Download {
        exit_code: Option<i32>,
        stderr: String,
    },
    #[error("trim failed (exit_code={exit_code:?}): {stderr}")]
    Trim {
        exit_code: Option<i32>,
        stderr: String,
    },
    #[error("expected file does not exist: {}", path.display())]
    MissingFile { path: PathBuf },
    #[error("invalid timestamp `{value}`, expected HH:MM:SS")]
    InvalidTimestamp { value: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
