use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed trigger comment: {0}")]
    MalformedInput(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Completion API error: {0}")]
    CompletionApi(String),

    #[error("Tag <{0}> not found in completion response")]
    TagNotFound(String),

    #[error("Issue API error: {0}")]
    IssueApi(String),
}

impl AppError {
    /// Maps an I/O failure on `path`, keeping "not found" distinct.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            AppError::FileNotFound(path)
        } else {
            AppError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
