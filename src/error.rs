use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while sanitizing a dashboard
#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("dashboard root must be a JSON object")]
    NotAnObject,

    #[error("dashboard has no string \"title\" field")]
    MissingTitle,

    #[error("dashboard title {0:?} cannot be used as a file name")]
    InvalidTitle(String),

    #[error("failed to serialize dashboard")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to locate the tool directory")]
    ToolDirectory(#[source] std::io::Error),

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = SanitizeError> = std::result::Result<T, E>;
