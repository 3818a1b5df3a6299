use crate::dates::error::DateCodecError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read weather records from '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse weather records in '{0}'")]
    JsonParse(PathBuf, #[source] serde_json::Error),

    #[error("Invalid day key")]
    InvalidMonthDay(#[from] DateCodecError),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
