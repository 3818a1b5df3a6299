use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradientError {
    #[error("A threshold table needs at least 2 entries, got {0}")]
    TooFewThresholds(usize),

    #[error("Threshold {index} ({temperature}°C) is not above the previous one ({previous}°C)")]
    NotAscending {
        index: usize,
        temperature: f64,
        previous: f64,
    },

    #[error("Threshold {0} has a non-finite temperature")]
    NonFiniteTemperature(usize),

    #[error("Failed to read threshold table '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse threshold table JSON")]
    JsonParse(#[from] serde_json::Error),
}
