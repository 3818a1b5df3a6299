//! Reads records from a JSON array on disk.

use crate::dates::month_day::MonthDay;
use crate::source::error::SourceError;
use crate::source::{select_day, WeatherSource};
use crate::types::weather_record::WeatherRecord;
use log::{info, warn};
use std::path::{Path, PathBuf};
use tokio::{fs, task};

/// A JSON file holding an array of records for any number of days.
///
/// The file is read again on every request, so edits show up without
/// rebuilding the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record in the file regardless of date.
    pub async fn load_all(&self) -> Result<Vec<WeatherRecord>, SourceError> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            warn!("Could not read weather records from {:?}: {}", self.path, e);
            SourceError::Read(self.path.clone(), e)
        })?;

        let path = self.path.clone();
        let records = task::spawn_blocking(move || {
            serde_json::from_slice::<Vec<WeatherRecord>>(&bytes).map_err(|e| SourceError::JsonParse(path, e))
        })
        .await??;

        info!("Loaded {} weather records from {:?}", records.len(), self.path);
        Ok(records)
    }
}

impl WeatherSource for JsonFileSource {
    async fn records_for(&self, month_day: MonthDay) -> Result<Vec<WeatherRecord>, SourceError> {
        let records = self.load_all().await?;
        let total = records.len();
        let selected = select_day(records, month_day);
        info!("Selected {} of {} records for {}", selected.len(), total, month_day);
        Ok(selected)
    }
}
