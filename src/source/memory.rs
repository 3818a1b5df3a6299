//! A source backed by records already in memory.

use crate::dates::month_day::MonthDay;
use crate::source::error::SourceError;
use crate::source::{select_day, WeatherSource};
use crate::types::weather_record::WeatherRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySource {
    records: Vec<WeatherRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<WeatherRecord>) -> Self {
        Self { records }
    }
}

impl From<Vec<WeatherRecord>> for MemorySource {
    fn from(records: Vec<WeatherRecord>) -> Self {
        Self::new(records)
    }
}

impl WeatherSource for MemorySource {
    async fn records_for(&self, month_day: MonthDay) -> Result<Vec<WeatherRecord>, SourceError> {
        Ok(select_day(self.records.clone(), month_day))
    }
}
