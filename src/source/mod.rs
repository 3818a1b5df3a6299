pub mod error;
pub mod json_file;
pub mod memory;

use crate::dates::month_day::MonthDay;
use crate::source::error::SourceError;
use crate::types::weather_record::WeatherRecord;
use std::future::Future;

/// Supplies the records of one calendar day.
pub trait WeatherSource: Send + Sync {
    /// Returns every record whose `date` equals `month_day` in `MMDD` form.
    fn records_for(
        &self,
        month_day: MonthDay,
    ) -> impl Future<Output = Result<Vec<WeatherRecord>, SourceError>> + Send;

    /// Like [`WeatherSource::records_for`], taking an unparsed `MMDD` key.
    ///
    /// Fails with [`SourceError::InvalidMonthDay`] before touching the source
    /// when the key is not a real calendar day.
    fn records_for_key(&self, key: &str) -> impl Future<Output = Result<Vec<WeatherRecord>, SourceError>> + Send {
        let parsed = key.parse::<MonthDay>();
        async move { self.records_for(parsed?).await }
    }
}

/// Keeps the records dated `month_day`, in their original order.
pub(crate) fn select_day(records: Vec<WeatherRecord>, month_day: MonthDay) -> Vec<WeatherRecord> {
    let key = month_day.to_string();
    records.into_iter().filter(|record| record.date == key).collect()
}
