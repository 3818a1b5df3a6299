//! Label/value pairs shown when a city is selected.

use crate::format::text::{format_population, format_temperature, format_value, title_case, NOT_AVAILABLE};
use crate::types::weather_record::WeatherRecord;
use serde::Serialize;

/// One labelled line of a popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupField {
    pub label: &'static str,
    pub value: String,
}

impl PopupField {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// The compact popup: only the metrics the record actually has, in a fixed order.
pub fn popup_fields(record: &WeatherRecord) -> Vec<PopupField> {
    let temperatures = [
        ("Max Temp", record.max_temperature),
        ("Min Temp", record.min_temperature),
        ("Average Temp", record.avg_temperature),
    ];
    let mut fields: Vec<PopupField> = temperatures
        .into_iter()
        .filter_map(|(label, value)| format_temperature(value).map(|v| PopupField::new(label, v)))
        .collect();

    if let Some(precipitation) = record.precipitation {
        fields.push(PopupField::new("Precipitation", format!("{}cm", precipitation)));
    }
    if let Some(population) = record.population {
        fields.push(PopupField::new("Population", format_population(population)));
    }
    fields
}

/// Formats a position as `"45.4642°, 9.1900°"` (latitude first).
pub fn coordinates_label(record: &WeatherRecord) -> Option<String> {
    match (record.lat, record.long) {
        (Some(lat), Some(long)) => Some(format!("{:.4}°, {:.4}°", lat, long)),
        _ => None,
    }
}

/// Everything the detailed city panel shows, already formatted.
///
/// Temperatures and precipitation are always present, using `"N/A"` for
/// missing values. Optional sections are `None` when there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDetails {
    pub title: String,
    pub state: Option<String>,
    pub suburb: Option<String>,
    pub date: String,
    pub average: String,
    pub max: String,
    pub min: String,
    pub rainfall: String,
    pub snow_depth: String,
    pub population: Option<String>,
    pub station_name: String,
    pub coordinates: Option<String>,
}

impl From<&WeatherRecord> for CityDetails {
    fn from(record: &WeatherRecord) -> Self {
        let temperature = |t: Option<f64>| format_temperature(t).unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let title = match record.country.as_deref().filter(|c| !c.is_empty()) {
            Some(country) => format!("{}, {}", title_case(&record.city), country),
            None => title_case(&record.city),
        };
        let non_empty = |s: &Option<String>| s.as_deref().filter(|s| !s.is_empty()).map(title_case);

        Self {
            title,
            state: non_empty(&record.state),
            suburb: non_empty(&record.suburb),
            date: record.date.clone(),
            average: temperature(record.avg_temperature),
            max: temperature(record.max_temperature),
            min: temperature(record.min_temperature),
            rainfall: format_value(record.precipitation, " mm"),
            snow_depth: format_value(record.snow_depth, " cm"),
            population: record
                .population
                .filter(|p| *p != 0.0)
                .map(format_population),
            station_name: record.station_name.clone(),
            coordinates: coordinates_label(record),
        }
    }
}
