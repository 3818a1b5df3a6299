//! Defines the [`WeatherRecord`] structure: one day of observations for one city,
//! as returned by the record source for a single MMDD key.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A `[longitude, latitude]` pair in decimal degrees.
///
/// Longitude comes first, matching the order map renderers expect for positions.
pub type LngLat = [f64; 2];

/// A single weather observation for one location on one calendar day.
///
/// Records are produced by a [`crate::WeatherSource`] and are never mutated by
/// the visualization pipeline. Every metric is optional: missing values cause a
/// record to be left out of derived datasets rather than being replaced by a
/// sentinel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    /// City name (e.g., "Milan").
    pub city: String,
    /// Country name, if known.
    #[serde(default)]
    pub country: Option<String>,
    /// State or region, if known.
    #[serde(default)]
    pub state: Option<String>,
    /// Suburb or district, if known.
    #[serde(default)]
    pub suburb: Option<String>,
    /// Calendar key in `MMDD` form. The year is not modeled.
    pub date: String,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub long: Option<f64>,
    /// City population.
    #[serde(default)]
    pub population: Option<f64>,
    /// Average temperature in °C.
    #[serde(default)]
    pub avg_temperature: Option<f64>,
    /// Minimum temperature in °C.
    #[serde(default)]
    pub min_temperature: Option<f64>,
    /// Maximum temperature in °C.
    #[serde(default)]
    pub max_temperature: Option<f64>,
    /// Precipitation.
    #[serde(default)]
    pub precipitation: Option<f64>,
    /// Snow depth.
    #[serde(default)]
    pub snow_depth: Option<f64>,
    /// Name of the reporting weather station.
    pub station_name: String,
    /// Identifier of whoever submitted the record, if any.
    #[serde(default)]
    pub submitter_id: Option<String>,
}

impl WeatherRecord {
    /// Returns the record's position as `[longitude, latitude]`.
    ///
    /// A record with only one of the two coordinates is treated as having none.
    pub fn coordinates(&self) -> Option<LngLat> {
        match (self.long, self.lat) {
            (Some(long), Some(lat)) => Some([long, lat]),
            _ => None,
        }
    }

    /// Returns the position and average temperature if all three are present.
    ///
    /// This is the completeness check shared by marker and heatmap layers.
    pub fn plottable(&self) -> Option<(LngLat, f64)> {
        let position = self.coordinates()?;
        let temperature = self.avg_temperature?;
        Some((position, temperature))
    }
}

// Content hash used as a memoization key. Floats are hashed by value through
// `OrderedFloat`, so two records with equal fields hash equally.
impl Hash for WeatherRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.city.hash(state);
        self.country.hash(state);
        self.state.hash(state);
        self.suburb.hash(state);
        self.date.hash(state);
        for value in [
            self.lat,
            self.long,
            self.population,
            self.avg_temperature,
            self.min_temperature,
            self.max_temperature,
            self.precipitation,
            self.snow_depth,
        ] {
            value.map(OrderedFloat).hash(state);
        }
        self.station_name.hash(state);
        self.submitter_id.hash(state);
    }
}
