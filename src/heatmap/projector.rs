//! Projects weather records onto weighted heatmap samples.

use crate::types::weather_record::{LngLat, WeatherRecord};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Share of the observed temperature span added on each side before normalizing.
const NORMALIZATION_PADDING: f64 = 0.1;

/// One point of the heatmap layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSample {
    /// `[longitude, latitude]`.
    pub position: LngLat,
    pub weight: f64,
}

/// How a record's average temperature becomes a sample weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapWeighting {
    /// The raw temperature in °C. Matches the Celsius anchors of the
    /// threshold table, so the heatmap ramp and marker colors agree.
    #[default]
    Celsius,
    /// The temperature rescaled to `0..=1` against the batch minimum and maximum,
    /// each widened by 10% of the span. A batch where every temperature is equal
    /// gets `0.5` everywhere.
    Normalized,
}

/// Lowest and highest average temperature present in a batch of records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl TemperatureRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Widens both ends by `fraction` of the span.
    pub fn padded(&self, fraction: f64) -> Self {
        let pad = self.span() * fraction;
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Rescales `value` into `0..=1`, clamping values outside the range.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min {
            return 0.5;
        }
        (value.clamp(self.min, self.max) - self.min) / self.span()
    }
}

/// Returns the range of the present average temperatures, or `None` if there are none.
pub fn temperature_range(records: &[WeatherRecord]) -> Option<TemperatureRange> {
    range_of(records.iter().filter_map(|r| r.avg_temperature))
}

/// Turns records into heatmap samples.
///
/// Only records with latitude, longitude and average temperature are kept.
/// Input order is preserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeatmapProjector {
    weighting: HeatmapWeighting,
}

impl HeatmapProjector {
    pub fn new(weighting: HeatmapWeighting) -> Self {
        Self { weighting }
    }

    pub fn weighting(&self) -> HeatmapWeighting {
        self.weighting
    }

    pub fn project(&self, records: &[WeatherRecord]) -> Vec<HeatmapSample> {
        let plottable: Vec<(LngLat, f64)> = records.iter().filter_map(WeatherRecord::plottable).collect();

        match self.weighting {
            HeatmapWeighting::Celsius => plottable
                .into_iter()
                .map(|(position, temperature)| HeatmapSample {
                    position,
                    weight: temperature,
                })
                .collect(),
            HeatmapWeighting::Normalized => {
                let Some(range) = range_of(plottable.iter().map(|(_, t)| *t)) else {
                    return Vec::new();
                };
                let range = range.padded(NORMALIZATION_PADDING);
                plottable
                    .into_iter()
                    .map(|(position, temperature)| HeatmapSample {
                        position,
                        weight: range.normalize(temperature),
                    })
                    .collect()
            }
        }
    }
}

/// Projects records with the default [`HeatmapWeighting::Celsius`] weights.
///
/// # Examples
///
/// ```
/// use vaycay::{project, WeatherRecord};
///
/// let milan = WeatherRecord {
///     city: "Milan".into(),
///     lat: Some(45.4642),
///     long: Some(9.19),
///     avg_temperature: Some(25.5),
///     ..Default::default()
/// };
/// let samples = project(&[milan]);
/// assert_eq!(samples[0].position, [9.19, 45.4642]);
/// assert_eq!(samples[0].weight, 25.5);
/// ```
pub fn project(records: &[WeatherRecord]) -> Vec<HeatmapSample> {
    HeatmapProjector::default().project(records)
}

fn range_of(values: impl Iterator<Item = f64> + Clone) -> Option<TemperatureRange> {
    let min = values.clone().map(OrderedFloat).min()?;
    let max = values.map(OrderedFloat).max()?;
    Some(TemperatureRange {
        min: min.into_inner(),
        max: max.into_inner(),
    })
}
