//! Builds the dataset of the active map layer from a batch of records.

use crate::gradient::thresholds::ThresholdTable;
use crate::heatmap::projector::{HeatmapProjector, HeatmapSample, HeatmapWeighting};
use crate::layers::descriptor::{HeatmapStyle, LayerDescriptor, LayerStyle, MarkerStyle};
use crate::types::rgb::Rgb;
use crate::types::view_mode::ViewMode;
use crate::types::weather_record::{LngLat, WeatherRecord};
use serde::{Deserialize, Serialize};

/// A city marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColoredPoint {
    /// Index of the source record in the composed batch, used to resolve picks.
    pub index: usize,
    /// `[longitude, latitude]`.
    pub position: LngLat,
    pub color: Rgb,
}

/// The dataset of one layer, tagged by the view mode it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum LayerData {
    Markers(Vec<ColoredPoint>),
    Heatmap(Vec<HeatmapSample>),
}

impl LayerData {
    pub fn view_mode(&self) -> ViewMode {
        match self {
            LayerData::Markers(_) => ViewMode::Markers,
            LayerData::Heatmap(_) => ViewMode::Heatmap,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LayerData::Markers(points) => points.len(),
            LayerData::Heatmap(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Turns records into layer datasets using one threshold table and one heatmap weighting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerCompositor {
    table: ThresholdTable,
    projector: HeatmapProjector,
}

impl LayerCompositor {
    pub fn new(table: ThresholdTable, weighting: HeatmapWeighting) -> Self {
        Self {
            table,
            projector: HeatmapProjector::new(weighting),
        }
    }

    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }

    pub fn weighting(&self) -> HeatmapWeighting {
        self.projector.weighting()
    }

    /// Colored markers for every record with coordinates and an average temperature.
    pub fn markers(&self, records: &[WeatherRecord]) -> Vec<ColoredPoint> {
        records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                record.plottable().map(|(position, temperature)| ColoredPoint {
                    index,
                    position,
                    color: self.table.color_for(temperature),
                })
            })
            .collect()
    }

    pub fn heatmap(&self, records: &[WeatherRecord]) -> Vec<HeatmapSample> {
        self.projector.project(records)
    }

    /// Builds the dataset for `view_mode`. Only the requested layer is computed.
    pub fn compose(&self, records: &[WeatherRecord], view_mode: ViewMode) -> LayerData {
        match view_mode {
            ViewMode::Markers => LayerData::Markers(self.markers(records)),
            ViewMode::Heatmap => LayerData::Heatmap(self.heatmap(records)),
        }
    }

    /// Describes both layers, with only the one matching `view_mode` visible.
    ///
    /// Keeping both layers alive lets a renderer switch modes by toggling
    /// visibility instead of rebuilding a layer.
    pub fn layers(&self, records: &[WeatherRecord], view_mode: ViewMode) -> [LayerDescriptor; 2] {
        [
            LayerDescriptor::new(
                LayerStyle::Heatmap(HeatmapStyle::for_table(&self.table)),
                self.compose(records, ViewMode::Heatmap),
                view_mode == ViewMode::Heatmap,
            ),
            LayerDescriptor::new(
                LayerStyle::Markers(MarkerStyle::default()),
                self.compose(records, ViewMode::Markers),
                view_mode == ViewMode::Markers,
            ),
        ]
    }
}

/// Composes with the default threshold table and Celsius heatmap weights.
///
/// # Examples
///
/// ```
/// use vaycay::{compose, LayerData, ViewMode, WeatherRecord};
///
/// let rome = WeatherRecord {
///     city: "Rome".into(),
///     lat: Some(41.9028),
///     long: Some(12.4964),
///     avg_temperature: Some(28.0),
///     ..Default::default()
/// };
/// let LayerData::Markers(points) = compose(&[rome], ViewMode::Markers) else {
///     panic!("markers requested");
/// };
/// assert_eq!(points[0].position, [12.4964, 41.9028]);
/// ```
pub fn compose(records: &[WeatherRecord], view_mode: ViewMode) -> LayerData {
    LayerCompositor::default().compose(records, view_mode)
}
