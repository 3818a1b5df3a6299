//! Renderer-facing description of the map layers: identifier, style and data.

use crate::gradient::thresholds::{ThresholdTable, DEFAULT_TABLE};
use crate::layers::compositor::LayerData;
use crate::types::rgb::Rgb;
use serde::Serialize;

pub const HEATMAP_LAYER_ID: &str = "temperature-heatmap";
pub const MARKER_LAYER_ID: &str = "city-markers";

/// Duration of the animation applied when a layer's values change.
pub const TRANSITION_MS: u32 = 500;

/// Timing curve of a value transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    EaseOutQuad,
}

impl Easing {
    /// Maps elapsed progress in `0..=1` to animated progress.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::EaseOutQuad => t * (2.0 - t),
        }
    }
}

/// How a layer animates from old values to new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: TRANSITION_MS,
            easing: Easing::default(),
        }
    }
}

/// How overlapping heatmap samples are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Aggregation {
    Mean,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapStyle {
    pub radius_pixels: u32,
    pub intensity: f64,
    pub threshold: f64,
    pub color_range: Vec<Rgb>,
    pub aggregation: Aggregation,
    pub opacity: f64,
}

impl HeatmapStyle {
    /// Style whose color ramp follows the anchors of `table`.
    pub fn for_table(table: &ThresholdTable) -> Self {
        Self {
            radius_pixels: 40,
            intensity: 1.0,
            threshold: 0.03,
            color_range: table.color_range(),
            aggregation: Aggregation::Mean,
            opacity: 0.6,
        }
    }
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self::for_table(&DEFAULT_TABLE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Marker radius in meters on the ground.
    pub radius: f64,
    pub radius_min_pixels: f64,
    pub radius_max_pixels: f64,
    pub pickable: bool,
    pub opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 50_000.0,
            radius_min_pixels: 3.0,
            radius_max_pixels: 8.0,
            pickable: true,
            opacity: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerStyle {
    Heatmap(HeatmapStyle),
    Markers(MarkerStyle),
}

impl LayerStyle {
    pub fn layer_id(&self) -> &'static str {
        match self {
            LayerStyle::Heatmap(_) => HEATMAP_LAYER_ID,
            LayerStyle::Markers(_) => MARKER_LAYER_ID,
        }
    }
}

/// One map layer ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDescriptor {
    pub id: &'static str,
    pub visible: bool,
    pub transition: Transition,
    pub style: LayerStyle,
    pub data: LayerData,
}

impl LayerDescriptor {
    pub fn new(style: LayerStyle, data: LayerData, visible: bool) -> Self {
        Self {
            id: style.layer_id(),
            visible,
            transition: Transition::default(),
            style,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatmap::projector::HeatmapSample;

    #[test]
    fn test_heatmap_style_defaults() {
        let style = HeatmapStyle::default();
        assert_eq!(style.radius_pixels, 40);
        assert_eq!(style.intensity, 1.0);
        assert_eq!(style.threshold, 0.03);
        assert_eq!(style.aggregation, Aggregation::Mean);
        assert_eq!(style.opacity, 0.6);
        assert_eq!(style.color_range, DEFAULT_TABLE.color_range());
        assert_eq!(style.color_range.len(), DEFAULT_TABLE.thresholds().len());
    }

    #[test]
    fn test_marker_style_defaults() {
        let style = MarkerStyle::default();
        assert_eq!(style.radius, 50_000.0);
        assert_eq!(style.radius_min_pixels, 3.0);
        assert_eq!(style.radius_max_pixels, 8.0);
        assert!(style.pickable);
        assert_eq!(style.opacity, 0.8);
    }

    #[test]
    fn test_descriptor_takes_id_from_style() {
        let heatmap = LayerDescriptor::new(
            LayerStyle::Heatmap(HeatmapStyle::default()),
            LayerData::Heatmap(Vec::new()),
            true,
        );
        assert_eq!(heatmap.id, "temperature-heatmap");
        let markers = LayerDescriptor::new(
            LayerStyle::Markers(MarkerStyle::default()),
            LayerData::Markers(Vec::new()),
            false,
        );
        assert_eq!(markers.id, "city-markers");
        assert_eq!(markers.transition.duration_ms, 500);
        assert_eq!(markers.transition.easing, Easing::EaseOutQuad);
    }

    #[test]
    fn test_descriptor_json_shape() {
        let descriptor = LayerDescriptor::new(
            LayerStyle::Heatmap(HeatmapStyle::default()),
            LayerData::Heatmap(vec![HeatmapSample {
                position: [9.19, 45.4642],
                weight: 25.5,
            }]),
            true,
        );
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["id"], "temperature-heatmap");
        assert_eq!(json["transition"]["durationMs"], 500);
        assert_eq!(json["transition"]["easing"], "easeOutQuad");
        assert_eq!(json["style"]["type"], "heatmap");
        assert_eq!(json["style"]["radiusPixels"], 40);
        assert_eq!(json["style"]["aggregation"], "MEAN");
        assert_eq!(json["style"]["colorRange"][0], serde_json::json!([75, 0, 130]));
        assert_eq!(json["data"]["kind"], "heatmap");
    }

    #[test]
    fn test_easing_curves() {
        let ease = Transition::default().easing;
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(0.5), 0.75);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}
