//! Map-wide configuration shared by the compositor and the interaction controller.

use crate::gradient::thresholds::ThresholdTable;
use crate::heatmap::projector::HeatmapWeighting;
use crate::interaction::controller::InteractionController;
use crate::layers::cache::CachedCompositor;
use crate::layers::compositor::LayerCompositor;
use crate::spatial::lookup::DEFAULT_TOLERANCE;
use crate::types::view_mode::ViewMode;
use crate::types::weather_record::WeatherRecord;
use bon::bon;
use serde::{Deserialize, Serialize};

/// Settings for one map view.
///
/// Every field has a default, so a settings document may leave any of them out.
///
/// # Examples
///
/// ```
/// use vaycay::{HeatmapWeighting, MapSettings};
///
/// let settings = MapSettings::builder()
///     .weighting(HeatmapWeighting::Normalized)
///     .build();
/// assert_eq!(settings.tolerance, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapSettings {
    /// Half-width in degrees of the heatmap hit-test window.
    pub tolerance: f64,
    pub weighting: HeatmapWeighting,
    pub table: ThresholdTable,
}

#[bon]
impl MapSettings {
    #[builder]
    pub fn new(tolerance: Option<f64>, weighting: Option<HeatmapWeighting>, table: Option<ThresholdTable>) -> Self {
        Self {
            tolerance: tolerance.unwrap_or(DEFAULT_TOLERANCE),
            weighting: weighting.unwrap_or_default(),
            table: table.unwrap_or_default(),
        }
    }

    pub fn compositor(&self) -> LayerCompositor {
        LayerCompositor::new(self.table.clone(), self.weighting)
    }

    pub fn cached_compositor(&self) -> CachedCompositor {
        CachedCompositor::new(self.compositor())
    }

    pub fn controller<'a>(&self, records: &'a [WeatherRecord], view_mode: ViewMode) -> InteractionController<'a> {
        InteractionController::new(records, view_mode).with_tolerance(self.tolerance)
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
