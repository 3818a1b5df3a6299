//! Snapshot of the map's pointer-driven UI state.

use crate::types::weather_record::WeatherRecord;
use serde::Serialize;

/// Tooltip shown next to the pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverInfo {
    /// Pointer position in screen pixels.
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Which city is open in the popup and what the tooltip shows.
///
/// Starts empty. Each transition of
/// [`InteractionController`](crate::InteractionController) takes the current
/// state and returns the next one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionState {
    pub selected: Option<WeatherRecord>,
    pub hover: Option<HoverInfo>,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.selected.is_none() && self.hover.is_none()
    }
}
