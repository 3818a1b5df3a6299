//! Pure state transitions for hover, click and popup close on the map.

use crate::format::text::describe;
use crate::interaction::state::{HoverInfo, InteractionState};
use crate::spatial::index::RecordIndex;
use crate::spatial::lookup::DEFAULT_TOLERANCE;
use crate::types::view_mode::ViewMode;
use crate::types::weather_record::{LngLat, WeatherRecord};
use bon::bon;

/// What the renderer reports for one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent<'a> {
    /// Pointer position in screen pixels.
    pub x: f64,
    pub y: f64,
    /// The record under the pointer, when a pickable marker was hit.
    pub picked: Option<&'a WeatherRecord>,
    /// Map position under the pointer as `[longitude, latitude]`, if over the map.
    pub coordinate: Option<LngLat>,
}

#[bon]
impl<'a> PointerEvent<'a> {
    #[builder]
    pub fn new(x: f64, y: f64, picked: Option<&'a WeatherRecord>, coordinate: Option<LngLat>) -> Self {
        Self {
            x,
            y,
            picked,
            coordinate,
        }
    }
}

/// Resolves pointer events against the records of the current day.
///
/// Markers mode trusts the renderer's pick. Heatmap mode has nothing to pick,
/// so the map coordinate is hit-tested against the records instead.
#[derive(Debug, Clone)]
pub struct InteractionController<'a> {
    index: RecordIndex<'a>,
    view_mode: ViewMode,
    tolerance: f64,
}

impl<'a> InteractionController<'a> {
    pub fn new(records: &'a [WeatherRecord], view_mode: ViewMode) -> Self {
        Self {
            index: RecordIndex::new(records),
            view_mode,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn records(&self) -> &'a [WeatherRecord] {
        self.index.records()
    }

    /// The record a pointer event refers to in the current mode, if any.
    fn target(&self, event: &PointerEvent<'a>) -> Option<&'a WeatherRecord> {
        match self.view_mode {
            ViewMode::Markers => event.picked,
            ViewMode::Heatmap => {
                let [longitude, latitude] = event.coordinate?;
                self.index.nearest_within(longitude, latitude, self.tolerance)
            }
        }
    }

    /// Shows a tooltip for the record under the pointer, or hides it.
    ///
    /// A record without an average temperature has no tooltip text, so
    /// hovering it hides the tooltip too.
    pub fn on_hover(&self, state: InteractionState, event: &PointerEvent<'a>) -> InteractionState {
        let hover = self.target(event).and_then(describe).map(|text| HoverInfo {
            x: event.x,
            y: event.y,
            text,
        });
        InteractionState { hover, ..state }
    }

    /// Selects the record under the pointer. A click on nothing keeps the
    /// current selection.
    pub fn on_click(&self, state: InteractionState, event: &PointerEvent<'a>) -> InteractionState {
        match self.target(event) {
            Some(record) => InteractionState {
                selected: Some(record.clone()),
                ..state
            },
            None => state,
        }
    }

    pub fn on_close_popup(&self, state: InteractionState) -> InteractionState {
        InteractionState {
            selected: None,
            ..state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milan() -> WeatherRecord {
        WeatherRecord {
            city: "Milan".to_string(),
            country: Some("Italy".to_string()),
            date: "0615".to_string(),
            lat: Some(45.4642),
            long: Some(9.19),
            population: Some(1000000.0),
            avg_temperature: Some(25.5),
            min_temperature: Some(20.0),
            max_temperature: Some(30.0),
            precipitation: Some(10.5),
            station_name: "Milan Station".to_string(),
            submitter_id: Some("test-1".to_string()),
            ..Default::default()
        }
    }

    fn rome() -> WeatherRecord {
        WeatherRecord {
            city: "Rome".to_string(),
            lat: Some(41.9028),
            long: Some(12.4964),
            avg_temperature: Some(28.0),
            ..milan()
        }
    }

    fn at<'a>(picked: Option<&'a WeatherRecord>, coordinate: Option<LngLat>) -> PointerEvent<'a> {
        PointerEvent::builder()
            .x(100.0)
            .y(200.0)
            .maybe_picked(picked)
            .maybe_coordinate(coordinate)
            .build()
    }

    fn milan_hover() -> Option<HoverInfo> {
        Some(HoverInfo {
            x: 100.0,
            y: 200.0,
            text: "Milan, Italy\n25.5°C".to_string(),
        })
    }

    #[test]
    fn test_builder_defaults() {
        let event = PointerEvent::builder().x(1.0).y(2.0).build();
        assert_eq!(event.picked, None);
        assert_eq!(event.coordinate, None);
    }

    #[test]
    fn test_markers_hover_sets_tooltip() {
        let records = [milan()];
        let controller = InteractionController::new(&records, ViewMode::Markers);
        let state = controller.on_hover(InteractionState::default(), &at(Some(&records[0]), None));
        assert_eq!(state.hover, milan_hover());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_markers_hover_on_nothing_clears_tooltip() {
        let records = [milan()];
        let controller = InteractionController::new(&records, ViewMode::Markers);
        let state = controller.on_hover(InteractionState::default(), &at(Some(&records[0]), None));
        // The coordinate is ignored in markers mode.
        let state = controller.on_hover(state, &at(None, Some([9.19, 45.4642])));
        assert_eq!(state.hover, None);
    }

    #[test]
    fn test_markers_hover_without_temperature_clears_tooltip() {
        let mut record = milan();
        record.avg_temperature = None;
        let records = [milan(), record];
        let controller = InteractionController::new(&records, ViewMode::Markers);
        let state = controller.on_hover(InteractionState::default(), &at(Some(&records[0]), None));
        let state = controller.on_hover(state, &at(Some(&records[1]), None));
        assert_eq!(state.hover, None);
    }

    #[test]
    fn test_heatmap_hover_over_city() {
        let records = [milan()];
        let controller = InteractionController::new(&records, ViewMode::Heatmap);
        let state = controller.on_hover(InteractionState::default(), &at(None, Some([9.19, 45.4642])));
        assert_eq!(state.hover, milan_hover());
    }

    #[test]
    fn test_heatmap_hover_over_empty_area() {
        let records = [milan()];
        let controller = InteractionController::new(&records, ViewMode::Heatmap);
        let state = controller.on_hover(InteractionState::default(), &at(None, Some([0.0, 0.0])));
        assert_eq!(state.hover, None);
    }

    #[test]
    fn test_heatmap_hover_without_coordinate() {
        let records = [milan()];
        let controller = InteractionController::new(&records, ViewMode::Heatmap);
        let state = controller.on_hover(InteractionState::default(), &at(None, Some([9.19, 45.4642])));
        // A pick is ignored in heatmap mode.
        let state = controller.on_hover(state, &at(Some(&records[0]), None));
        assert_eq!(state.hover, None);
    }

    #[test]
    fn test_heatmap_hover_over_city_without_temperature() {
        let mut record = milan();
        record.avg_temperature = None;
        let records = [record];
        let controller = InteractionController::new(&records, ViewMode::Heatmap);
        let state = controller.on_hover(InteractionState::default(), &at(None, Some([9.19, 45.4642])));
        assert_eq!(state.hover, None);
    }

    #[test]
    fn test_markers_click_selects_city() {
        let records = [milan()];
        let controller = InteractionController::new(&records, ViewMode::Markers);
        let state = controller.on_click(InteractionState::default(), &at(Some(&records[0]), None));
        assert_eq!(state.selected, Some(milan()));
    }

    #[test]
    fn test_markers_click_on_nothing_keeps_selection() {
        let records = [milan(), rome()];
        let controller = InteractionController::new(&records, ViewMode::Markers);
        let state = controller.on_click(InteractionState::default(), &at(None, None));
        assert_eq!(state.selected, None);

        let state = controller.on_click(state, &at(Some(&records[1]), None));
        let state = controller.on_click(state, &at(None, None));
        assert_eq!(state.selected.map(|r| r.city), Some("Rome".to_string()));
    }

    #[test]
    fn test_heatmap_click_selects_city() {
        let records = [milan(), rome()];
        let controller = InteractionController::new(&records, ViewMode::Heatmap);
        let state = controller.on_click(InteractionState::default(), &at(None, Some([12.5, 41.9])));
        assert_eq!(state.selected, Some(rome()));
    }

    #[test]
    fn test_heatmap_click_miss_keeps_selection() {
        let records = [milan()];
        let controller = InteractionController::new(&records, ViewMode::Heatmap);
        let state = controller.on_click(InteractionState::default(), &at(None, Some([9.19, 45.4642])));
        let state = controller.on_click(state, &at(None, Some([0.0, 0.0])));
        assert_eq!(state.selected, Some(milan()));
        let state = controller.on_click(state, &at(None, None));
        assert_eq!(state.selected, Some(milan()));
    }

    #[test]
    fn test_heatmap_click_selects_city_without_temperature() {
        let mut record = milan();
        record.avg_temperature = None;
        let records = [record.clone()];
        let controller = InteractionController::new(&records, ViewMode::Heatmap);
        let state = controller.on_click(InteractionState::default(), &at(None, Some([9.19, 45.4642])));
        assert_eq!(state.selected, Some(record));
    }

    #[test]
    fn test_click_leaves_hover_alone() {
        let records = [milan()];
        let controller = InteractionController::new(&records, ViewMode::Markers);
        let state = controller.on_hover(InteractionState::default(), &at(Some(&records[0]), None));
        let state = controller.on_click(state, &at(Some(&records[0]), None));
        assert_eq!(state.hover, milan_hover());
        assert_eq!(state.selected, Some(milan()));
    }

    #[test]
    fn test_close_popup_clears_selection_only() {
        let records = [milan()];
        let controller = InteractionController::new(&records, ViewMode::Markers);
        let state = controller.on_click(InteractionState::default(), &at(Some(&records[0]), None));
        let state = controller.on_hover(state, &at(Some(&records[0]), None));
        let state = controller.on_close_popup(state);
        assert_eq!(state.selected, None);
        assert_eq!(state.hover, milan_hover());
        assert!(controller.on_close_popup(InteractionState::default()).is_idle());
    }

    #[test]
    fn test_custom_tolerance() {
        let records = [milan()];
        let controller = InteractionController::new(&records, ViewMode::Heatmap).with_tolerance(1.0);
        assert_eq!(controller.tolerance(), 1.0);
        let state = controller.on_hover(InteractionState::default(), &at(None, Some([10.0, 46.0])));
        assert_eq!(state.hover, milan_hover());
    }
}
