//! The temperature threshold table: the anchor points of the marker color gradient.
//!
//! The table is the one tunable constant of the visualization. It is validated
//! once when built and never mutated afterwards.

use crate::gradient::error::GradientError;
use crate::types::rgb::Rgb;
use log::warn;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;

/// One anchor of the gradient: a temperature in °C and the color drawn at it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureThreshold {
    pub temperature: f64,
    pub color: Rgb,
}

impl TemperatureThreshold {
    pub const fn new(temperature: f64, color: Rgb) -> Self {
        Self { temperature, color }
    }
}

/// Key transition points only. Colors between anchors are interpolated.
const DEFAULT_THRESHOLDS: [TemperatureThreshold; 10] = [
    TemperatureThreshold::new(-20.0, Rgb(75, 0, 130)), // deep purple
    TemperatureThreshold::new(-10.0, Rgb(0, 0, 255)),  // blue
    TemperatureThreshold::new(0.0, Rgb(135, 206, 250)), // light blue
    TemperatureThreshold::new(8.0, Rgb(64, 224, 208)), // turquoise
    TemperatureThreshold::new(13.0, Rgb(34, 139, 34)), // green
    TemperatureThreshold::new(19.0, Rgb(255, 255, 0)), // yellow
    TemperatureThreshold::new(24.0, Rgb(255, 180, 0)), // yellow-orange
    TemperatureThreshold::new(29.0, Rgb(255, 100, 0)), // orange
    TemperatureThreshold::new(34.0, Rgb(255, 69, 0)),  // orange-red
    TemperatureThreshold::new(45.0, Rgb(255, 0, 0)),   // red
];

/// The process-wide default table, running from -20°C (deep purple) to 45°C (red).
pub static DEFAULT_TABLE: ThresholdTable = ThresholdTable {
    thresholds: Cow::Borrowed(&DEFAULT_THRESHOLDS),
};

/// An ordered, validated list of [`TemperatureThreshold`]s.
///
/// Invariants, checked by every constructor:
/// * at least two entries (the first clamps low, the last clamps high);
/// * temperatures are finite and strictly increasing.
///
/// Deserializes from a JSON array of `{"temperature": .., "color": [r, g, b]}`
/// objects and rejects arrays that break the invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TemperatureThreshold>", into = "Vec<TemperatureThreshold>")]
pub struct ThresholdTable {
    /// Borrowed for the static default so it needs no allocation, owned for loaded tables.
    thresholds: Cow<'static, [TemperatureThreshold]>,
}

impl ThresholdTable {
    pub fn new(thresholds: Vec<TemperatureThreshold>) -> Result<Self, GradientError> {
        validate(&thresholds)?;
        Ok(Self {
            thresholds: Cow::Owned(thresholds),
        })
    }

    /// Parses and validates a table from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, GradientError> {
        let thresholds: Vec<TemperatureThreshold> = serde_json::from_str(json)?;
        Self::new(thresholds).inspect_err(|e| warn!("Rejected threshold table: {}", e))
    }

    /// Reads and validates a table from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, GradientError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| GradientError::Read(path.to_path_buf(), e))?;
        Self::from_json_str(&json)
    }

    pub fn thresholds(&self) -> &[TemperatureThreshold] {
        &self.thresholds
    }

    /// The clamp-low anchor.
    pub fn first(&self) -> TemperatureThreshold {
        self.thresholds[0]
    }

    /// The clamp-high anchor.
    pub fn last(&self) -> TemperatureThreshold {
        self.thresholds[self.thresholds.len() - 1]
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl TryFrom<Vec<TemperatureThreshold>> for ThresholdTable {
    type Error = GradientError;

    fn try_from(thresholds: Vec<TemperatureThreshold>) -> Result<Self, Self::Error> {
        Self::new(thresholds)
    }
}

impl From<ThresholdTable> for Vec<TemperatureThreshold> {
    fn from(table: ThresholdTable) -> Self {
        table.thresholds.into_owned()
    }
}

fn validate(thresholds: &[TemperatureThreshold]) -> Result<(), GradientError> {
    if thresholds.len() < 2 {
        return Err(GradientError::TooFewThresholds(thresholds.len()));
    }
    if let Some(index) = thresholds.iter().position(|t| !t.temperature.is_finite()) {
        return Err(GradientError::NonFiniteTemperature(index));
    }
    for (index, pair) in thresholds.windows(2).enumerate() {
        if pair[1].temperature <= pair[0].temperature {
            return Err(GradientError::NotAscending {
                index: index + 1,
                temperature: pair[1].temperature,
                previous: pair[0].temperature,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_static_table_borrows_and_loaded_table_owns() {
        assert!(matches!(DEFAULT_TABLE.thresholds, Cow::Borrowed(_)));
        let loaded = ThresholdTable::new(DEFAULT_TABLE.thresholds().to_vec()).unwrap();
        assert!(matches!(loaded.thresholds, Cow::Owned(_)));
        assert_eq!(loaded, DEFAULT_TABLE);
    }

    #[test]
    fn test_default_table_is_valid() {
        assert!(validate(DEFAULT_TABLE.thresholds()).is_ok());
        assert_eq!(DEFAULT_TABLE.thresholds().len(), 10);
        assert_eq!(DEFAULT_TABLE.first().temperature, -20.0);
        assert_eq!(DEFAULT_TABLE.last().color, Rgb(255, 0, 0));
        assert_eq!(ThresholdTable::default(), DEFAULT_TABLE);
    }

    #[test]
    fn test_rejects_short_table() {
        let result = ThresholdTable::new(vec![TemperatureThreshold::new(0.0, Rgb(0, 0, 0))]);
        assert!(matches!(result, Err(GradientError::TooFewThresholds(1))));
        assert!(matches!(
            ThresholdTable::new(vec![]),
            Err(GradientError::TooFewThresholds(0))
        ));
    }

    #[test]
    fn test_rejects_unsorted_and_duplicate_temperatures() {
        let unsorted = vec![
            TemperatureThreshold::new(0.0, Rgb(0, 0, 0)),
            TemperatureThreshold::new(10.0, Rgb(0, 0, 0)),
            TemperatureThreshold::new(5.0, Rgb(0, 0, 0)),
        ];
        assert!(matches!(
            ThresholdTable::new(unsorted),
            Err(GradientError::NotAscending { index: 2, .. })
        ));
        let duplicate = vec![
            TemperatureThreshold::new(0.0, Rgb(0, 0, 0)),
            TemperatureThreshold::new(0.0, Rgb(255, 255, 255)),
        ];
        assert!(matches!(
            ThresholdTable::new(duplicate),
            Err(GradientError::NotAscending { index: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_temperature() {
        let table = vec![
            TemperatureThreshold::new(f64::NEG_INFINITY, Rgb(0, 0, 0)),
            TemperatureThreshold::new(0.0, Rgb(0, 0, 0)),
        ];
        assert!(matches!(
            ThresholdTable::new(table),
            Err(GradientError::NonFiniteTemperature(0))
        ));
    }

    #[test]
    fn test_json_round_trip_and_validation() {
        let json = r#"[
            {"temperature": -5, "color": [0, 0, 255]},
            {"temperature": 35, "color": [255, 0, 0]}
        ]"#;
        let table = ThresholdTable::from_json_str(json).unwrap();
        assert_eq!(table.thresholds().len(), 2);
        assert_eq!(table.first().color, Rgb(0, 0, 255));

        let serialized = serde_json::to_string(&table).unwrap();
        let back: ThresholdTable = serde_json::from_str(&serialized).unwrap();
        assert_eq!(back, table);

        let invalid = r#"[{"temperature": 5, "color": [0, 0, 0]}]"#;
        assert!(serde_json::from_str::<ThresholdTable>(invalid).is_err());
        assert!(matches!(
            ThresholdTable::from_json_str("not json"),
            Err(GradientError::JsonParse(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"temperature": 0, "color": [0, 0, 0]}}, {{"temperature": 1, "color": [9, 9, 9]}}]"#
        )
        .unwrap();
        let table = ThresholdTable::from_path(file.path()).unwrap();
        assert_eq!(table.last().color, Rgb(9, 9, 9));

        let missing = ThresholdTable::from_path(Path::new("/nonexistent/thresholds.json"));
        assert!(matches!(missing, Err(GradientError::Read(_, _))));
    }
}
