//! Hit-testing of map positions against record coordinates.
//!
//! A record "hits" a target when both its latitude and longitude are within the
//! tolerance of the target, each axis checked on its own. This is an
//! axis-aligned box in degrees, not a geodesic radius.

use crate::types::weather_record::WeatherRecord;

/// Half-width of the hit window in degrees, about 50 km at the equator.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Returns true if `record` has coordinates strictly inside the window around the target.
pub fn within_window(record: &WeatherRecord, target_lon: f64, target_lat: f64, tolerance: f64) -> bool {
    match record.coordinates() {
        Some([long, lat]) => (lat - target_lat).abs() < tolerance && (long - target_lon).abs() < tolerance,
        None => false,
    }
}

/// Finds the first record, in input order, inside the tolerance window around
/// `(target_lon, target_lat)`.
///
/// Records without both coordinates are skipped. When several records are in
/// the window the earliest one wins, even if a later one is closer.
///
/// # Examples
///
/// ```
/// use vaycay::{nearest_within, WeatherRecord, DEFAULT_TOLERANCE};
///
/// let milan = WeatherRecord {
///     city: "Milan".into(),
///     lat: Some(45.4642),
///     long: Some(9.19),
///     ..Default::default()
/// };
/// let records = [milan];
/// assert!(nearest_within(&records, 9.3, 45.6, DEFAULT_TOLERANCE).is_some());
/// assert!(nearest_within(&records, 10.0, 46.0, DEFAULT_TOLERANCE).is_none());
/// ```
pub fn nearest_within(
    records: &[WeatherRecord],
    target_lon: f64,
    target_lat: f64,
    tolerance: f64,
) -> Option<&WeatherRecord> {
    records
        .iter()
        .find(|record| within_window(record, target_lon, target_lat, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(name: &str, lat: Option<f64>, long: Option<f64>) -> WeatherRecord {
        WeatherRecord {
            city: name.to_string(),
            lat,
            long,
            avg_temperature: Some(20.0),
            ..Default::default()
        }
    }

    fn milan() -> WeatherRecord {
        at("Milan", Some(45.4642), Some(9.19))
    }

    #[test]
    fn test_exact_position_matches() {
        let records = [milan()];
        let found = nearest_within(&records, 9.19, 45.4642, DEFAULT_TOLERANCE);
        assert_eq!(found.map(|r| r.city.as_str()), Some("Milan"));
    }

    #[test]
    fn test_inside_tolerance_matches() {
        let records = [milan()];
        assert!(nearest_within(&records, 9.3, 45.6, DEFAULT_TOLERANCE).is_some());
    }

    #[test]
    fn test_outside_tolerance_on_both_axes() {
        let records = [milan()];
        assert!(nearest_within(&records, 10.0, 46.0, DEFAULT_TOLERANCE).is_none());
    }

    #[test]
    fn test_outside_tolerance_on_one_axis() {
        let records = [milan()];
        // Latitude fits, longitude is 0.6° off.
        assert!(nearest_within(&records, 9.79, 45.4642, DEFAULT_TOLERANCE).is_none());
        assert!(nearest_within(&records, 9.19, 44.9, DEFAULT_TOLERANCE).is_none());
    }

    #[test]
    fn test_window_edge_is_exclusive() {
        let records = [at("Origin", Some(0.0), Some(0.0))];
        assert!(nearest_within(&records, 0.5, 0.0, DEFAULT_TOLERANCE).is_none());
        assert!(nearest_within(&records, 0.0, -0.5, DEFAULT_TOLERANCE).is_none());
        assert!(nearest_within(&records, 0.49, -0.49, DEFAULT_TOLERANCE).is_some());
    }

    #[test]
    fn test_skips_missing_coordinates() {
        let records = [
            at("Invalid", None, None),
            at("HalfLat", Some(45.4642), None),
            at("HalfLong", None, Some(9.19)),
            milan(),
        ];
        let found = nearest_within(&records, 9.19, 45.4642, DEFAULT_TOLERANCE);
        assert_eq!(found.map(|r| r.city.as_str()), Some("Milan"));
    }

    #[test]
    fn test_first_match_wins_over_closer_match() {
        let records = [
            at("Farther", Some(45.8), Some(9.5)),
            at("Exact", Some(45.4642), Some(9.19)),
        ];
        let found = nearest_within(&records, 9.19, 45.4642, DEFAULT_TOLERANCE);
        assert_eq!(found.map(|r| r.city.as_str()), Some("Farther"));
    }

    #[test]
    fn test_empty_input() {
        assert!(nearest_within(&[], 0.0, 0.0, DEFAULT_TOLERANCE).is_none());
    }

    #[test]
    fn test_custom_tolerance() {
        let records = [milan()];
        assert!(nearest_within(&records, 10.0, 46.0, 1.0).is_some());
        assert!(nearest_within(&records, 9.19, 45.4642, 0.0).is_none());
    }
}
