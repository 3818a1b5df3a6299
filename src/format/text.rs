//! Text rendering of record values for tooltips and popups.

use crate::spatial::lookup::nearest_within;
use crate::types::weather_record::WeatherRecord;

/// Shown in place of a missing value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown when a record has no country.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Formats with one decimal, ties rounded away from zero.
///
/// Small negatives keep their sign, so `-0.04` becomes `"-0.0"`.
fn one_decimal(value: f64) -> String {
    let magnitude = ((value.abs() * 10.0) + 0.5).floor() / 10.0;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.1}", sign, magnitude)
}

/// Formats a temperature as `"25.5°C"`, or `None` when absent.
pub fn format_temperature(temperature: Option<f64>) -> Option<String> {
    temperature.map(|t| format!("{}°C", one_decimal(t)))
}

/// Formats a value with one decimal followed by `unit`, or [`NOT_AVAILABLE`].
pub fn format_value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", one_decimal(v), unit),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Groups the integer part in thousands: `2873000.0` becomes `"2,873,000"`.
///
/// Fractions are kept up to three digits with trailing zeros dropped.
pub fn format_population(population: f64) -> String {
    let negative = population < 0.0;
    let scaled = (population.abs() * 1000.0).round();
    let whole = (scaled / 1000.0).trunc() as u64;
    let fraction = (scaled % 1000.0) as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative && scaled > 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if fraction > 0 {
        let decimals = format!("{:03}", fraction);
        grouped.push('.');
        grouped.push_str(decimals.trim_end_matches('0'));
    }
    grouped
}

/// Capitalizes the first letter of every alphanumeric run and lowercases the rest.
///
/// ```
/// use vaycay::title_case;
///
/// assert_eq!(title_case("NEW YORK"), "New York");
/// assert_eq!(title_case("saint-denis"), "Saint-Denis");
/// ```
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Tooltip text for a record: city and country on the first line, average
/// temperature on the second.
///
/// Returns `None` when the record has no average temperature.
///
/// # Examples
///
/// ```
/// use vaycay::{describe, WeatherRecord};
///
/// let milan = WeatherRecord {
///     city: "Milan".into(),
///     country: Some("Italy".into()),
///     avg_temperature: Some(25.5),
///     ..Default::default()
/// };
/// assert_eq!(describe(&milan).as_deref(), Some("Milan, Italy\n25.5°C"));
/// ```
pub fn describe(record: &WeatherRecord) -> Option<String> {
    let temperature = format_temperature(record.avg_temperature)?;
    let country = record
        .country
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(UNKNOWN_COUNTRY);
    Some(format!("{}, {}\n{}", record.city, country, temperature))
}

/// Looks up the record under a map coordinate and describes it.
pub fn tooltip_content(records: &[WeatherRecord], longitude: f64, latitude: f64, tolerance: f64) -> Option<String> {
    nearest_within(records, longitude, latitude, tolerance).and_then(describe)
}
