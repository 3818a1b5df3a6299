//! Labels and option lists for the month/day pickers of the date selector.

use crate::dates::date_codec::days_in_month;
use crate::dates::month_day::MonthDay;
use chrono::Local;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Placeholder shown while no valid month is selected.
pub const MONTH_PLACEHOLDER: &str = "Month";

/// Returns the full English name for a two-digit month value (`"01"`..`"12"`).
///
/// Anything else, including `None`, an empty string, `"00"` or `"13"`, yields
/// [`MONTH_PLACEHOLDER`].
pub fn month_label(month: Option<&str>) -> &'static str {
    let Some(value) = month else {
        return MONTH_PLACEHOLDER;
    };
    if value.len() != 2 {
        return MONTH_PLACEHOLDER;
    }
    value
        .parse::<usize>()
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|index| MONTH_NAMES.get(index).copied())
        .unwrap_or(MONTH_PLACEHOLDER)
}

/// Lists the zero-padded day values (`"01"`, `"02"`, ...) of a month.
///
/// The month may be given with or without its leading zero. February always has
/// 28 days. An unparseable or out-of-range month yields an empty list.
pub fn day_options(month: &str) -> Vec<String> {
    let length = month
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(days_in_month)
        .unwrap_or(0);
    (1..=length).map(|day| format!("{:02}", day)).collect()
}

/// Today's local date as an `MMDD` key, used as the selector's initial value.
pub fn today_as_month_day() -> String {
    MonthDay::from(Local::now().date_naive()).to_string()
}
