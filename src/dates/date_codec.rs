//! Conversions between `MMDD` calendar keys and 1-based day-of-year numbers.
//!
//! The calendar is a fixed 365-day year: leap days are not modeled. The
//! functions here fail soft, because they feed a slider that must always have
//! a position. Use [`crate::MonthDay`] when malformed input should be an error.

/// Month lengths of a non-leap year, January first.
pub const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of days in the modeled year.
pub const DAYS_IN_YEAR: u32 = 365;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "Jun.", "Jul.", "Aug.", "Sep.", "Oct.", "Nov.", "Dec.",
];

/// Converts an `MMDD` key into a day-of-year in `1..=365`.
///
/// Returns `1` for absent input, strings that are not exactly four ASCII
/// digits, months outside `01..=12` and days outside `01..=31`. The day is
/// not checked against the month length, so `"0229"` maps to `60`.
///
/// # Examples
///
/// ```
/// use vaycay::day_of_year;
///
/// assert_eq!(day_of_year("0101"), 1);
/// assert_eq!(day_of_year("1231"), 365);
/// assert_eq!(day_of_year(None::<&str>), 1);
/// assert_eq!(day_of_year("123"), 1);
/// ```
pub fn day_of_year<'a>(month_day: impl Into<Option<&'a str>>) -> u32 {
    let Some(key) = month_day.into() else {
        return 1;
    };
    let Some((month, day)) = split_key(key) else {
        return 1;
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return 1;
    }
    preceding_days(month) + day
}

/// Converts a day-of-year into an `MMDD` key by walking the month table.
///
/// Callers are expected to pass a value in `1..=365`. Values outside that range
/// do not panic but produce keys that are not real dates (`0` gives `"0100"`,
/// `366` wraps to `"0101"`).
///
/// # Examples
///
/// ```
/// use vaycay::month_day;
///
/// assert_eq!(month_day(1), "0101");
/// assert_eq!(month_day(32), "0201");
/// assert_eq!(month_day(365), "1231");
/// ```
pub fn month_day(day_of_year: u32) -> String {
    let (month, day) = split_day_of_year(day_of_year);
    format!("{:02}{:02}", month, day)
}

/// Formats a day-of-year as a short label such as `"Apr. 10"` or `"May 1"`.
///
/// Every month abbreviation except May carries a trailing period. The day has
/// no leading zero.
pub fn short_label(day_of_year: u32) -> String {
    let (month, day) = split_day_of_year(day_of_year);
    format!("{} {}", MONTH_ABBREVIATIONS[(month - 1) as usize], day)
}

/// Returns the number of days in `month` (1-based) of the modeled year.
pub fn days_in_month(month: u32) -> Option<u32> {
    let index = month.checked_sub(1)?;
    DAYS_IN_MONTH.get(index as usize).copied()
}

/// Sum of the lengths of all months before `month` (1-based, `1..=12`).
pub(crate) fn preceding_days(month: u32) -> u32 {
    DAYS_IN_MONTH.iter().take(month.saturating_sub(1) as usize).sum()
}

/// Splits a four-digit key into its month and day numbers.
pub(crate) fn split_key(key: &str) -> Option<(u32, u32)> {
    if key.len() != 4 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month = key[0..2].parse().ok()?;
    let day = key[2..4].parse().ok()?;
    Some((month, day))
}

fn split_day_of_year(day_of_year: u32) -> (u32, u32) {
    let mut remaining = day_of_year;
    let mut month = 1;
    for (index, &length) in DAYS_IN_MONTH.iter().enumerate() {
        if remaining <= length {
            month = index as u32 + 1;
            break;
        }
        remaining -= length;
    }
    (month, remaining)
}
