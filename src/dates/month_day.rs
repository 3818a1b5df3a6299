use crate::dates::date_codec::{days_in_month, preceding_days, split_key, DAYS_IN_MONTH, DAYS_IN_YEAR};
use crate::dates::error::DateCodecError;
use chrono::{Datelike, NaiveDate};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A validated calendar day of the modeled 365-day year.
///
/// Unlike [`crate::day_of_year`], parsing a `MonthDay` rejects malformed keys
/// instead of falling back to January 1st. This is the type the record source
/// uses to validate the date it is asked for.
///
/// # Examples
///
/// ```
/// use vaycay::MonthDay;
///
/// let md: MonthDay = "0315".parse().unwrap();
/// assert_eq!(md.month(), 3);
/// assert_eq!(md.day_of_year(), 74);
/// assert_eq!(md.to_string(), "0315");
/// assert!("0230".parse::<MonthDay>().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Result<Self, DateCodecError> {
        let length = days_in_month(month).ok_or(DateCodecError::MonthOutOfRange(month))?;
        if day == 0 || day > length {
            return Err(DateCodecError::DayOutOfRange { month, day });
        }
        Ok(Self { month, day })
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// The 1-based position of this day in the year, in `1..=365`.
    pub fn day_of_year(self) -> u32 {
        preceding_days(self.month) + self.day
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = DateCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day) = split_key(s).ok_or_else(|| DateCodecError::InvalidFormat(s.to_string()))?;
        Self::new(month, day)
    }
}

impl TryFrom<u32> for MonthDay {
    type Error = DateCodecError;

    fn try_from(day_of_year: u32) -> Result<Self, Self::Error> {
        if !(1..=DAYS_IN_YEAR).contains(&day_of_year) {
            return Err(DateCodecError::DayOfYearOutOfRange(day_of_year));
        }
        let mut remaining = day_of_year;
        for (index, &length) in DAYS_IN_MONTH.iter().enumerate() {
            if remaining <= length {
                return Self::new(index as u32 + 1, remaining);
            }
            remaining -= length;
        }
        Err(DateCodecError::DayOfYearOutOfRange(day_of_year))
    }
}

/// Feb 29 has no slot in the modeled year and folds onto Feb 28.
impl From<NaiveDate> for MonthDay {
    fn from(date: NaiveDate) -> Self {
        let month = date.month();
        let length = days_in_month(month).unwrap_or(31);
        Self {
            month,
            day: date.day().min(length),
        }
    }
}
