//! Civil date type and calendar arithmetic.
//!
//! This module provides:
//! - `Date`: Type-safe civil date wrapper around chrono::NaiveDate
//! - Whole-month and whole-year arithmetic with month-end clamping
//!
//! Vesting schedules are pure calendar constructs: there is no timezone,
//! no clock time, and no DST ambiguity. The only subtlety is month
//! addition when the source day does not exist in the target month
//! (e.g. January 31st plus one month), which clamps to the last valid
//! day of the target month.
//!
//! # Examples
//!
//! ```
//! use vesting_core::types::time::Date;
//!
//! let grant_date = Date::from_ymd(2020, 1, 31).unwrap();
//!
//! // Month-end clamping: Jan 31 + 1 month = Feb 29 (2020 is a leap year)
//! let next = grant_date.add_months(1).unwrap();
//! assert_eq!(next, Date::from_ymd(2020, 2, 29).unwrap());
//! ```

use chrono::{Datelike, Local, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe civil date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and the calendar arithmetic used by
/// schedule generation: adding whole months or years to an anchor date.
///
/// # Examples
///
/// ```
/// use vesting_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2022, 3, 1).unwrap();
/// assert_eq!(date.year(), 2022);
/// assert_eq!(date.month(), 3);
/// assert_eq!(date.day(), 1);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2022-03-01".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let cliff = date.add_months(6).unwrap();
/// assert_eq!(cliff - date, 184);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2024)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use vesting_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 6, 15).unwrap();
    ///
    /// // Invalid date returns error
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use vesting_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds whole calendar months, clamping to the last valid day of the
    /// target month when the source day does not exist there.
    ///
    /// # Examples
    ///
    /// ```
    /// use vesting_core::types::time::Date;
    ///
    /// let d = Date::from_ymd(2023, 1, 31).unwrap();
    /// assert_eq!(d.add_months(1).unwrap(), Date::from_ymd(2023, 2, 28).unwrap());
    /// assert_eq!(d.add_months(2).unwrap(), Date::from_ymd(2023, 3, 31).unwrap());
    ///
    /// let mid = Date::from_ymd(2022, 9, 1).unwrap();
    /// assert_eq!(mid.add_months(6).unwrap(), Date::from_ymd(2023, 3, 1).unwrap());
    /// ```
    pub fn add_months(&self, months: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Date)
            .ok_or_else(|| DateError::Overflow(format!("{} + {} months", self, months)))
    }

    /// Adds whole calendar years.
    ///
    /// February 29th anchors clamp to February 28th in non-leap target
    /// years, consistent with [`Date::add_months`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vesting_core::types::time::Date;
    ///
    /// let grant = Date::from_ymd(2020, 2, 29).unwrap();
    /// assert_eq!(grant.add_years(1).unwrap(), Date::from_ymd(2021, 2, 28).unwrap());
    /// assert_eq!(grant.add_years(4).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
    /// ```
    pub fn add_years(&self, years: u32) -> Result<Self, DateError> {
        self.add_months(years * 12)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use vesting_core::types::time::Date;
    ///
    /// let start = Date::from_ymd(2024, 1, 1).unwrap();
    /// let end = Date::from_ymd(2024, 1, 11).unwrap();
    ///
    /// assert_eq!(end - start, 10);
    /// assert_eq!(start - end, -10);
    /// ```
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
