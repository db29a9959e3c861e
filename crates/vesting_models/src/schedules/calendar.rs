//! Payroll disbursement calendar and cliff-date alignment.

use super::error::ScheduleError;
use std::fmt;
use std::str::FromStr;
use vesting_core::types::time::Date;

/// A recurring annual calendar date (month and day).
///
/// Recurs every year, so February 29th is rejected: every entry must
/// exist in every year.
///
/// # Examples
///
/// ```
/// use vesting_models::schedules::MonthDay;
///
/// let md: MonthDay = "06-15".parse().unwrap();
/// assert_eq!(md.month(), 6);
/// assert_eq!(md.day(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a recurring month/day pair.
    ///
    /// # Errors
    ///
    /// Rejects months outside 1-12 and days that do not exist in every
    /// year (including February 29th).
    pub fn new(month: u32, day: u32) -> Result<Self, ScheduleError> {
        const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        let valid = (1..=12).contains(&month) && day >= 1 && day <= DAYS_IN_MONTH[month as usize - 1];
        if !valid {
            return Err(ScheduleError::InvalidCalendar {
                reason: format!("{:02}-{:02} does not recur in every year", month, day),
            });
        }
        Ok(Self { month, day })
    }

    /// Returns the month component (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day component.
    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The occurrence of this recurring date in the given year.
    fn in_year(&self, year: i32) -> Date {
        // Construction guarantees validity in every year.
        Date::from_ymd(year, self.month, self.day)
            .unwrap_or_else(|_| unreachable!("MonthDay validated at construction"))
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = ScheduleError;

    /// Parses an `MM-DD` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || ScheduleError::InvalidCalendar {
            reason: format!("expected MM-DD, got {:?}", s),
        };
        let (m, d) = s.split_once('-').ok_or_else(parse_err)?;
        let month: u32 = m.trim().parse().map_err(|_| parse_err())?;
        let day: u32 = d.trim().parse().map_err(|_| parse_err())?;
        MonthDay::new(month, day)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MonthDay> for String {
    fn from(md: MonthDay) -> String {
        md.to_string()
    }
}

/// The fixed set of recurring dates on which aligned grants are permitted
/// to vest.
///
/// Process-wide configuration data, not mutable state: load it once at
/// startup and pass it explicitly into [`super::generate`]. Only cliff
/// events of configurations flagged for alignment consult it; periodic
/// post-cliff events chain by calendar months from the aligned cliff.
///
/// # Examples
///
/// ```
/// use vesting_core::types::time::Date;
/// use vesting_models::schedules::PayrollCalendar;
///
/// let calendar = PayrollCalendar::semiannual();
/// let naive = Date::from_ymd(2023, 9, 1).unwrap();
///
/// // 2023-09-01 is 78 days past 06-15 and 75 days before 11-15.
/// assert_eq!(calendar.align(naive), Date::from_ymd(2023, 11, 15).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollCalendar {
    /// Sorted, deduplicated recurring dates.
    days: Vec<MonthDay>,
}

impl PayrollCalendar {
    /// Creates a calendar from recurring dates.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidCalendar`] when `days` is empty;
    /// alignment against an empty calendar has no answer.
    pub fn new(mut days: Vec<MonthDay>) -> Result<Self, ScheduleError> {
        if days.is_empty() {
            return Err(ScheduleError::InvalidCalendar {
                reason: "calendar must contain at least one date".to_string(),
            });
        }
        days.sort_unstable();
        days.dedup();
        Ok(Self { days })
    }

    /// The observed semiannual disbursement calendar: June 15th and
    /// November 15th.
    pub fn semiannual() -> Self {
        // Both dates are valid in every year.
        Self {
            days: vec![
                MonthDay { month: 6, day: 15 },
                MonthDay { month: 11, day: 15 },
            ],
        }
    }

    /// Returns the recurring dates, sorted.
    #[inline]
    pub fn days(&self) -> &[MonthDay] {
        &self.days
    }

    /// Snaps a naive anniversary date to the nearest calendar occurrence.
    ///
    /// Considers the occurrence at or immediately before `naive` and the
    /// occurrence immediately after it (crossing year boundaries), and
    /// returns whichever is strictly closer in absolute day count.
    /// Exact ties break toward the later date, so ambiguity is resolved
    /// deterministically rather than raised.
    ///
    /// # Examples
    ///
    /// ```
    /// use vesting_core::types::time::Date;
    /// use vesting_models::schedules::PayrollCalendar;
    ///
    /// let calendar = PayrollCalendar::semiannual();
    ///
    /// // A date on the calendar aligns to itself.
    /// let on = Date::from_ymd(2023, 6, 15).unwrap();
    /// assert_eq!(calendar.align(on), on);
    ///
    /// // December dates cross the year boundary forward to June.
    /// let dec = Date::from_ymd(2023, 12, 30).unwrap();
    /// assert_eq!(calendar.align(dec), Date::from_ymd(2024, 6, 15).unwrap());
    /// ```
    pub fn align(&self, naive: Date) -> Date {
        let (before, after) = self.bracket(naive);
        Self::nearest(naive, before, after)
    }

    /// Like [`Self::align`], but never returns a date before `earliest`.
    ///
    /// A backward candidate that precedes `earliest` is discarded, so the
    /// result falls forward to the next occurrence instead. Used to keep
    /// an aligned cliff from landing before its grant date under sparse
    /// calendars.
    ///
    /// # Examples
    ///
    /// ```
    /// use vesting_core::types::time::Date;
    /// use vesting_models::schedules::{MonthDay, PayrollCalendar};
    ///
    /// let calendar = PayrollCalendar::new(vec![MonthDay::new(9, 14).unwrap()]).unwrap();
    /// let naive = Date::from_ymd(2023, 3, 15).unwrap();
    /// let floor = Date::from_ymd(2022, 9, 15).unwrap();
    ///
    /// // The nearer 2022-09-14 occurrence precedes the floor, so the
    /// // alignment falls forward instead.
    /// assert_eq!(calendar.align(naive), Date::from_ymd(2022, 9, 14).unwrap());
    /// assert_eq!(
    ///     calendar.align_from(naive, floor),
    ///     Date::from_ymd(2023, 9, 14).unwrap()
    /// );
    /// ```
    pub fn align_from(&self, naive: Date, earliest: Date) -> Date {
        let (before, after) = self.bracket(naive);
        Self::nearest(naive, before.filter(|b| *b >= earliest), after)
    }

    /// The calendar occurrences at-or-before and strictly after `naive`.
    fn bracket(&self, naive: Date) -> (Option<Date>, Option<Date>) {
        let year = naive.year();
        let mut before: Option<Date> = None;
        let mut after: Option<Date> = None;

        // Occurrences in the surrounding years cover every adjacency,
        // including calendars with a single date.
        for y in [year - 1, year, year + 1] {
            for md in &self.days {
                let occurrence = md.in_year(y);
                if occurrence <= naive {
                    before = Some(before.map_or(occurrence, |b| b.max(occurrence)));
                } else {
                    after = Some(after.map_or(occurrence, |a| a.min(occurrence)));
                }
            }
        }
        (before, after)
    }

    fn nearest(naive: Date, before: Option<Date>, after: Option<Date>) -> Date {
        match (before, after) {
            (Some(b), Some(a)) => {
                if naive - b < a - naive {
                    b
                } else {
                    // Ties break toward the later date.
                    a
                }
            }
            (Some(b), None) => b,
            (None, Some(a)) => a,
            // new() guarantees a non-empty calendar, and three years of
            // occurrences always bracket any date.
            (None, None) => naive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_month_day_validation() {
        assert!(MonthDay::new(6, 15).is_ok());
        assert!(MonthDay::new(2, 28).is_ok());
        assert!(MonthDay::new(2, 29).is_err());
        assert!(MonthDay::new(13, 1).is_err());
        assert!(MonthDay::new(4, 31).is_err());
        assert!(MonthDay::new(1, 0).is_err());
    }

    #[test]
    fn test_month_day_parse_and_display() {
        let md: MonthDay = "11-15".parse().unwrap();
        assert_eq!(md, MonthDay::new(11, 15).unwrap());
        assert_eq!(md.to_string(), "11-15");
        assert!("junk".parse::<MonthDay>().is_err());
        assert!("02-29".parse::<MonthDay>().is_err());
    }

    #[test]
    fn test_empty_calendar_rejected() {
        assert!(matches!(
            PayrollCalendar::new(vec![]),
            Err(ScheduleError::InvalidCalendar { .. })
        ));
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let cal = PayrollCalendar::new(vec![
            MonthDay::new(11, 15).unwrap(),
            MonthDay::new(6, 15).unwrap(),
            MonthDay::new(11, 15).unwrap(),
        ])
        .unwrap();
        assert_eq!(cal, PayrollCalendar::semiannual());
    }

    #[test]
    fn test_align_exact_hit() {
        let cal = PayrollCalendar::semiannual();
        assert_eq!(cal.align(d(2023, 6, 15)), d(2023, 6, 15));
        assert_eq!(cal.align(d(2023, 11, 15)), d(2023, 11, 15));
    }

    #[test]
    fn test_align_picks_closer_side() {
        let cal = PayrollCalendar::semiannual();
        // 2023-09-01: 78 days after 06-15, 75 days before 11-15.
        assert_eq!(cal.align(d(2023, 9, 1)), d(2023, 11, 15));
        // 2023-07-01: 16 days after 06-15.
        assert_eq!(cal.align(d(2023, 7, 1)), d(2023, 6, 15));
    }

    #[test]
    fn test_align_crosses_year_boundary() {
        let cal = PayrollCalendar::semiannual();
        // 2023-12-05 is 20 days after 11-15 and 193 days before 06-15.
        assert_eq!(cal.align(d(2023, 12, 5)), d(2023, 11, 15));
        // Early April is closer to coming June than to last November.
        assert_eq!(cal.align(d(2024, 4, 1)), d(2024, 6, 15));
    }

    #[test]
    fn test_align_tie_breaks_later() {
        // 04-10 and 04-20 straddle 04-15 at five days each.
        let cal = PayrollCalendar::new(vec![
            MonthDay::new(4, 10).unwrap(),
            MonthDay::new(4, 20).unwrap(),
        ])
        .unwrap();
        assert_eq!(cal.align(d(2024, 4, 15)), d(2024, 4, 20));
    }

    #[test]
    fn test_align_single_date_calendar() {
        let cal = PayrollCalendar::new(vec![MonthDay::new(6, 15).unwrap()]).unwrap();
        // Anything in the first half of the gap goes back, the rest forward.
        assert_eq!(cal.align(d(2023, 8, 1)), d(2023, 6, 15));
        assert_eq!(cal.align(d(2024, 2, 1)), d(2024, 6, 15));
    }

    #[test]
    fn test_align_from_discards_candidates_before_floor() {
        let cal = PayrollCalendar::new(vec![MonthDay::new(9, 14).unwrap()]).unwrap();
        let naive = d(2023, 3, 15);
        // Without a floor the closer 2022-09-14 wins.
        assert_eq!(cal.align(naive), d(2022, 9, 14));
        // A floor past it forces the later occurrence.
        assert_eq!(cal.align_from(naive, d(2022, 9, 15)), d(2023, 9, 14));
        // A floor at or before the backward candidate changes nothing.
        assert_eq!(cal.align_from(naive, d(2022, 9, 14)), d(2022, 9, 14));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_month_day_serde_string() {
        let md = MonthDay::new(6, 15).unwrap();
        assert_eq!(serde_json::to_string(&md).unwrap(), "\"06-15\"");
        let back: MonthDay = serde_json::from_str("\"11-15\"").unwrap();
        assert_eq!(back, MonthDay::new(11, 15).unwrap());
    }
}
