//! Valuation price history and date lookup.
//!
//! The schedule generator never computes prices; vest events are
//! annotated after generation from a [`PriceSeries`] maintained by an
//! administrator.

use crate::schedules::VestEvent;
use std::collections::BTreeMap;
use vesting_core::types::time::Date;

/// A recorded valuation on a given date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// Valuation date.
    pub date: Date,
    /// Price per share on that date.
    pub price: f64,
}

/// Sparse share-price history with nearest-earlier lookup.
///
/// Lookup semantics: the price at a date is the most recent recorded
/// price at or before that date; dates preceding all records fall back
/// to the earliest recorded price. Only an empty series has no answer.
///
/// # Examples
///
/// ```
/// use vesting_core::types::time::Date;
/// use vesting_models::pricing::PriceSeries;
///
/// let mut series = PriceSeries::new();
/// series.record(Date::from_ymd(2023, 1, 1).unwrap(), 80.0);
/// series.record(Date::from_ymd(2024, 1, 1).unwrap(), 95.0);
///
/// // Between records: nearest earlier.
/// assert_eq!(series.price_at(Date::from_ymd(2023, 6, 1).unwrap()), Some(80.0));
/// // Before all records: earliest available.
/// assert_eq!(series.price_at(Date::from_ymd(2022, 1, 1).unwrap()), Some(80.0));
/// assert_eq!(series.latest(), Some(95.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    prices: BTreeMap<Date, f64>,
}

impl PriceSeries {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from recorded points. Duplicate dates keep the
    /// last value seen.
    pub fn from_points(points: impl IntoIterator<Item = PricePoint>) -> Self {
        Self {
            prices: points.into_iter().map(|p| (p.date, p.price)).collect(),
        }
    }

    /// Records (or overwrites) the valuation on a date.
    pub fn record(&mut self, date: Date, price: f64) {
        self.prices.insert(date, price);
    }

    /// Returns whether the series has no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Number of recorded valuations.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// The price at or before `date`, falling back to the earliest
    /// record when `date` precedes the whole history.
    pub fn price_at(&self, date: Date) -> Option<f64> {
        self.prices
            .range(..=date)
            .next_back()
            .or_else(|| self.prices.iter().next())
            .map(|(_, price)| *price)
    }

    /// The most recent recorded price.
    pub fn latest(&self) -> Option<f64> {
        self.prices.iter().next_back().map(|(_, price)| *price)
    }

    /// Annotates each event with the price at its vest date.
    ///
    /// A no-op on an empty series; existing annotations are overwritten.
    pub fn annotate(&self, events: &mut [VestEvent]) {
        for event in events {
            if let Some(price) = self.price_at(event.date()) {
                event.set_price_at_vest(price);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn sample_series() -> PriceSeries {
        PriceSeries::from_points([
            PricePoint { date: d(2022, 1, 1), price: 70.0 },
            PricePoint { date: d(2023, 1, 1), price: 80.0 },
            PricePoint { date: d(2024, 1, 1), price: 95.0 },
        ])
    }

    #[test]
    fn test_exact_date() {
        assert_eq!(sample_series().price_at(d(2023, 1, 1)), Some(80.0));
    }

    #[test]
    fn test_between_records_uses_earlier() {
        assert_eq!(sample_series().price_at(d(2023, 12, 31)), Some(80.0));
    }

    #[test]
    fn test_after_all_records_uses_latest() {
        assert_eq!(sample_series().price_at(d(2030, 1, 1)), Some(95.0));
    }

    #[test]
    fn test_before_all_records_falls_back_to_earliest() {
        assert_eq!(sample_series().price_at(d(2020, 1, 1)), Some(70.0));
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.price_at(d(2024, 1, 1)), None);
        assert_eq!(series.latest(), None);
    }

    #[test]
    fn test_record_overwrites() {
        let mut series = sample_series();
        series.record(d(2023, 1, 1), 85.0);
        assert_eq!(series.len(), 3);
        assert_eq!(series.price_at(d(2023, 1, 1)), Some(85.0));
    }

    #[test]
    fn test_annotate_events() {
        use approx::assert_relative_eq;

        let series = sample_series();
        let mut events = vec![
            VestEvent::new(1, d(2021, 6, 1), 100),
            VestEvent::new(1, d(2023, 6, 1), 100),
        ];
        series.annotate(&mut events);
        // Before all records: earliest price.
        assert_eq!(events[0].price_at_vest(), Some(70.0));
        assert_eq!(events[1].price_at_vest(), Some(80.0));
        assert_relative_eq!(events[1].value_at_vest().unwrap(), 8_000.0);
    }

    #[test]
    fn test_annotate_empty_series_leaves_events_untouched() {
        let mut events = vec![VestEvent::new(1, d(2023, 6, 1), 100)];
        PriceSeries::new().annotate(&mut events);
        assert_eq!(events[0].price_at_vest(), None);
    }
}
