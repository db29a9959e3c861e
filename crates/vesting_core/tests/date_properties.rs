//! Property-based tests for calendar arithmetic.

use proptest::prelude::*;
use vesting_core::types::time::Date;

fn arb_date() -> impl Strategy<Value = Date> {
    (1990i32..2080, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
}

proptest! {
    /// Adding months always moves forward for positive counts.
    #[test]
    fn add_months_is_monotone(date in arb_date(), months in 1u32..240) {
        let later = date.add_months(months).unwrap();
        prop_assert!(later > date);
    }

    /// Splitting a month addition never lands later than doing it in one
    /// step (clamping can only pull dates earlier).
    #[test]
    fn add_months_split_never_later(date in arb_date(), a in 0u32..120, b in 0u32..120) {
        let direct = date.add_months(a + b).unwrap();
        let stepped = date.add_months(a).unwrap().add_months(b).unwrap();
        prop_assert!(stepped <= direct);
    }

    /// Year addition equals adding twelve months per year.
    #[test]
    fn add_years_matches_months(date in arb_date(), years in 0u32..20) {
        prop_assert_eq!(
            date.add_years(years).unwrap(),
            date.add_months(years * 12).unwrap()
        );
    }

    /// ISO 8601 display round-trips through parse.
    #[test]
    fn display_parse_roundtrip(date in arb_date()) {
        prop_assert_eq!(Date::parse(&date.to_string()).unwrap(), date);
    }
}
