//! Vest event definition.

use crate::grants::GrantId;
use std::fmt;
use vesting_core::types::time::Date;

/// A single vest: the date on which a whole number of shares becomes
/// owned.
///
/// Share counts are whole by construction; the generator rounds per event
/// and reconciles the final event so the counts sum exactly to the
/// grant's quantity. The valuation price is annotated afterwards by
/// [`crate::pricing::PriceSeries`], never computed here.
///
/// # Examples
///
/// ```
/// use vesting_core::types::time::Date;
/// use vesting_models::schedules::VestEvent;
///
/// let event = VestEvent::new(4, Date::from_ymd(2021, 7, 15).unwrap(), 600);
/// assert_eq!(event.shares(), 600);
/// assert_eq!(event.value_at_vest(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VestEvent {
    /// Owning grant.
    grant_id: GrantId,
    /// Date the shares vest.
    vest_date: Date,
    /// Whole-share count.
    shares: i64,
    /// Valuation price on the vest date, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    price_at_vest: Option<f64>,
}

impl VestEvent {
    /// Creates a vest event without a valuation price.
    #[inline]
    pub fn new(grant_id: GrantId, vest_date: Date, shares: i64) -> Self {
        Self {
            grant_id,
            vest_date,
            shares,
            price_at_vest: None,
        }
    }

    /// Returns the owning grant's identifier.
    #[inline]
    pub fn grant_id(&self) -> GrantId {
        self.grant_id
    }

    /// Returns the vest date.
    #[inline]
    pub fn date(&self) -> Date {
        self.vest_date
    }

    /// Returns the whole-share count.
    #[inline]
    pub fn shares(&self) -> i64 {
        self.shares
    }

    /// Returns the valuation price, when annotated.
    #[inline]
    pub fn price_at_vest(&self) -> Option<f64> {
        self.price_at_vest
    }

    /// Annotates the valuation price on the vest date.
    #[inline]
    pub fn set_price_at_vest(&mut self, price: f64) {
        self.price_at_vest = Some(price);
    }

    /// Value of this vest at its annotated price.
    pub fn value_at_vest(&self) -> Option<f64> {
        self.price_at_vest.map(|p| p * self.shares as f64)
    }

    /// Whether the vest date has passed as of the given date.
    #[inline]
    pub fn has_vested(&self, as_of: Date) -> bool {
        self.vest_date <= as_of
    }

    /// Overwrites the share count. Used by schedule reconciliation.
    pub(crate) fn set_shares(&mut self, shares: i64) {
        self.shares = shares;
    }
}

impl fmt::Display for VestEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VestEvent(grant {}, {}, {} shares)",
            self.grant_id, self.vest_date, self.shares
        )
    }
}
