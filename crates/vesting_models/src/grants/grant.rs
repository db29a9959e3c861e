//! The grant record.

use super::taxonomy::{BonusType, GrantType, ShareClass};
use vesting_core::types::time::Date;

/// Identifier for a grant record.
pub type GrantId = u64;

/// A single equity-compensation grant.
///
/// `vest_years` and `cliff_years` are denormalized copies of the resolved
/// configuration, kept on the record because restricted-stock schedules
/// are parameterised by them (a 4-year grant with a 1-year cliff, a
/// 5-year grant with a 6-month cliff, and so on). After changing a
/// grant's taxonomy or share class, call
/// [`super::ConfigResolver::sync_grant`] to restore the invariant.
///
/// # Examples
///
/// ```
/// use vesting_core::types::time::Date;
/// use vesting_models::grants::{BonusType, Grant, GrantType, ShareClass};
///
/// let grant = Grant::new(
///     12,
///     Date::from_ymd(2022, 3, 1).unwrap(),
///     GrantType::AnnualPerformance,
///     ShareClass::Rsu,
///     6000.0,
/// )
/// .with_bonus_type(BonusType::LongTerm);
///
/// assert_eq!(grant.bonus_type(), Some(BonusType::LongTerm));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grant {
    /// Grant identifier.
    id: GrantId,
    /// Date the grant was issued.
    grant_date: Date,
    /// Grant taxonomy.
    grant_type: GrantType,
    /// Share class.
    share_class: ShareClass,
    /// Bonus sub-type; only meaningful for annual performance grants.
    #[cfg_attr(feature = "serde", serde(default))]
    bonus_type: Option<BonusType>,
    /// Total share quantity. Conceptually whole shares; stored as f64
    /// because purchase-plan allotments arrive with fractional records.
    share_quantity: f64,
    /// Nominal vesting span in years (restricted-stock schedules only).
    vest_years: u32,
    /// Nominal cliff span in years (restricted-stock schedules only).
    cliff_years: f64,
    /// Share price on the grant date, when recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    share_price_at_grant: Option<f64>,
    /// Free-form notes.
    #[cfg_attr(feature = "serde", serde(default))]
    notes: Option<String>,
}

impl Grant {
    /// Creates a grant with the standard 4-year span and 1-year cliff.
    ///
    /// The span fields only drive restricted-stock schedules; option and
    /// bonus schedules are fixed by the resolution table.
    pub fn new(
        id: GrantId,
        grant_date: Date,
        grant_type: GrantType,
        share_class: ShareClass,
        share_quantity: f64,
    ) -> Self {
        Self {
            id,
            grant_date,
            grant_type,
            share_class,
            bonus_type: None,
            share_quantity,
            vest_years: 4,
            cliff_years: 1.0,
            share_price_at_grant: None,
            notes: None,
        }
    }

    /// Sets the bonus sub-type.
    pub fn with_bonus_type(mut self, bonus_type: BonusType) -> Self {
        self.bonus_type = Some(bonus_type);
        self
    }

    /// Sets the nominal vesting span and cliff span in years.
    pub fn with_vesting_span(mut self, vest_years: u32, cliff_years: f64) -> Self {
        self.vest_years = vest_years;
        self.cliff_years = cliff_years;
        self
    }

    /// Sets the recorded share price on the grant date.
    pub fn with_price_at_grant(mut self, price: f64) -> Self {
        self.share_price_at_grant = Some(price);
        self
    }

    /// Sets free-form notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns the grant identifier.
    #[inline]
    pub fn id(&self) -> GrantId {
        self.id
    }

    /// Returns the grant date.
    #[inline]
    pub fn grant_date(&self) -> Date {
        self.grant_date
    }

    /// Returns the grant taxonomy.
    #[inline]
    pub fn grant_type(&self) -> GrantType {
        self.grant_type
    }

    /// Returns the share class.
    #[inline]
    pub fn share_class(&self) -> ShareClass {
        self.share_class
    }

    /// Returns the bonus sub-type, if any.
    #[inline]
    pub fn bonus_type(&self) -> Option<BonusType> {
        self.bonus_type
    }

    /// Returns the total share quantity.
    #[inline]
    pub fn share_quantity(&self) -> f64 {
        self.share_quantity
    }

    /// Returns the nominal vesting span in years.
    #[inline]
    pub fn vest_years(&self) -> u32 {
        self.vest_years
    }

    /// Returns the nominal cliff span in years.
    #[inline]
    pub fn cliff_years(&self) -> f64 {
        self.cliff_years
    }

    /// Returns the share price recorded at grant, if any.
    #[inline]
    pub fn share_price_at_grant(&self) -> Option<f64> {
        self.share_price_at_grant
    }

    /// Returns the notes, if any.
    #[inline]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Total value on the grant date, when a price was recorded.
    pub fn total_value_at_grant(&self) -> Option<f64> {
        self.share_price_at_grant
            .map(|price| price * self.share_quantity)
    }

    /// Restores the denormalized span fields. Used by the resolver.
    pub(crate) fn set_vesting_span(&mut self, vest_years: u32, cliff_years: f64) {
        self.vest_years = vest_years;
        self.cliff_years = cliff_years;
    }

    /// Changes the taxonomy and share class together.
    ///
    /// The span fields are left stale on purpose; callers follow up with
    /// [`super::ConfigResolver::sync_grant`].
    pub fn reclassify(&mut self, grant_type: GrantType, share_class: ShareClass) {
        self.grant_type = grant_type;
        self.share_class = share_class;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grant() -> Grant {
        Grant::new(
            1,
            Date::from_ymd(2020, 1, 15).unwrap(),
            GrantType::NewHire,
            ShareClass::Rsu,
            4800.0,
        )
    }

    #[test]
    fn test_new_defaults() {
        let grant = sample_grant();
        assert_eq!(grant.vest_years(), 4);
        assert!((grant.cliff_years() - 1.0).abs() < f64::EPSILON);
        assert_eq!(grant.bonus_type(), None);
        assert_eq!(grant.share_price_at_grant(), None);
    }

    #[test]
    fn test_builders() {
        let grant = sample_grant()
            .with_vesting_span(5, 0.5)
            .with_price_at_grant(70.0)
            .with_notes("refresh");
        assert_eq!(grant.vest_years(), 5);
        assert!((grant.cliff_years() - 0.5).abs() < f64::EPSILON);
        assert_eq!(grant.notes(), Some("refresh"));
        assert_eq!(grant.total_value_at_grant(), Some(4800.0 * 70.0));
    }

    #[test]
    fn test_total_value_requires_price() {
        assert_eq!(sample_grant().total_value_at_grant(), None);
    }

    #[test]
    fn test_reclassify_keeps_span_stale() {
        let mut grant = sample_grant().with_vesting_span(4, 1.0);
        grant.reclassify(GrantType::Promotion, ShareClass::Cash);
        assert_eq!(grant.grant_type(), GrantType::Promotion);
        assert_eq!(grant.share_class(), ShareClass::Cash);
        // Spans untouched until the resolver syncs them.
        assert_eq!(grant.vest_years(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let grant = sample_grant().with_bonus_type(BonusType::ShortTerm);
        let json = serde_json::to_string(&grant).unwrap();
        let back: Grant = serde_json::from_str(&json).unwrap();
        assert_eq!(grant, back);
    }
}
