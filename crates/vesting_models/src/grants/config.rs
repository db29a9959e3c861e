//! Vesting configuration and the taxonomy resolver.

use super::error::GrantError;
use super::grant::Grant;
use super::taxonomy::{BonusType, GrantType, ShareClass};

/// Resolved vesting parameters for a grant.
///
/// Derived from the grant's taxonomy by [`ConfigResolver::resolve`];
/// never persisted. All durations are whole calendar months.
///
/// Invariants (checked by [`VestingConfiguration::validate`]):
/// - `cliff_months <= total_months`
/// - `(total_months - cliff_months)` divides evenly by `period_months`
///   whenever `period_months > 0`
/// - `period_months == 0` requires `total_months == cliff_months`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VestingConfiguration {
    /// Years after the grant date before the vesting clock begins.
    pub start_offset_years: u32,
    /// Months from vesting start to the cliff event.
    pub cliff_months: u32,
    /// Total vesting span in months. Zero means immediate vesting.
    pub total_months: u32,
    /// Cadence of post-cliff events in months. Zero means the cliff is
    /// the only event.
    pub period_months: u32,
    /// Whether the cliff date snaps to the payroll calendar. Periodic
    /// post-cliff events are never independently re-aligned.
    pub align_cliff: bool,
}

impl VestingConfiguration {
    /// A configuration that vests the full quantity on the grant date.
    pub const IMMEDIATE: Self = Self {
        start_offset_years: 0,
        cliff_months: 0,
        total_months: 0,
        period_months: 0,
        align_cliff: false,
    };

    /// Returns whether the full quantity vests on the grant date.
    #[inline]
    pub fn is_immediate(&self) -> bool {
        self.total_months == 0
    }

    /// Number of periodic events after the cliff.
    #[inline]
    pub fn periodic_event_count(&self) -> u32 {
        if self.period_months == 0 {
            0
        } else {
            (self.total_months - self.cliff_months) / self.period_months
        }
    }

    /// Checks the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GrantError::InvalidParameters`] naming the violated
    /// invariant.
    pub fn validate(&self) -> Result<(), GrantError> {
        if self.cliff_months > self.total_months {
            return Err(GrantError::InvalidParameters {
                reason: format!(
                    "cliff of {} months exceeds total span of {} months",
                    self.cliff_months, self.total_months
                ),
            });
        }
        let tail = self.total_months - self.cliff_months;
        if self.period_months == 0 {
            if tail > 0 {
                return Err(GrantError::InvalidParameters {
                    reason: format!(
                        "{} months remain after the cliff but no periodic cadence is set",
                        tail
                    ),
                });
            }
        } else if tail % self.period_months != 0 {
            return Err(GrantError::InvalidParameters {
                reason: format!(
                    "post-cliff span of {} months is not divisible by the {}-month cadence",
                    tail, self.period_months
                ),
            });
        }
        Ok(())
    }
}

/// Cadence of post-cliff restricted-stock vests.
///
/// Plans differ: most vest monthly after the cliff, some quarterly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RsuCadence {
    /// One vest per month after the cliff.
    #[default]
    Monthly,
    /// One vest per quarter after the cliff.
    Quarterly,
}

impl RsuCadence {
    fn months(self) -> u32 {
        match self {
            RsuCadence::Monthly => 1,
            RsuCadence::Quarterly => 3,
        }
    }
}

/// Maps a grant's taxonomy to its vesting configuration.
///
/// A total function over the closed set of valid taxonomy / share-class /
/// bonus sub-type combinations; anything outside the table is an input
/// error, never a silent default.
///
/// Resolution table:
///
/// | combination                              | offset | cliff | total | period | align |
/// |------------------------------------------|--------|-------|-------|--------|-------|
/// | share class `iso_5y`                     | 1y     | 6m    | 48m   | 1m     | no    |
/// | share class `iso_6y`                     | 2y     | 6m    | 48m   | 1m     | no    |
/// | annual performance, long_term            | 1y     | 6m    | 60m   | 6m     | yes   |
/// | annual performance, short_term           | 0      | 12m   | 12m   | —      | yes   |
/// | new hire / promotion / special, rsu/cash | 0      | 12×cliff_years | 12×vest_years | cadence | yes |
/// | espp / nqespp                            | —      | —     | 0     | —      | n/a   |
///
/// Cash-settled grants resolve exactly as RSUs of the same taxonomy.
///
/// # Examples
///
/// ```
/// use vesting_core::types::time::Date;
/// use vesting_models::grants::{ConfigResolver, Grant, GrantType, ShareClass};
///
/// let grant = Grant::new(
///     3,
///     Date::from_ymd(2024, 6, 30).unwrap(),
///     GrantType::Espp,
///     ShareClass::Rsu,
///     250.0,
/// );
/// let config = ConfigResolver::default().resolve(&grant).unwrap();
/// assert!(config.is_immediate());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigResolver {
    rsu_cadence: RsuCadence,
}

impl ConfigResolver {
    /// Creates a resolver with the standard monthly RSU cadence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the post-cliff cadence for restricted-stock schedules.
    pub fn with_rsu_cadence(mut self, cadence: RsuCadence) -> Self {
        self.rsu_cadence = cadence;
        self
    }

    /// Resolves a grant to its vesting configuration.
    ///
    /// # Errors
    ///
    /// - [`GrantError::MissingBonusType`] for an annual performance grant
    ///   without a sub-type
    /// - [`GrantError::InvalidParameters`] when the grant's span fields
    ///   violate the structural invariants
    pub fn resolve(&self, grant: &Grant) -> Result<VestingConfiguration, GrantError> {
        // Purchase plans vest on the purchase date regardless of class.
        if grant.grant_type().is_purchase_plan() {
            return Ok(VestingConfiguration::IMMEDIATE);
        }

        // Option classes carry their own fixed 48-month schedule; the
        // exercise class sets only the start offset.
        let config = match grant.share_class() {
            ShareClass::Iso5Year => VestingConfiguration {
                start_offset_years: 1,
                cliff_months: 6,
                total_months: 48,
                period_months: 1,
                align_cliff: false,
            },
            ShareClass::Iso6Year => VestingConfiguration {
                start_offset_years: 2,
                cliff_months: 6,
                total_months: 48,
                period_months: 1,
                align_cliff: false,
            },
            // Cash settles on the paired RSU schedule.
            ShareClass::Rsu | ShareClass::Cash => match grant.grant_type() {
                GrantType::AnnualPerformance => match grant.bonus_type() {
                    Some(BonusType::LongTerm) => VestingConfiguration {
                        start_offset_years: 1,
                        cliff_months: 6,
                        total_months: 60,
                        period_months: 6,
                        align_cliff: true,
                    },
                    // Short-term bonuses pay out whole at the nearest
                    // disbursement date to the first anniversary.
                    Some(BonusType::ShortTerm) => VestingConfiguration {
                        start_offset_years: 0,
                        cliff_months: 12,
                        total_months: 12,
                        period_months: 0,
                        align_cliff: true,
                    },
                    None => return Err(GrantError::MissingBonusType),
                },
                GrantType::NewHire | GrantType::Promotion | GrantType::SpecialAward => {
                    // Span fields come straight off grant records, so
                    // reject anything outside whole-month range instead
                    // of letting the arithmetic wrap.
                    let total_months = grant.vest_years().checked_mul(12).ok_or_else(|| {
                        GrantError::InvalidParameters {
                            reason: format!(
                                "vesting span of {} years is out of range",
                                grant.vest_years()
                            ),
                        }
                    })?;
                    let cliff_years = grant.cliff_years();
                    if !cliff_years.is_finite() || cliff_years < 0.0 {
                        return Err(GrantError::InvalidParameters {
                            reason: format!("cliff span of {} years is not usable", cliff_years),
                        });
                    }
                    VestingConfiguration {
                        start_offset_years: 0,
                        cliff_months: (12.0 * cliff_years).round() as u32,
                        total_months,
                        period_months: self.rsu_cadence.months(),
                        align_cliff: true,
                    }
                }
                // Handled above; the match on share class comes first.
                GrantType::Espp | GrantType::NqEspp => VestingConfiguration::IMMEDIATE,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Resolves a grant and writes the denormalized `vest_years` /
    /// `cliff_years` fields back onto the record.
    ///
    /// Call after any taxonomy or share-class change so the record's span
    /// fields agree with the resolved configuration.
    pub fn sync_grant(&self, grant: &mut Grant) -> Result<VestingConfiguration, GrantError> {
        let config = self.resolve(grant)?;
        grant.set_vesting_span(
            config.total_months.div_ceil(12),
            f64::from(config.cliff_months) / 12.0,
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesting_core::types::time::Date;

    fn grant(grant_type: GrantType, share_class: ShareClass) -> Grant {
        Grant::new(
            1,
            Date::from_ymd(2020, 1, 15).unwrap(),
            grant_type,
            share_class,
            1000.0,
        )
    }

    #[test]
    fn test_iso_5y() {
        let config = ConfigResolver::new()
            .resolve(&grant(GrantType::NewHire, ShareClass::Iso5Year))
            .unwrap();
        assert_eq!(config.start_offset_years, 1);
        assert_eq!(config.cliff_months, 6);
        assert_eq!(config.total_months, 48);
        assert_eq!(config.period_months, 1);
        assert!(!config.align_cliff);
        assert_eq!(config.periodic_event_count(), 42);
    }

    #[test]
    fn test_iso_6y() {
        let config = ConfigResolver::new()
            .resolve(&grant(GrantType::Promotion, ShareClass::Iso6Year))
            .unwrap();
        assert_eq!(config.start_offset_years, 2);
        assert_eq!(config.total_months, 48);
    }

    #[test]
    fn test_long_term_bonus() {
        let g = grant(GrantType::AnnualPerformance, ShareClass::Rsu)
            .with_bonus_type(BonusType::LongTerm);
        let config = ConfigResolver::new().resolve(&g).unwrap();
        assert_eq!(config.start_offset_years, 1);
        assert_eq!(config.cliff_months, 6);
        assert_eq!(config.total_months, 60);
        assert_eq!(config.period_months, 6);
        assert!(config.align_cliff);
        assert_eq!(config.periodic_event_count(), 9);
    }

    #[test]
    fn test_short_term_bonus_is_single_aligned_event() {
        let g = grant(GrantType::AnnualPerformance, ShareClass::Rsu)
            .with_bonus_type(BonusType::ShortTerm);
        let config = ConfigResolver::new().resolve(&g).unwrap();
        assert_eq!(config.start_offset_years, 0);
        assert_eq!(config.cliff_months, config.total_months);
        assert_eq!(config.period_months, 0);
        assert!(config.align_cliff);
        assert_eq!(config.periodic_event_count(), 0);
    }

    #[test]
    fn test_bonus_without_subtype_is_rejected() {
        let g = grant(GrantType::AnnualPerformance, ShareClass::Rsu);
        assert_eq!(
            ConfigResolver::new().resolve(&g),
            Err(GrantError::MissingBonusType)
        );
    }

    #[test]
    fn test_rsu_uses_span_fields() {
        let g = grant(GrantType::NewHire, ShareClass::Rsu).with_vesting_span(5, 0.5);
        let config = ConfigResolver::new().resolve(&g).unwrap();
        assert_eq!(config.cliff_months, 6);
        assert_eq!(config.total_months, 60);
        assert_eq!(config.period_months, 1);
        assert!(config.align_cliff);
    }

    #[test]
    fn test_rsu_quarterly_cadence() {
        let g = grant(GrantType::Promotion, ShareClass::Rsu).with_vesting_span(4, 1.0);
        let config = ConfigResolver::new()
            .with_rsu_cadence(RsuCadence::Quarterly)
            .resolve(&g)
            .unwrap();
        assert_eq!(config.period_months, 3);
        assert_eq!(config.periodic_event_count(), 12);
    }

    #[test]
    fn test_cash_resolves_like_rsu() {
        let rsu = ConfigResolver::new()
            .resolve(&grant(GrantType::NewHire, ShareClass::Rsu))
            .unwrap();
        let cash = ConfigResolver::new()
            .resolve(&grant(GrantType::NewHire, ShareClass::Cash))
            .unwrap();
        assert_eq!(rsu, cash);
    }

    #[test]
    fn test_purchase_plan_is_immediate_for_any_class() {
        for class in [ShareClass::Rsu, ShareClass::Iso5Year, ShareClass::Cash] {
            let config = ConfigResolver::new()
                .resolve(&grant(GrantType::Espp, class))
                .unwrap();
            assert!(config.is_immediate());
        }
        let config = ConfigResolver::new()
            .resolve(&grant(GrantType::NqEspp, ShareClass::Rsu))
            .unwrap();
        assert!(config.is_immediate());
    }

    #[test]
    fn test_cliff_longer_than_span_is_rejected() {
        let g = grant(GrantType::NewHire, ShareClass::Rsu).with_vesting_span(1, 2.0);
        assert!(matches!(
            ConfigResolver::new().resolve(&g),
            Err(GrantError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_indivisible_cadence_is_rejected() {
        // 4-year span with an 8-month cliff leaves 40 months, which the
        // quarterly cadence does not divide.
        let g = grant(GrantType::NewHire, ShareClass::Rsu).with_vesting_span(4, 8.0 / 12.0);
        assert!(matches!(
            ConfigResolver::new()
                .with_rsu_cadence(RsuCadence::Quarterly)
                .resolve(&g),
            Err(GrantError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_oversized_vest_years_rejected() {
        let g = grant(GrantType::NewHire, ShareClass::Rsu).with_vesting_span(u32::MAX, 1.0);
        assert!(matches!(
            ConfigResolver::new().resolve(&g),
            Err(GrantError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_unusable_cliff_years_rejected() {
        for cliff in [f64::NAN, f64::INFINITY, -1.0] {
            let g = grant(GrantType::NewHire, ShareClass::Rsu).with_vesting_span(4, cliff);
            assert!(matches!(
                ConfigResolver::new().resolve(&g),
                Err(GrantError::InvalidParameters { .. })
            ));
        }
    }

    #[test]
    fn test_sync_grant_restores_span_fields() {
        let mut g = grant(GrantType::NewHire, ShareClass::Iso5Year).with_vesting_span(9, 3.0);
        let config = ConfigResolver::new().sync_grant(&mut g).unwrap();
        assert_eq!(config.total_months, 48);
        assert_eq!(g.vest_years(), 4);
        assert!((g.cliff_years() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_direct() {
        let bad = VestingConfiguration {
            start_offset_years: 0,
            cliff_months: 6,
            total_months: 12,
            period_months: 0,
            align_cliff: false,
        };
        assert!(bad.validate().is_err());
        assert!(VestingConfiguration::IMMEDIATE.validate().is_ok());
    }
}
