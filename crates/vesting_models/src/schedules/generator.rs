//! The vesting-schedule generation algorithm.

use super::calendar::PayrollCalendar;
use super::error::ScheduleError;
use super::event::VestEvent;
use crate::grants::{Grant, VestingConfiguration};

/// Generates the ordered vest-event sequence for a grant.
///
/// The computation is pure: no I/O, no shared state, no clock. Calling
/// it twice on unchanged inputs yields an identical sequence, so
/// regeneration is idempotent and safe from any number of threads.
///
/// Algorithm:
/// 1. An immediate configuration (`total_months == 0`) produces exactly
///    one event on the grant date with the full quantity.
/// 2. Otherwise the cliff falls `start_offset_years` years plus
///    `cliff_months` months after the grant date, snapped to the payroll
///    calendar when the configuration says so. Snapping never moves the
///    cliff before the grant date, even under sparse calendars.
/// 3. Periodic events follow every `period_months` calendar months,
///    each chained from the previous *actual* event date, so an aligned
///    cliff shifts the whole tail with it.
/// 4. Every event takes its pro-rata share of the quantity, rounded to
///    whole shares; the final event absorbs the accumulated rounding
///    drift so the counts sum exactly. Downstream accounting relies on
///    this last-absorbs-remainder policy, not a largest-remainder
///    distribution.
///
/// A zero-share grant still produces the full set of zero-share events
/// with correct dates; callers may filter them, the generator does not.
///
/// # Errors
///
/// - [`ScheduleError::InvalidQuantity`] for a negative or non-finite
///   quantity
/// - [`ScheduleError::MissingCalendar`] when alignment is required but
///   no calendar was supplied
/// - [`ScheduleError::Configuration`] when the configuration violates
///   the structural invariants
///
/// No partial schedule is ever returned.
///
/// # Examples
///
/// ```
/// use vesting_core::types::time::Date;
/// use vesting_models::grants::{ConfigResolver, Grant, GrantType, ShareClass};
/// use vesting_models::schedules::generate;
///
/// let grant = Grant::new(
///     1,
///     Date::from_ymd(2020, 1, 15).unwrap(),
///     GrantType::NewHire,
///     ShareClass::Iso5Year,
///     4800.0,
/// );
/// let config = ConfigResolver::default().resolve(&grant).unwrap();
/// let schedule = generate(&grant, &config, None).unwrap();
///
/// // 6/48 of the shares at the cliff, 1/48 monthly thereafter.
/// assert_eq!(schedule[0].date(), Date::from_ymd(2021, 7, 15).unwrap());
/// assert_eq!(schedule[0].shares(), 600);
/// assert_eq!(schedule.len(), 43);
/// ```
pub fn generate(
    grant: &Grant,
    config: &VestingConfiguration,
    calendar: Option<&PayrollCalendar>,
) -> Result<Vec<VestEvent>, ScheduleError> {
    let quantity = grant.share_quantity();
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(ScheduleError::InvalidQuantity { quantity });
    }
    config.validate()?;

    let total_shares = quantity.round() as i64;

    if config.is_immediate() {
        return Ok(vec![VestEvent::new(
            grant.id(),
            grant.grant_date(),
            total_shares,
        )]);
    }

    let vesting_start = grant.grant_date().add_years(config.start_offset_years)?;
    let naive_cliff = vesting_start.add_months(config.cliff_months)?;
    // Alignment never pulls the first vest before the grant date: a
    // backward candidate preceding it is discarded in favour of the next
    // occurrence.
    let cliff_date = if config.align_cliff {
        calendar
            .ok_or(ScheduleError::MissingCalendar)?
            .align_from(naive_cliff, grant.grant_date())
    } else {
        naive_cliff
    };

    let pro_rata = |months: u32| -> i64 {
        (quantity * f64::from(months) / f64::from(config.total_months)).round() as i64
    };

    let periodic = config.periodic_event_count();
    let mut events = Vec::with_capacity(1 + periodic as usize);
    events.push(VestEvent::new(
        grant.id(),
        cliff_date,
        pro_rata(config.cliff_months),
    ));

    let mut previous = cliff_date;
    for _ in 0..periodic {
        previous = previous.add_months(config.period_months)?;
        events.push(VestEvent::new(
            grant.id(),
            previous,
            pro_rata(config.period_months),
        ));
    }

    // Reconciliation: the last event absorbs rounding drift so the
    // counts sum exactly to the grant quantity.
    let emitted: i64 = events
        .iter()
        .take(events.len() - 1)
        .map(|e| e.shares())
        .sum();
    if let Some(last) = events.last_mut() {
        last.set_shares(total_shares - emitted);
    }

    Ok(events)
}
