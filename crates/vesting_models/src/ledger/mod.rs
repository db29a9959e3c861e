//! In-memory grant ledger and batch regeneration.
//!
//! Every repair and migration flow follows the same pattern: recompute a
//! grant's schedule from its current fields, then replace that grant's
//! entire event set in one step. [`GrantLedger::apply_schedule`] is that
//! single transactional operation; there is no partial patching of
//! events. The batch driver regenerates many grants with
//! report-and-continue semantics: one bad grant is logged and counted,
//! never allowed to abort the run or touch other grants.

use crate::grants::{ConfigResolver, Grant, GrantError, GrantId};
use crate::pricing::PriceSeries;
use crate::schedules::{generate, PayrollCalendar, ScheduleError, VestEvent};
use rayon::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{info, warn};

/// Errors from ledger operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    /// The grant id is not in the ledger.
    #[error("Unknown grant id {0}")]
    UnknownGrant(GrantId),

    /// The grant's configuration could not be resolved.
    #[error(transparent)]
    Grant(#[from] GrantError),

    /// Schedule generation failed.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Outcome of a batch regeneration run.
///
/// Aggregates per-grant successes and failures; the run itself never
/// fails part-way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Grants whose schedules were regenerated and applied.
    pub succeeded: usize,
    /// Grants skipped because resolution or generation failed.
    pub failed: usize,
    /// The failures, by grant id.
    pub failures: Vec<(GrantId, LedgerError)>,
}

impl BatchReport {
    /// Total grants processed.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Returns whether every grant regenerated cleanly.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// In-memory store of grants and their vest events.
///
/// The generation algorithm itself is pure; this is the one place state
/// changes, and it changes one whole grant at a time.
///
/// # Examples
///
/// ```
/// use vesting_core::types::time::Date;
/// use vesting_models::grants::{ConfigResolver, Grant, GrantType, ShareClass};
/// use vesting_models::ledger::GrantLedger;
///
/// let mut ledger = GrantLedger::new();
/// ledger.insert_grant(Grant::new(
///     1,
///     Date::from_ymd(2020, 1, 15).unwrap(),
///     GrantType::NewHire,
///     ShareClass::Iso5Year,
///     4800.0,
/// ));
///
/// let count = ledger
///     .regenerate(1, &ConfigResolver::default(), None, None)
///     .unwrap();
/// assert_eq!(count, 43);
/// assert_eq!(ledger.events(1).len(), 43);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GrantLedger {
    grants: BTreeMap<GrantId, Grant>,
    events: BTreeMap<GrantId, Vec<VestEvent>>,
}

impl GrantLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a grant record. Existing events for a
    /// replaced grant are kept until the next regeneration.
    pub fn insert_grant(&mut self, grant: Grant) {
        self.grants.insert(grant.id(), grant);
    }

    /// Returns a grant by id.
    pub fn grant(&self, id: GrantId) -> Option<&Grant> {
        self.grants.get(&id)
    }

    /// Iterates all grants in id order.
    pub fn grants(&self) -> impl Iterator<Item = &Grant> {
        self.grants.values()
    }

    /// Number of grants in the ledger.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Returns whether the ledger holds no grants.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Returns the stored events for a grant (empty if none generated).
    pub fn events(&self, id: GrantId) -> &[VestEvent] {
        self.events.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces a grant's entire event set in one step.
    ///
    /// All-or-nothing: either every prior event is replaced by every new
    /// event, or (on an unknown grant) nothing changes. A reader never
    /// observes a partially updated grant.
    pub fn apply_schedule(
        &mut self,
        id: GrantId,
        schedule: Vec<VestEvent>,
    ) -> Result<(), LedgerError> {
        if !self.grants.contains_key(&id) {
            return Err(LedgerError::UnknownGrant(id));
        }
        self.events.insert(id, schedule);
        Ok(())
    }

    /// Regenerates one grant's schedule from its current fields and
    /// applies it.
    ///
    /// Resolve, generate, annotate prices, apply. On any error the
    /// grant's stored events are left exactly as they were.
    ///
    /// Returns the number of events in the new schedule.
    pub fn regenerate(
        &mut self,
        id: GrantId,
        resolver: &ConfigResolver,
        calendar: Option<&PayrollCalendar>,
        prices: Option<&PriceSeries>,
    ) -> Result<usize, LedgerError> {
        let grant = self.grants.get(&id).ok_or(LedgerError::UnknownGrant(id))?;
        let schedule = compute_schedule(grant, resolver, calendar, prices)?;
        let count = schedule.len();
        self.events.insert(id, schedule);
        Ok(count)
    }

    /// Regenerates every grant in the ledger, continuing past failures.
    ///
    /// Grants own disjoint state, so schedules are computed in parallel;
    /// results are applied in id order. Each failure is logged and
    /// collected into the report, and the corresponding grant's stored
    /// events stay untouched.
    pub fn regenerate_all(
        &mut self,
        resolver: &ConfigResolver,
        calendar: Option<&PayrollCalendar>,
        prices: Option<&PriceSeries>,
    ) -> BatchReport {
        let results: Vec<(GrantId, Result<Vec<VestEvent>, LedgerError>)> = self
            .grants
            .values()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|grant| {
                (
                    grant.id(),
                    compute_schedule(grant, resolver, calendar, prices),
                )
            })
            .collect();

        let mut report = BatchReport::default();
        for (id, result) in results {
            match result {
                Ok(schedule) => {
                    self.events.insert(id, schedule);
                    report.succeeded += 1;
                }
                Err(err) => {
                    warn!(grant_id = id, error = %err, "schedule regeneration failed");
                    report.failed += 1;
                    report.failures.push((id, err));
                }
            }
        }
        info!(
            succeeded = report.succeeded,
            failed = report.failed,
            "batch regeneration complete"
        );
        report
    }
}

/// Pure per-grant pipeline: resolve, generate, annotate.
fn compute_schedule(
    grant: &Grant,
    resolver: &ConfigResolver,
    calendar: Option<&PayrollCalendar>,
    prices: Option<&PriceSeries>,
) -> Result<Vec<VestEvent>, LedgerError> {
    let config = resolver.resolve(grant)?;
    let mut schedule = generate(grant, &config, calendar)?;
    if let Some(series) = prices {
        series.annotate(&mut schedule);
    }
    Ok(schedule)
}
