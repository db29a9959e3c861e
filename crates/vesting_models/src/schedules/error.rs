//! Schedule generation error types.

use crate::grants::GrantError;
use thiserror::Error;
use vesting_core::types::error::DateError;

/// Errors that can occur during schedule generation.
///
/// The generator fails fast: the first detected input error is returned
/// and no partial schedule is ever emitted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    /// Share quantity was negative, NaN, or infinite.
    #[error("Invalid share quantity {quantity}: must be finite and non-negative")]
    InvalidQuantity {
        /// The rejected quantity.
        quantity: f64,
    },

    /// The configuration requires cliff alignment but no payroll
    /// calendar was supplied.
    #[error("Cliff alignment requested but no payroll calendar was supplied")]
    MissingCalendar,

    /// The payroll calendar could not be constructed.
    #[error("Invalid payroll calendar: {reason}")]
    InvalidCalendar {
        /// Description of the problem.
        reason: String,
    },

    /// The grant's resolved configuration is invalid.
    #[error(transparent)]
    Configuration(#[from] GrantError),

    /// Date arithmetic failed.
    #[error(transparent)]
    Date(#[from] DateError),
}
