//! Grant configuration error types.

use thiserror::Error;

/// Errors from resolving a grant's vesting configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrantError {
    /// An annual performance grant was missing its bonus sub-type.
    #[error("Annual performance grant requires a short_term or long_term bonus sub-type")]
    MissingBonusType,

    /// Resolved parameters violate the vesting invariants.
    #[error("Invalid vesting parameters: {reason}")]
    InvalidParameters {
        /// Description of the violated invariant.
        reason: String,
    },
}
