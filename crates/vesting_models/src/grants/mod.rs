//! Grant definitions and configuration resolution.
//!
//! This module provides:
//! - [`GrantType`], [`ShareClass`], [`BonusType`]: the closed grant taxonomy
//! - [`Grant`]: a single equity-compensation grant record
//! - [`VestingConfiguration`]: resolved vesting parameters for a grant
//! - [`ConfigResolver`]: the exhaustive taxonomy -> configuration mapping
//!
//! # Examples
//!
//! ```
//! use vesting_core::types::time::Date;
//! use vesting_models::grants::{ConfigResolver, Grant, GrantType, ShareClass};
//!
//! let grant = Grant::new(
//!     7,
//!     Date::from_ymd(2020, 1, 15).unwrap(),
//!     GrantType::NewHire,
//!     ShareClass::Iso5Year,
//!     4800.0,
//! );
//!
//! let config = ConfigResolver::default().resolve(&grant).unwrap();
//! assert_eq!(config.start_offset_years, 1);
//! assert_eq!(config.total_months, 48);
//! ```

mod config;
mod error;
mod grant;
mod taxonomy;

pub use config::{ConfigResolver, RsuCadence, VestingConfiguration};
pub use error::GrantError;
pub use grant::{Grant, GrantId};
pub use taxonomy::{BonusType, GrantType, ShareClass};
