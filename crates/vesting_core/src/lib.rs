//! # vesting_core: Foundation Types for the Vestry Vesting Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! vesting_core serves as the bottom layer of the workspace, providing:
//! - Civil date type with calendar month/year arithmetic (`types::time`)
//! - Error types: `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other vesting_* crates, with minimal
//! external dependencies:
//! - chrono: Date arithmetic
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use vesting_core::types::time::Date;
//!
//! let grant_date = Date::from_ymd(2020, 1, 15).unwrap();
//! let vesting_start = grant_date.add_years(1).unwrap();
//! let cliff = vesting_start.add_months(6).unwrap();
//!
//! assert_eq!(cliff, Date::from_ymd(2021, 7, 15).unwrap());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: ISO 8601 serialisation for `Date`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

pub use types::error::DateError;
pub use types::time::Date;
