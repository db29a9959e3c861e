//! # Vesting Models (L2: Business Logic)
//!
//! Grant taxonomy, vesting configuration and schedule generation.
//!
//! This crate provides:
//! - Grant definitions: taxonomy, share class, bonus sub-type (`grants`)
//! - The configuration resolver mapping a grant to its vesting parameters
//! - Payroll-calendar alignment and vest-event schedule generation
//!   (`schedules`)
//! - Valuation price series with nearest-earlier lookup (`pricing`)
//! - An in-memory grant ledger with atomic schedule replacement and a
//!   report-and-continue batch driver (`ledger`)
//!
//! ## Design Principles
//!
//! - **Enum-based taxonomy** so adding a grant category is a
//!   compile-time-checked addition, never a silent fallthrough
//! - **Pure generation**: `generate` performs no I/O and reads no ambient
//!   state; the payroll calendar is passed in explicitly
//! - **Whole-share reconciliation**: the final event of every schedule
//!   absorbs rounding drift so share counts sum exactly
//!
//! ## Example
//!
//! ```
//! use vesting_core::types::time::Date;
//! use vesting_models::grants::{ConfigResolver, Grant, GrantType, ShareClass};
//! use vesting_models::schedules::generate;
//!
//! let grant = Grant::new(
//!     1,
//!     Date::from_ymd(2020, 1, 15).unwrap(),
//!     GrantType::NewHire,
//!     ShareClass::Iso5Year,
//!     4800.0,
//! );
//! let config = ConfigResolver::default().resolve(&grant).unwrap();
//! let schedule = generate(&grant, &config, None).unwrap();
//!
//! assert_eq!(schedule.len(), 43); // 6-month cliff + 42 monthly vests
//! assert_eq!(schedule.iter().map(|e| e.shares()).sum::<i64>(), 4800);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod grants;
pub mod ledger;
pub mod pricing;
pub mod schedules;
