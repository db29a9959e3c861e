//! Vest-event schedule generation.
//!
//! This module provides:
//! - [`VestEvent`]: a single vest (date + whole-share count)
//! - [`PayrollCalendar`]: the recurring disbursement dates cliff events
//!   snap to
//! - [`generate`]: the schedule generation algorithm
//! - [`ScheduleError`]: generation failure modes
//!
//! # Examples
//!
//! ```
//! use vesting_core::types::time::Date;
//! use vesting_models::grants::{BonusType, ConfigResolver, Grant, GrantType, ShareClass};
//! use vesting_models::schedules::{generate, PayrollCalendar};
//!
//! let grant = Grant::new(
//!     9,
//!     Date::from_ymd(2022, 3, 1).unwrap(),
//!     GrantType::AnnualPerformance,
//!     ShareClass::Rsu,
//!     6000.0,
//! )
//! .with_bonus_type(BonusType::LongTerm);
//!
//! let config = ConfigResolver::default().resolve(&grant).unwrap();
//! let calendar = PayrollCalendar::semiannual();
//! let schedule = generate(&grant, &config, Some(&calendar)).unwrap();
//!
//! assert_eq!(schedule.len(), 10);
//! assert_eq!(schedule[0].date(), Date::from_ymd(2023, 11, 15).unwrap());
//! ```

mod calendar;
mod error;
mod event;
mod generator;

pub use calendar::{MonthDay, PayrollCalendar};
pub use error::ScheduleError;
pub use event::VestEvent;
pub use generator::generate;
