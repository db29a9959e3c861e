//! Core type definitions.
//!
//! This module provides:
//! - `time`: Civil date type and calendar arithmetic
//! - `error`: Structured error types

pub mod error;
pub mod time;

pub use error::DateError;
pub use time::Date;
