//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing

use std::fmt;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use vesting_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),

    /// Date arithmetic left the representable range.
    Overflow(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
            DateError::Overflow(msg) => write!(f, "Date arithmetic overflow: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = DateError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(format!("{}", err), "Invalid date: 2023-2-29");
    }

    #[test]
    fn test_parse_error_display() {
        let err = DateError::ParseError("bad input".to_string());
        assert_eq!(format!("{}", err), "Date parse error: bad input");
    }

    #[test]
    fn test_overflow_display() {
        let err = DateError::Overflow("beyond year bounds".to_string());
        assert_eq!(
            format!("{}", err),
            "Date arithmetic overflow: beyond year bounds"
        );
    }

    #[test]
    fn test_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(DateError::ParseError("x".to_string()));
        assert!(err.to_string().contains("x"));
    }
}
