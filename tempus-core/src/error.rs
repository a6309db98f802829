//! Errors
//!
//! Each concern has its own `thiserror` enum. [`TempusError`] is the
//! structured, serializable form handed to callers that cross a process
//! boundary (machine-readable code, message, optional suggestion).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Unit;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_DATE: &str = "INVALID_DATE";
    pub const INVALID_TIME: &str = "INVALID_TIME";
    pub const DATE_OVERFLOW: &str = "DATE_OVERFLOW";
    pub const UNSUPPORTED_UNIT: &str = "UNSUPPORTED_UNIT";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const DURATION_OVERFLOW: &str = "DURATION_OVERFLOW";
    pub const INVALID_STEP: &str = "INVALID_STEP";
    pub const INVALID_FACTOR: &str = "INVALID_FACTOR";
    pub const LOCALE_NOT_FOUND: &str = "LOCALE_NOT_FOUND";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Errors raised by calendar construction and arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid year: {0} (must be -9999..=9999)")]
    InvalidYear(i32),

    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid day: {day} for {month}/{year}")]
    InvalidDay { day: u32, month: u32, year: i32 },

    #[error("Invalid hour: {0} (must be 0-23)")]
    InvalidHour(u32),

    #[error("Invalid minute: {0} (must be 0-59)")]
    InvalidMinute(u32),

    #[error("Invalid second: {0} (must be 0-59)")]
    InvalidSecond(u32),

    #[error("Invalid nanosecond: {0}")]
    InvalidNano(u32),

    #[error("{moment} values cannot be shifted by {unit}")]
    UnsupportedUnit { unit: Unit, moment: &'static str },

    #[error("DateTime overflow")]
    Overflow,
}

/// Errors raised by flat duration arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Duration overflow")]
    Overflow,

    #[error("Factor is not a finite number")]
    NonFiniteFactor,
}

/// Structured error for callers across a process boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempusError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl TempusError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn invalid_date(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_DATE, format!("Invalid date: {}", details.into()))
            .with_suggestion("Check date components (year -9999..=9999, month 1-12, day 1-31)")
    }

    pub fn invalid_time(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_TIME, format!("Invalid time: {}", details.into()))
            .with_suggestion("Check time components (hour 0-23, minute 0-59, second 0-59)")
    }

    pub fn date_overflow() -> Self {
        Self::new(codes::DATE_OVERFLOW, "DateTime overflow")
            .with_suggestion("Date value is out of supported range")
    }

    pub fn unsupported_unit(unit: Unit, moment: &str) -> Self {
        Self::new(
            codes::UNSUPPORTED_UNIT,
            format!("{} values cannot be shifted by {}", moment, unit),
        )
        .with_suggestion("Use a datetime endpoint for sub-day units")
    }

    pub fn div_zero() -> Self {
        Self::new(codes::DIV_ZERO, "Division by zero")
            .with_suggestion("Ensure divisor is not zero")
    }

    pub fn invalid_step(step: i64) -> Self {
        Self::new(codes::INVALID_STEP, format!("Invalid range step: {}", step))
            .with_suggestion("Range steps must be positive")
    }

    pub fn locale_not_found(locale: &str) -> Self {
        Self::new(codes::LOCALE_NOT_FOUND, format!("Locale not found: {}", locale))
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_REQUEST, format!("Invalid request: {}", details.into()))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
    }
}

impl std::fmt::Display for TempusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for TempusError {}

impl From<CalendarError> for TempusError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::InvalidYear(y) => Self::invalid_date(format!("year {} out of range", y)),
            CalendarError::InvalidMonth(m) => Self::invalid_date(format!("month {} out of range 1-12", m)),
            CalendarError::InvalidDay { day, month, year } => {
                Self::invalid_date(format!("day {} invalid for {}/{}", day, month, year))
            }
            CalendarError::InvalidHour(h) => Self::invalid_time(format!("hour {} out of range 0-23", h)),
            CalendarError::InvalidMinute(m) => Self::invalid_time(format!("minute {} out of range 0-59", m)),
            CalendarError::InvalidSecond(s) => Self::invalid_time(format!("second {} out of range 0-59", s)),
            CalendarError::InvalidNano(n) => Self::invalid_time(format!("nanosecond {} out of range", n)),
            CalendarError::UnsupportedUnit { unit, moment } => Self::unsupported_unit(unit, moment),
            CalendarError::Overflow => Self::date_overflow(),
        }
    }
}

impl From<DurationError> for TempusError {
    fn from(err: DurationError) -> Self {
        match err {
            DurationError::DivisionByZero => Self::div_zero(),
            DurationError::Overflow => Self::new(codes::DURATION_OVERFLOW, "Duration overflow"),
            DurationError::NonFiniteFactor => Self::new(codes::INVALID_FACTOR, "Factor is not a finite number")
                .with_suggestion("Multiply by a finite number"),
        }
    }
}
