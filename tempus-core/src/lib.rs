//! Tempus Core - Fundamental calendar types
//!
//! This crate provides the point-in-time and elapsed-time types every
//! period is built from:
//! - `Date` / `DateTime`: proleptic Gregorian values, date-only or with a
//!   nanosecond time of day
//! - `Duration`: flat signed elapsed time
//! - `Moment`: the capability set a period endpoint must provide
//! - `TempusError`: structured errors for callers across a process boundary

pub mod calendar;
mod date;
mod datetime;
mod duration;
mod error;
mod moment;
mod unit;

pub use calendar::Weekday;
pub use date::{Date, DateParts};
pub use datetime::{DateTime, DateTimeParts};
pub use duration::Duration;
pub use error::{codes, CalendarError, DurationError, TempusError};
pub use moment::Moment;
pub use unit::Unit;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{CalendarError, Date, DateTime, Duration, DurationError, Moment, TempusError, Unit, Weekday};
}
