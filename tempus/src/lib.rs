//! Tempus - calendar-aware periods
//!
//! A `Period` is the difference between two moments, decomposed into
//! years, months, weeks, days and clock units while remembering which
//! endpoint came first:
//! - `Period`: construction, unit queries, weekday counts, containment
//! - `PeriodRange`: lazy stepping from start to end
//! - `CalendarDelta`: the raw signed decomposition
//! - humanized text through `tempus_locale`
//!
//! ```
//! use tempus::prelude::*;
//!
//! let start = Date::from_ymd(2023, 1, 1)?;
//! let end = Date::from_ymd(2024, 3, 15)?;
//! let period = Period::<Date>::new(start, end)?;
//! assert_eq!(period.in_months(), 14);
//! # Ok::<(), tempus::PeriodError>(())
//! ```

mod arithmetic;
mod delta;
mod error;
mod intersect;
mod period;
mod range;
mod state;
mod words;

pub use delta::CalendarDelta;
pub use error::PeriodError;
pub use period::Period;
pub use range::PeriodRange;
pub use state::PeriodState;

pub use tempus_core::{Date, DateTime, Duration, Moment, Unit, Weekday};
pub use tempus_locale::{Locale, LocaleRegistry, WordsOptions};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{CalendarDelta, Period, PeriodError, PeriodRange, PeriodState};
    pub use tempus_core::prelude::*;
    pub use tempus_locale::{Locale, LocaleRegistry, WordsOptions};
}
