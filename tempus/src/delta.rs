//! Calendar delta decomposition
//!
//! Splits the distance between two moments into whole months first (by
//! stepping the start across month boundaries, clamping to month ends),
//! then into days and clock units. Every component carries the sign of the
//! overall difference.

use serde::{Deserialize, Serialize};
use tempus_core::calendar::{DAYS_PER_WEEK, MONTHS_PER_YEAR};
use tempus_core::{CalendarError, Duration, Moment, Unit};

/// Signed calendar decomposition of `end - start`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDelta {
    pub years: i64,
    pub months: i64,
    /// Day component, weeks included
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub nanoseconds: i64,
}

impl CalendarDelta {
    pub fn between<M: Moment>(start: &M, end: &M) -> Result<Self, CalendarError> {
        let mut months = (end.year() as i64 - start.year() as i64) * MONTHS_PER_YEAR
            + (end.month() as i64 - start.month() as i64);
        let mut anchor = start.checked_add_units(Unit::Months, months)?;

        // The naive month count can overshoot when the start day is later in
        // its month than the end day; back off until the anchor is on the
        // start side of `end`.
        if end < start {
            while *end > anchor {
                months += 1;
                anchor = start.checked_add_units(Unit::Months, months)?;
            }
        } else {
            while *end < anchor {
                months -= 1;
                anchor = start.checked_add_units(Unit::Months, months)?;
            }
        }

        let mut delta = Self::from_remainder(end.duration_since(&anchor));
        delta.years = months / MONTHS_PER_YEAR;
        delta.months = months % MONTHS_PER_YEAR;
        Ok(delta)
    }

    fn from_remainder(rest: Duration) -> Self {
        Self {
            years: 0,
            months: 0,
            days: rest.days(),
            hours: rest.hours(),
            minutes: rest.minutes(),
            seconds: rest.remaining_seconds(),
            nanoseconds: rest.subsec_nanos(),
        }
    }

    /// Whole weeks in the day component (truncated toward zero)
    pub fn weeks(&self) -> i64 {
        self.days / DAYS_PER_WEEK
    }

    /// `years * 12 + months`
    pub fn total_months(&self) -> i64 {
        self.years * MONTHS_PER_YEAR + self.months
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
