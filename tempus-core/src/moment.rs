//! The point-in-time capability set
//!
//! Anything that can be ordered, subtracted into a [`Duration`], shifted
//! by calendar units and classified by weekday can be the endpoint of a
//! period. [`Date`](crate::Date) and [`DateTime`](crate::DateTime) are the
//! two implementations shipped here.

use std::fmt;

use crate::{CalendarError, Duration, Unit, Weekday};

pub trait Moment: Clone + Ord + fmt::Debug {
    /// Human-readable kind, used in error messages
    const KIND: &'static str;

    /// Whether values of this type can be shifted by `unit`
    fn supports(unit: Unit) -> bool;

    fn year(&self) -> i32;

    /// Month (1-12)
    fn month(&self) -> u32;

    fn weekday(&self) -> Weekday;

    /// Signed elapsed time from `earlier` to `self`
    fn duration_since(&self, earlier: &Self) -> Duration;

    /// Shift by `amount` units; month and year shifts clamp the day to the
    /// target month's length.
    fn checked_add_units(&self, unit: Unit, amount: i64) -> Result<Self, CalendarError>;

    fn checked_sub_units(&self, unit: Unit, amount: i64) -> Result<Self, CalendarError> {
        let amount = amount.checked_neg().ok_or(CalendarError::Overflow)?;
        self.checked_add_units(unit, amount)
    }

    /// Midnight of the same civil day
    fn start_of_day(&self) -> Self;

    fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Inclusive containment; the bounds may be given in either order
    fn between(&self, a: &Self, b: &Self) -> bool {
        let (lo, hi) = if a > b { (b, a) } else { (a, b) };
        self >= lo && self <= hi
    }
}
