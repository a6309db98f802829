//! Sub-range iteration
//!
//! Element `i` is always `origin ± i * step` units, never the previous
//! element shifted again, so month-end clamping cannot drift.
//!
//! The walk is O(span / unit). Ranging decades by seconds is allowed; the
//! caller pays for it.

use std::iter::FusedIterator;

use tempus_core::{CalendarError, Moment, Unit};

use crate::{Period, PeriodError};

/// Lazy walk over a period in fixed calendar steps
#[derive(Debug, Clone)]
pub struct PeriodRange<M> {
    origin: M,
    end: M,
    unit: Unit,
    step: i64,
    backward: bool,
    index: i64,
    done: bool,
}

impl<M: Moment> PeriodRange<M> {
    fn new(period: &Period<M>, unit: Unit, step: i64) -> Self {
        Self {
            origin: period.start.clone(),
            end: period.end.clone(),
            unit,
            step,
            backward: period.runs_backward(),
            index: 0,
            done: false,
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    fn nth_element(&self, index: i64) -> Result<M, CalendarError> {
        let amount = index.checked_mul(self.step).ok_or(CalendarError::Overflow)?;
        if self.backward {
            self.origin.checked_sub_units(self.unit, amount)
        } else {
            self.origin.checked_add_units(self.unit, amount)
        }
    }

    fn past_end(&self, current: &M) -> bool {
        if self.backward {
            *current < self.end
        } else {
            *current > self.end
        }
    }
}

impl<M: Moment> Iterator for PeriodRange<M> {
    type Item = M;

    fn next(&mut self) -> Option<M> {
        if self.done {
            return None;
        }

        let current = match self.nth_element(self.index) {
            Ok(current) => current,
            Err(e) => {
                tracing::warn!(unit = %self.unit, index = self.index, error = %e, "range stopped early");
                self.done = true;
                return None;
            }
        };

        if self.past_end(&current) {
            self.done = true;
            return None;
        }

        tracing::trace!(unit = %self.unit, index = self.index, value = ?current, "range step");
        self.index += 1;
        Some(current)
    }
}

impl<M: Moment> FusedIterator for PeriodRange<M> {}

impl<M: Moment> Period<M> {
    /// Walk the period one `unit` at a time, both ends included when they
    /// land on a step
    pub fn range(&self, unit: Unit) -> Result<PeriodRange<M>, PeriodError> {
        self.range_step(unit, 1)
    }

    /// Walk the period `step` units at a time
    pub fn range_step(&self, unit: Unit, step: i64) -> Result<PeriodRange<M>, PeriodError> {
        if step <= 0 {
            return Err(PeriodError::InvalidStep(step));
        }
        if !M::supports(unit) {
            return Err(CalendarError::UnsupportedUnit { unit, moment: M::KIND }.into());
        }
        Ok(PeriodRange::new(self, unit, step))
    }
}

/// Iterating a period walks it by days
impl<'a, M: Moment> IntoIterator for &'a Period<M> {
    type Item = M;
    type IntoIter = PeriodRange<M>;

    fn into_iter(self) -> PeriodRange<M> {
        PeriodRange::new(self, Unit::Days, 1)
    }
}
