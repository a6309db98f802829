//! The Period type
//!
//! A period is the calendar-aware difference between two moments. It is
//! computed once at construction and never changes; every query below is a
//! projection of the stored endpoints, calendar delta and elapsed time.

use std::fmt;

use tempus_core::calendar::MONTHS_PER_YEAR;
use tempus_core::{Duration, Moment, Weekday};

use crate::{CalendarDelta, PeriodError};

/// Calendar-aware duration between two moments
///
/// With `absolute` set, `start <= end` always holds and `invert` still
/// records whether the caller supplied them in descending order. Without
/// it, the caller's order is kept and `invert` is `start > end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period<M> {
    pub(crate) start: M,
    pub(crate) end: M,
    pub(crate) invert: bool,
    pub(crate) absolute: bool,
    pub(crate) delta: CalendarDelta,
    pub(crate) elapsed: Duration,
}

impl<M: Moment> Period<M> {
    // ========== Construction ==========

    /// Signed period from `start` to `end`
    pub fn new(start: impl Into<M>, end: impl Into<M>) -> Result<Self, PeriodError> {
        Self::with_absolute(start, end, false)
    }

    /// Period whose endpoints are stored in chronological order
    pub fn absolute(start: impl Into<M>, end: impl Into<M>) -> Result<Self, PeriodError> {
        Self::with_absolute(start, end, true)
    }

    pub fn with_absolute(start: impl Into<M>, end: impl Into<M>, absolute: bool) -> Result<Self, PeriodError> {
        let (mut start, mut end) = (start.into(), end.into());

        let invert = start > end;
        if absolute && invert {
            std::mem::swap(&mut start, &mut end);
        }

        let delta = CalendarDelta::between(&start, &end)?;
        let elapsed = end.duration_since(&start);

        tracing::debug!(
            start = ?start,
            end = ?end,
            invert,
            absolute,
            months = delta.total_months(),
            days = delta.days,
            "period computed"
        );

        Ok(Self {
            start,
            end,
            invert,
            absolute,
            delta,
            elapsed,
        })
    }

    // ========== Endpoints ==========

    pub fn start(&self) -> &M {
        &self.start
    }

    pub fn end(&self) -> &M {
        &self.end
    }

    /// True when the supplied start was after the supplied end
    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Whether the walk from `start` to `end` runs backward in time
    pub(crate) fn runs_backward(&self) -> bool {
        !self.absolute && self.invert
    }

    /// Inclusive containment; works for either endpoint order
    pub fn contains(&self, moment: &M) -> bool {
        moment.between(&self.start, &self.end)
    }

    // ========== Calendar components ==========

    pub fn calendar_delta(&self) -> &CalendarDelta {
        &self.delta
    }

    pub fn years(&self) -> i64 {
        self.delta.years
    }

    pub fn months(&self) -> i64 {
        self.delta.months
    }

    pub fn weeks(&self) -> i64 {
        self.delta.weeks()
    }

    /// Elapsed time in whole days, signed (not reduced by weeks)
    pub fn days(&self) -> i64 {
        self.elapsed.days()
    }

    /// Calendar day component left over after whole weeks, signed like
    /// [`days`](Self::days)
    pub fn days_exclude_weeks(&self) -> i64 {
        let sign = if self.days() < 0 { -1 } else { 1 };
        self.delta.days.abs() % 7 * sign
    }

    // Clock components come from the elapsed time, not the calendar walk.

    pub fn hours(&self) -> i64 {
        self.elapsed.hours()
    }

    pub fn minutes(&self) -> i64 {
        self.elapsed.minutes()
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.elapsed.remaining_seconds()
    }

    // ========== Whole-unit totals ==========

    pub fn in_years(&self) -> i64 {
        self.years()
    }

    /// Full months, counting across year boundaries
    pub fn in_months(&self) -> i64 {
        self.years() * MONTHS_PER_YEAR + self.months()
    }

    pub fn in_weeks(&self) -> i64 {
        self.elapsed.as_weeks()
    }

    pub fn in_days(&self) -> i64 {
        self.elapsed.days()
    }

    pub fn in_hours(&self) -> i64 {
        self.elapsed.as_hours()
    }

    pub fn in_minutes(&self) -> i64 {
        self.elapsed.as_minutes()
    }

    pub fn in_seconds(&self) -> i64 {
        self.elapsed.as_secs()
    }

    pub fn total_weeks(&self) -> f64 {
        self.elapsed.total_weeks()
    }

    pub fn total_days(&self) -> f64 {
        self.elapsed.total_days()
    }

    pub fn total_hours(&self) -> f64 {
        self.elapsed.total_hours()
    }

    pub fn total_minutes(&self) -> f64 {
        self.elapsed.total_minutes()
    }

    pub fn total_seconds(&self) -> f64 {
        self.elapsed.total_seconds()
    }

    // ========== Weekday counting ==========

    /// Monday-to-Friday days covered, both endpoints included
    ///
    /// Negative for an inverted, non-absolute period.
    pub fn in_weekdays(&self) -> i64 {
        self.count_days(false)
    }

    /// Saturdays and Sundays covered, both endpoints included
    pub fn in_weekend_days(&self) -> i64 {
        self.count_days(true)
    }

    fn count_days(&self, weekend: bool) -> i64 {
        let backward = self.runs_backward();
        let (from, to) = if backward {
            (self.end.start_of_day(), self.start.start_of_day())
        } else {
            (self.start.start_of_day(), self.end.start_of_day())
        };

        let total = to.duration_since(&from).days() + 1;
        if total <= 0 {
            return 0;
        }

        // Every run of seven consecutive days holds five weekdays and two
        // weekend days; only the tail needs walking.
        let mut count = total / 7 * if weekend { 2 } else { 5 };
        let mut day: Weekday = from.weekday();
        for _ in 0..total % 7 {
            if day.is_weekend() == weekend {
                count += 1;
            }
            day = day.succ();
        }

        if backward {
            -count
        } else {
            count
        }
    }

    // ========== Derived periods ==========

    /// The same endpoints reversed, keeping the absolute flag
    pub fn negate(&self) -> Result<Self, PeriodError> {
        Self::with_absolute(self.end.clone(), self.start.clone(), self.absolute)
    }

    /// The same endpoints in absolute mode
    pub fn abs(&self) -> Result<Self, PeriodError> {
        Self::with_absolute(self.start.clone(), self.end.clone(), true)
    }
}

impl<M: Moment + fmt::Display> fmt::Display for Period<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempus_core::{Date, DateTime};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_forward_period() {
        let p = Period::<Date>::new(date(2023, 1, 1), date(2024, 3, 15)).unwrap();
        assert!(!p.is_inverted());
        assert_eq!(p.years(), 1);
        assert_eq!(p.months(), 2);
        assert_eq!(p.weeks(), 2);
        assert_eq!(p.days_exclude_weeks(), 0);
        assert_eq!(p.days(), 439);
        assert_eq!(p.in_months(), 14);
        assert_eq!(p.in_years(), 1);
    }

    #[test]
    fn test_inverted_keeps_order() {
        let p = Period::<Date>::new(date(2024, 3, 15), date(2023, 1, 1)).unwrap();
        assert!(p.is_inverted());
        assert_eq!(*p.start(), date(2024, 3, 15));
        assert_eq!(p.in_months(), -14);
        assert_eq!(p.days(), -439);
    }

    #[test]
    fn test_absolute_swaps() {
        let p = Period::<Date>::absolute(date(2024, 3, 15), date(2023, 1, 1)).unwrap();
        assert!(p.is_inverted());
        assert!(p.is_absolute());
        assert_eq!(*p.start(), date(2023, 1, 1));
        assert_eq!(*p.end(), date(2024, 3, 15));
        assert_eq!(p.in_months(), 14);
        assert_eq!(p.days(), 439);
    }

    #[test]
    fn test_zero_period() {
        let p = Period::<Date>::new(date(2023, 6, 1), date(2023, 6, 1)).unwrap();
        assert!(!p.is_inverted());
        assert!(p.calendar_delta().is_zero());
        assert_eq!(p.days(), 0);
    }

    #[test]
    fn test_days_exclude_weeks() {
        let p = Period::<Date>::new(date(2023, 1, 1), date(2023, 1, 20)).unwrap();
        assert_eq!(p.weeks(), 2);
        assert_eq!(p.days_exclude_weeks(), 5);

        let p = p.negate().unwrap();
        assert_eq!(p.weeks(), -2);
        assert_eq!(p.days_exclude_weeks(), -5);
    }

    #[test]
    fn test_clock_components() {
        let start = DateTime::from_ymd_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let end = DateTime::from_ymd_hms(2023, 1, 2, 3, 4, 5).unwrap();
        let p = Period::<DateTime>::new(start, end).unwrap();
        assert_eq!((p.days(), p.hours(), p.minutes(), p.remaining_seconds()), (1, 3, 4, 5));

        let back = Period::<DateTime>::new(end, start).unwrap();
        assert_eq!((back.days(), back.hours(), back.minutes(), back.remaining_seconds()), (-1, -3, -4, -5));
    }

    #[test]
    fn test_mixed_endpoints() {
        let start = date(2023, 1, 1);
        let end = DateTime::from_ymd_hms(2023, 1, 1, 12, 0, 0).unwrap();
        let p = Period::<DateTime>::new(start, end).unwrap();
        assert_eq!(p.hours(), 12);
        assert_eq!(p.in_minutes(), 720);
    }

    #[test]
    fn test_in_totals() {
        let p = Period::<Date>::new(date(2023, 1, 1), date(2023, 1, 22)).unwrap();
        assert_eq!(p.in_weeks(), 3);
        assert_eq!(p.in_days(), 21);
        assert_eq!(p.in_hours(), 504);
        assert_eq!(p.total_weeks(), 3.0);
    }

    #[test]
    fn test_weekdays_single_day() {
        // 2023-06-01 is a Thursday
        let p = Period::<Date>::new(date(2023, 6, 1), date(2023, 6, 1)).unwrap();
        assert_eq!(p.in_weekdays(), 1);
        assert_eq!(p.in_weekend_days(), 0);

        // 2023-06-03 is a Saturday
        let p = Period::<Date>::new(date(2023, 6, 3), date(2023, 6, 3)).unwrap();
        assert_eq!(p.in_weekdays(), 0);
        assert_eq!(p.in_weekend_days(), 1);
    }

    #[test]
    fn test_weekdays_span() {
        // Sunday Jan 1 through Tuesday Jan 31, 2023
        let p = Period::<Date>::new(date(2023, 1, 1), date(2023, 1, 31)).unwrap();
        assert_eq!(p.in_weekdays(), 22);
        assert_eq!(p.in_weekend_days(), 9);
    }

    #[test]
    fn test_weekdays_inverted_negates() {
        let p = Period::<Date>::new(date(2023, 1, 31), date(2023, 1, 1)).unwrap();
        assert_eq!(p.in_weekdays(), -22);
        assert_eq!(p.in_weekend_days(), -9);

        let p = Period::<Date>::absolute(date(2023, 1, 31), date(2023, 1, 1)).unwrap();
        assert_eq!(p.in_weekdays(), 22);
    }

    #[test]
    fn test_weekdays_ignore_time_of_day() {
        let start = DateTime::from_ymd_hms(2023, 6, 2, 23, 0, 0).unwrap(); // Friday
        let end = DateTime::from_ymd_hms(2023, 6, 5, 1, 0, 0).unwrap(); // Monday
        let p = Period::<DateTime>::new(start, end).unwrap();
        assert_eq!(p.in_weekdays(), 2);
        assert_eq!(p.in_weekend_days(), 2);
    }

    #[test]
    fn test_contains() {
        let p = Period::<Date>::new(date(2023, 1, 10), date(2023, 1, 1)).unwrap();
        assert!(p.contains(&date(2023, 1, 5)));
        assert!(p.contains(&date(2023, 1, 10)));
        assert!(!p.contains(&date(2023, 1, 11)));
    }

    #[test]
    fn test_negate_and_abs() {
        let p = Period::<Date>::new(date(2023, 1, 1), date(2023, 2, 1)).unwrap();
        let n = p.negate().unwrap();
        assert!(n.is_inverted());
        assert_eq!(*n.start(), date(2023, 2, 1));
        assert_eq!(n.months(), -1);

        let a = n.abs().unwrap();
        assert!(a.is_absolute());
        assert_eq!(*a.start(), date(2023, 1, 1));
        assert_eq!(a.months(), 1);
    }

    #[test]
    fn test_display() {
        let p = Period::<Date>::new(date(2023, 1, 1), date(2023, 1, 5)).unwrap();
        assert_eq!(p.to_string(), "[2023-01-01 -> 2023-01-05]");
    }
}
