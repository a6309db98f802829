//! Flat elapsed-time duration
//!
//! A signed nanosecond count with no calendar structure. Component
//! accessors (`days`, `hours`, ...) truncate toward zero and carry the sign
//! of the whole duration, so `-3700s` reads as `-1h -1m -40s`.
//!
//! The `+`, `-`, `*` and unary `-` operators saturate at the i128 bounds.
//! Division and remainder only exist as the `Result`-returning methods,
//! since a zero divisor must be reported.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::calendar::{NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND, NANOS_PER_WEEK};
use crate::DurationError;

/// A duration with nanosecond precision
///
/// Can be positive (forward) or negative (backward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration {
    /// Signed nanoseconds
    nanos: i128,
}

impl Duration {
    pub const ZERO: Duration = Duration { nanos: 0 };

    // ========== Construction ==========

    pub const fn from_nanos(nanos: i128) -> Self {
        Self { nanos }
    }

    pub fn from_secs(secs: i64) -> Self {
        Self { nanos: secs as i128 * NANOS_PER_SECOND }
    }

    pub fn from_millis(millis: i64) -> Self {
        Self { nanos: millis as i128 * 1_000_000 }
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self { nanos: minutes as i128 * NANOS_PER_MINUTE }
    }

    pub fn from_hours(hours: i64) -> Self {
        Self { nanos: hours as i128 * NANOS_PER_HOUR }
    }

    pub fn from_days(days: i64) -> Self {
        Self { nanos: days as i128 * NANOS_PER_DAY }
    }

    pub fn from_weeks(weeks: i64) -> Self {
        Self { nanos: weeks as i128 * NANOS_PER_WEEK }
    }

    // ========== Totals ==========

    pub fn as_nanos(&self) -> i128 {
        self.nanos
    }

    /// Total whole seconds (truncated)
    pub fn as_secs(&self) -> i64 {
        (self.nanos / NANOS_PER_SECOND) as i64
    }

    /// Total whole minutes (truncated)
    pub fn as_minutes(&self) -> i64 {
        (self.nanos / NANOS_PER_MINUTE) as i64
    }

    /// Total whole hours (truncated)
    pub fn as_hours(&self) -> i64 {
        (self.nanos / NANOS_PER_HOUR) as i64
    }

    /// Total whole weeks (truncated)
    pub fn as_weeks(&self) -> i64 {
        (self.nanos / NANOS_PER_WEEK) as i64
    }

    /// Total elapsed seconds including the fractional part
    pub fn total_seconds(&self) -> f64 {
        self.nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn total_minutes(&self) -> f64 {
        self.nanos as f64 / NANOS_PER_MINUTE as f64
    }

    pub fn total_hours(&self) -> f64 {
        self.nanos as f64 / NANOS_PER_HOUR as f64
    }

    pub fn total_days(&self) -> f64 {
        self.nanos as f64 / NANOS_PER_DAY as f64
    }

    pub fn total_weeks(&self) -> f64 {
        self.nanos as f64 / NANOS_PER_WEEK as f64
    }

    // ========== Components ==========

    /// Whole days (truncated toward zero)
    pub fn days(&self) -> i64 {
        (self.nanos / NANOS_PER_DAY) as i64
    }

    /// Whole weeks (truncated toward zero)
    pub fn weeks(&self) -> i64 {
        self.days() / 7
    }

    /// Days left over after whole weeks
    pub fn remaining_days(&self) -> i64 {
        self.days() % 7
    }

    /// Seconds within the last partial day, signed
    fn seconds_of_day(&self) -> i64 {
        self.as_secs() % 86_400
    }

    /// Hour component (0-23, signed)
    pub fn hours(&self) -> i64 {
        self.seconds_of_day() / 3_600
    }

    /// Minute component (0-59, signed)
    pub fn minutes(&self) -> i64 {
        self.seconds_of_day() % 3_600 / 60
    }

    /// Second component (0-59, signed)
    pub fn remaining_seconds(&self) -> i64 {
        self.as_secs() % 60
    }

    /// Sub-second component in nanoseconds, signed
    pub fn subsec_nanos(&self) -> i64 {
        (self.nanos % NANOS_PER_SECOND) as i64
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.nanos == 0
    }

    pub fn is_negative(&self) -> bool {
        self.nanos < 0
    }

    // ========== Arithmetic ==========

    /// Absolute value, saturating at the upper bound
    pub fn abs(&self) -> Self {
        Self { nanos: self.nanos.saturating_abs() }
    }

    pub fn checked_add(&self, other: &Duration) -> Result<Self, DurationError> {
        self.nanos
            .checked_add(other.nanos)
            .map(Self::from_nanos)
            .ok_or(DurationError::Overflow)
    }

    pub fn checked_sub(&self, other: &Duration) -> Result<Self, DurationError> {
        self.nanos
            .checked_sub(other.nanos)
            .map(Self::from_nanos)
            .ok_or(DurationError::Overflow)
    }

    pub fn checked_mul(&self, scalar: i64) -> Result<Self, DurationError> {
        self.nanos
            .checked_mul(scalar as i128)
            .map(Self::from_nanos)
            .ok_or(DurationError::Overflow)
    }

    /// Multiply by a float, rounding to the nearest nanosecond
    ///
    /// NaN and infinite factors are rejected, as are products outside the
    /// representable range.
    pub fn mul_f64(&self, scalar: f64) -> Result<Self, DurationError> {
        if !scalar.is_finite() {
            return Err(DurationError::NonFiniteFactor);
        }
        let product = (self.nanos as f64 * scalar).round();
        // i128::MAX as f64 rounds up to 2^127, which is itself out of range
        if !product.is_finite() || product >= i128::MAX as f64 || product < i128::MIN as f64 {
            return Err(DurationError::Overflow);
        }
        Ok(Self { nanos: product as i128 })
    }

    /// True division by an integer, rounding half to even
    pub fn div(&self, divisor: i64) -> Result<Self, DurationError> {
        if divisor == 0 {
            return Err(DurationError::DivisionByZero);
        }
        let d = divisor as i128;
        let q = self.nanos.checked_div_euclid(d).ok_or(DurationError::Overflow)?;
        let r = self.nanos.rem_euclid(d);
        let twice = r * 2;
        let d_abs = d.abs();
        // rem_euclid is in [0, |d|); compare the remainder against half the divisor
        let q = match twice.cmp(&d_abs) {
            std::cmp::Ordering::Less => q,
            std::cmp::Ordering::Greater => q + d.signum(),
            std::cmp::Ordering::Equal if q % 2 == 0 => q,
            std::cmp::Ordering::Equal => q + d.signum(),
        };
        Ok(Self { nanos: q })
    }

    /// Floor division by an integer
    pub fn floor_div(&self, divisor: i64) -> Result<Self, DurationError> {
        if divisor == 0 {
            return Err(DurationError::DivisionByZero);
        }
        floor_div_i128(self.nanos, divisor as i128)
            .map(Self::from_nanos)
            .ok_or(DurationError::Overflow)
    }

    /// How many times `other` fits, as a float
    pub fn ratio(&self, other: &Duration) -> Result<f64, DurationError> {
        if other.is_zero() {
            return Err(DurationError::DivisionByZero);
        }
        Ok(self.nanos as f64 / other.nanos as f64)
    }

    /// Floor division by another duration
    pub fn floor_div_duration(&self, other: &Duration) -> Result<i64, DurationError> {
        if other.is_zero() {
            return Err(DurationError::DivisionByZero);
        }
        floor_div_i128(self.nanos, other.nanos)
            .and_then(|q| i64::try_from(q).ok())
            .ok_or(DurationError::Overflow)
    }

    /// Modulo with the sign of the divisor
    pub fn rem(&self, other: &Duration) -> Result<Self, DurationError> {
        if other.is_zero() {
            return Err(DurationError::DivisionByZero);
        }
        // wrapping_rem only wraps for MIN % -1, whose remainder is 0 anyway
        let r = self.nanos.wrapping_rem(other.nanos);
        let r = if r != 0 && (r < 0) != (other.nanos < 0) { r + other.nanos } else { r };
        Ok(Self { nanos: r })
    }

    /// Floor quotient and modulo in one step
    pub fn div_rem(&self, other: &Duration) -> Result<(i64, Self), DurationError> {
        Ok((self.floor_div_duration(other)?, self.rem(other)?))
    }
}

/// `None` only for `i128::MIN / -1`
fn floor_div_i128(a: i128, b: i128) -> Option<i128> {
    let q = a.checked_div(b)?;
    if (a % b != 0) && ((a < 0) != (b < 0)) {
        Some(q - 1)
    } else {
        Some(q)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::from_nanos(self.nanos.saturating_add(rhs.nanos))
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_nanos(self.nanos.saturating_sub(rhs.nanos))
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i64) -> Duration {
        Duration::from_nanos(self.nanos.saturating_mul(rhs as i128))
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration::from_nanos(self.nanos.saturating_neg())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs_nanos = self.nanos.unsigned_abs();
        let sign = if self.nanos < 0 { "-" } else { "" };

        let (day, hour, minute, second) = (
            NANOS_PER_DAY as u128,
            NANOS_PER_HOUR as u128,
            NANOS_PER_MINUTE as u128,
            NANOS_PER_SECOND as u128,
        );

        let days = abs_nanos / day;
        let hours = (abs_nanos % day) / hour;
        let minutes = (abs_nanos % hour) / minute;
        let seconds = (abs_nanos % minute) / second;

        if days > 0 {
            write!(f, "{}{}d {:02}:{:02}:{:02}", sign, days, hours, minutes, seconds)
        } else {
            write!(f, "{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
        }
    }
}
