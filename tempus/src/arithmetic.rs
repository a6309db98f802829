//! Duration arithmetic on periods
//!
//! A period used in arithmetic behaves as its elapsed time; results are
//! plain durations, not periods.

use tempus_core::{Duration, DurationError, Moment};

use crate::Period;

impl<M: Moment> Period<M> {
    /// The elapsed time as a plain duration
    pub fn as_duration(&self) -> Duration {
        self.elapsed
    }

    pub fn plus(&self, other: &Duration) -> Result<Duration, DurationError> {
        self.elapsed.checked_add(other)
    }

    pub fn minus(&self, other: &Duration) -> Result<Duration, DurationError> {
        self.elapsed.checked_sub(other)
    }

    pub fn times(&self, factor: i64) -> Result<Duration, DurationError> {
        self.elapsed.checked_mul(factor)
    }

    /// Scale by a float; NaN, infinite factors and overflow are errors
    pub fn times_f64(&self, factor: f64) -> Result<Duration, DurationError> {
        self.elapsed.mul_f64(factor)
    }

    /// True division, rounded half to even at nanosecond precision
    pub fn divided_by(&self, divisor: i64) -> Result<Duration, DurationError> {
        self.elapsed.div(divisor)
    }

    pub fn floor_div(&self, divisor: i64) -> Result<Duration, DurationError> {
        self.elapsed.floor_div(divisor)
    }

    /// How many times `other` fits into this period
    pub fn ratio(&self, other: &Duration) -> Result<f64, DurationError> {
        self.elapsed.ratio(other)
    }

    pub fn floor_div_duration(&self, other: &Duration) -> Result<i64, DurationError> {
        self.elapsed.floor_div_duration(other)
    }

    /// Remainder carrying the sign of `other`
    pub fn modulo(&self, other: &Duration) -> Result<Duration, DurationError> {
        self.elapsed.rem(other)
    }

    pub fn div_rem(&self, other: &Duration) -> Result<(i64, Duration), DurationError> {
        self.elapsed.div_rem(other)
    }
}
