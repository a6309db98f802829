//! Civil datetime values
//!
//! Naive (zone-less) datetimes with nanosecond precision on the proleptic
//! Gregorian calendar. Time zones are out of scope: two datetimes compare
//! and subtract as wall-clock readings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::{
    self, check_day_number, civil_from_days, days_from_civil, shift_months, NANOS_PER_DAY,
    NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND, NANOS_PER_WEEK,
};
use crate::{CalendarError, Date, Duration, Moment, Unit, Weekday};

/// A datetime with nanosecond precision
///
/// Internally stores nanoseconds since 1970-01-01T00:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateTimeParts", into = "DateTimeParts")]
pub struct DateTime {
    nanos: i128,
}

/// Wire form of a [`DateTime`]; time fields default to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub nanosecond: u32,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl DateTime {
    // ========== Construction ==========

    /// Midnight of the given date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        Self::from_ymd_hms_nano(year, month, day, 0, 0, 0, 0)
    }

    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, CalendarError> {
        Self::from_ymd_hms_nano(year, month, day, hour, minute, second, 0)
    }

    pub fn from_ymd_hms_nano(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nano: u32,
    ) -> Result<Self, CalendarError> {
        calendar::validate_ymd(year, month, day)?;
        if hour > 23 {
            return Err(CalendarError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(CalendarError::InvalidMinute(minute));
        }
        if second > 59 {
            return Err(CalendarError::InvalidSecond(second));
        }
        if nano >= 1_000_000_000 {
            return Err(CalendarError::InvalidNano(nano));
        }

        let days = days_from_civil(year, month, day);
        let time_nanos = hour as i128 * NANOS_PER_HOUR
            + minute as i128 * NANOS_PER_MINUTE
            + second as i128 * NANOS_PER_SECOND
            + nano as i128;

        Ok(Self {
            nanos: days as i128 * NANOS_PER_DAY + time_nanos,
        })
    }

    /// Build from nanoseconds since 1970-01-01T00:00:00
    pub fn from_nanos(nanos: i128) -> Result<Self, CalendarError> {
        check_day_number(day_number_of(nanos)?)?;
        Ok(Self { nanos })
    }

    // ========== Accessors ==========

    pub fn as_nanos(&self) -> i128 {
        self.nanos
    }

    fn day_number(&self) -> i64 {
        self.nanos.div_euclid(NANOS_PER_DAY) as i64
    }

    fn nanos_of_day(&self) -> i128 {
        self.nanos.rem_euclid(NANOS_PER_DAY)
    }

    pub fn date(&self) -> Date {
        // Constructors keep the day number inside the supported range
        Date::from_day_number_unchecked(self.day_number())
    }

    pub fn to_ymd(&self) -> (i32, u32, u32) {
        civil_from_days(self.day_number())
    }

    pub fn day(&self) -> u32 {
        self.to_ymd().2
    }

    pub fn hour(&self) -> u32 {
        (self.nanos_of_day() / NANOS_PER_HOUR) as u32
    }

    pub fn minute(&self) -> u32 {
        ((self.nanos_of_day() % NANOS_PER_HOUR) / NANOS_PER_MINUTE) as u32
    }

    pub fn second(&self) -> u32 {
        ((self.nanos_of_day() % NANOS_PER_MINUTE) / NANOS_PER_SECOND) as u32
    }

    pub fn nanosecond(&self) -> u32 {
        self.nanos.rem_euclid(NANOS_PER_SECOND) as u32
    }

    // ========== Arithmetic ==========

    pub fn checked_add_duration(&self, duration: &Duration) -> Result<Self, CalendarError> {
        let nanos = self
            .nanos
            .checked_add(duration.as_nanos())
            .ok_or(CalendarError::Overflow)?;
        Self::from_nanos(nanos)
    }

    pub fn add_months(&self, months: i64) -> Result<Self, CalendarError> {
        let (year, month, day) = self.to_ymd();
        let (year, month, day) = shift_months(year, month, day, months)?;
        let days = days_from_civil(year, month, day);
        Ok(Self {
            nanos: days as i128 * NANOS_PER_DAY + self.nanos_of_day(),
        })
    }

    fn add_scaled(&self, amount: i64, scale: i128) -> Result<Self, CalendarError> {
        let delta = (amount as i128).checked_mul(scale).ok_or(CalendarError::Overflow)?;
        self.checked_add_duration(&Duration::from_nanos(delta))
    }

    // ========== Formatting ==========

    /// ISO 8601 form; fractional seconds only when present
    pub fn to_iso_string(&self) -> String {
        let (year, month, day) = self.to_ymd();
        let date = if year < 0 {
            format!("-{:04}-{:02}-{:02}", -year, month, day)
        } else {
            format!("{:04}-{:02}-{:02}", year, month, day)
        };
        let mut out = format!(
            "{}T{:02}:{:02}:{:02}",
            date,
            self.hour(),
            self.minute(),
            self.second()
        );
        let nano = self.nanosecond();
        if nano != 0 {
            let frac = format!("{:09}", nano);
            out.push('.');
            out.push_str(frac.trim_end_matches('0'));
        }
        out
    }
}

fn day_number_of(nanos: i128) -> Result<i64, CalendarError> {
    i64::try_from(nanos.div_euclid(NANOS_PER_DAY)).map_err(|_| CalendarError::Overflow)
}

impl Moment for DateTime {
    const KIND: &'static str = "DateTime";

    fn supports(_unit: Unit) -> bool {
        true
    }

    fn year(&self) -> i32 {
        self.to_ymd().0
    }

    fn month(&self) -> u32 {
        self.to_ymd().1
    }

    fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number())
    }

    fn duration_since(&self, earlier: &Self) -> Duration {
        Duration::from_nanos(self.nanos - earlier.nanos)
    }

    fn checked_add_units(&self, unit: Unit, amount: i64) -> Result<Self, CalendarError> {
        match unit {
            Unit::Years => {
                let months = amount.checked_mul(12).ok_or(CalendarError::Overflow)?;
                self.add_months(months)
            }
            Unit::Months => self.add_months(amount),
            Unit::Weeks => self.add_scaled(amount, NANOS_PER_WEEK),
            Unit::Days => self.add_scaled(amount, NANOS_PER_DAY),
            Unit::Hours => self.add_scaled(amount, NANOS_PER_HOUR),
            Unit::Minutes => self.add_scaled(amount, NANOS_PER_MINUTE),
            Unit::Seconds => self.add_scaled(amount, NANOS_PER_SECOND),
        }
    }

    fn start_of_day(&self) -> Self {
        Self {
            nanos: self.day_number() as i128 * NANOS_PER_DAY,
        }
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        Self {
            nanos: date.day_number() as i128 * NANOS_PER_DAY,
        }
    }
}

impl TryFrom<DateTimeParts> for DateTime {
    type Error = CalendarError;

    fn try_from(p: DateTimeParts) -> Result<Self, Self::Error> {
        DateTime::from_ymd_hms_nano(p.year, p.month, p.day, p.hour, p.minute, p.second, p.nanosecond)
    }
}

impl From<DateTime> for DateTimeParts {
    fn from(dt: DateTime) -> Self {
        let (year, month, day) = dt.to_ymd();
        DateTimeParts {
            year,
            month,
            day,
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            nanosecond: dt.nanosecond(),
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_hms() {
        let dt = DateTime::from_ymd_hms(2025, 6, 15, 14, 30, 45).unwrap();
        assert_eq!(dt.to_ymd(), (2025, 6, 15));
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 45);
    }

    #[test]
    fn test_unix_epoch() {
        let dt = DateTime::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(dt.as_nanos(), 0);
    }

    #[test]
    fn test_pre_epoch() {
        let dt = DateTime::from_ymd_hms(1969, 12, 31, 23, 0, 0).unwrap();
        assert!(dt.as_nanos() < 0);
        assert_eq!(dt.to_ymd(), (1969, 12, 31));
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.start_of_day(), DateTime::from_ymd(1969, 12, 31).unwrap());
    }

    #[test]
    fn test_invalid_times() {
        assert!(matches!(
            DateTime::from_ymd_hms(2025, 1, 1, 25, 0, 0),
            Err(CalendarError::InvalidHour(25))
        ));
        assert!(DateTime::from_ymd_hms(2025, 1, 1, 0, 60, 0).is_err());
        assert!(DateTime::from_ymd_hms_nano(2025, 1, 1, 0, 0, 0, 1_000_000_000).is_err());
    }

    #[test]
    fn test_add_months_keeps_time() {
        let dt = DateTime::from_ymd_hms(2025, 1, 31, 8, 15, 0).unwrap();
        let shifted = dt.checked_add_units(Unit::Months, 1).unwrap();
        assert_eq!(shifted, DateTime::from_ymd_hms(2025, 2, 28, 8, 15, 0).unwrap());
    }

    #[test]
    fn test_add_clock_units() {
        let dt = DateTime::from_ymd_hms(2025, 12, 31, 23, 59, 59).unwrap();
        let next = dt.checked_add_units(Unit::Seconds, 1).unwrap();
        assert_eq!(next, DateTime::from_ymd(2026, 1, 1).unwrap());
        let back = next.checked_sub_units(Unit::Hours, 24).unwrap();
        assert_eq!(back, DateTime::from_ymd(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_overflow() {
        let dt = DateTime::from_ymd_hms(9999, 12, 31, 23, 0, 0).unwrap();
        assert_eq!(dt.checked_add_units(Unit::Hours, 1), Err(CalendarError::Overflow));
        assert_eq!(dt.checked_add_units(Unit::Days, i64::MAX), Err(CalendarError::Overflow));
    }

    #[test]
    fn test_from_date() {
        let d = Date::from_ymd(2024, 2, 29).unwrap();
        let dt = DateTime::from(d);
        assert_eq!(dt, DateTime::from_ymd(2024, 2, 29).unwrap());
        assert_eq!(dt.date(), d);
    }

    #[test]
    fn test_iso_string() {
        let dt = DateTime::from_ymd_hms(2025, 6, 15, 14, 30, 0).unwrap();
        assert_eq!(dt.to_iso_string(), "2025-06-15T14:30:00");
        let dt = DateTime::from_ymd_hms_nano(2025, 6, 15, 14, 30, 0, 250_000_000).unwrap();
        assert_eq!(dt.to_string(), "2025-06-15T14:30:00.25");
    }

    #[test]
    fn test_serde_parts_default_time() {
        let dt: DateTime = serde_json::from_str(r#"{"year":2023,"month":6,"day":1}"#).unwrap();
        assert_eq!(dt, DateTime::from_ymd(2023, 6, 1).unwrap());
        let json = serde_json::to_string(&DateTime::from_ymd_hms(2023, 6, 1, 9, 5, 0).unwrap()).unwrap();
        assert_eq!(json, r#"{"year":2023,"month":6,"day":1,"hour":9,"minute":5,"second":0}"#);
    }
}
