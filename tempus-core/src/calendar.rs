//! Gregorian calendar arithmetic
//!
//! Proleptic Gregorian rules shared by [`Date`](crate::Date) and
//! [`DateTime`](crate::DateTime). Day numbers count from the Unix epoch
//! (1970-01-01 is day 0).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::CalendarError;

pub const NANOS_PER_SECOND: i128 = 1_000_000_000;
pub const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
pub const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
pub const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;
pub const NANOS_PER_WEEK: i128 = 7 * NANOS_PER_DAY;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

pub const MONTHS_PER_YEAR: i64 = 12;
pub const DAYS_PER_WEEK: i64 = 7;

/// Smallest year a date can carry
pub const MIN_YEAR: i32 = -9999;
/// Largest year a date can carry
pub const MAX_YEAR: i32 = 9999;

/// Days in each month (non-leap year)
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days from 0000-03-01 to 1970-01-01
const UNIX_EPOCH_DAYS: i64 = 719_468;

/// Check if year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Get days in a month (0 for an invalid month)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Validate a (year, month, day) triple
pub fn validate_ymd(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::InvalidYear(year));
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(CalendarError::InvalidDay { day, month, year });
    }
    Ok(())
}

/// Convert civil date to days since Unix epoch
///
/// Howard Hinnant's `days_from_civil`:
/// <http://howardhinnant.github.io/date_algorithms.html>
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - UNIX_EPOCH_DAYS
}

/// Convert days since Unix epoch to a civil date
pub fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m as u32, d as u32)
}

/// First and last supported day numbers
pub fn supported_days() -> (i64, i64) {
    (
        days_from_civil(MIN_YEAR, 1, 1),
        days_from_civil(MAX_YEAR, 12, 31),
    )
}

/// Check a day number against the supported calendar range
pub fn check_day_number(days: i64) -> Result<i64, CalendarError> {
    let (min, max) = supported_days();
    if days < min || days > max {
        Err(CalendarError::Overflow)
    } else {
        Ok(days)
    }
}

/// Shift a (year, month) pair by a signed number of months, clamping the
/// day to the target month's length.
///
/// Returns the new (year, month, day).
pub fn shift_months(year: i32, month: u32, day: u32, months: i64) -> Result<(i32, u32, u32), CalendarError> {
    let total = (year as i64)
        .checked_mul(MONTHS_PER_YEAR)
        .and_then(|t| t.checked_add(month as i64 - 1))
        .and_then(|t| t.checked_add(months))
        .ok_or(CalendarError::Overflow)?;

    let new_year = total.div_euclid(MONTHS_PER_YEAR);
    if new_year < MIN_YEAR as i64 || new_year > MAX_YEAR as i64 {
        return Err(CalendarError::Overflow);
    }
    let new_year = new_year as i32;
    let new_month = (total.rem_euclid(MONTHS_PER_YEAR) + 1) as u32;
    let new_day = day.min(days_in_month(new_year, new_month));
    Ok((new_year, new_month, new_day))
}

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Weekday for a day number (1970-01-01 was a Thursday)
    pub fn from_day_number(days: i64) -> Self {
        match (days + 3).rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    /// ISO 8601 number (1=Monday, 7=Sunday)
    pub fn number_from_monday(self) -> u32 {
        self as u32 + 1
    }

    /// Saturday or Sunday
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    pub fn succ(self) -> Self {
        Self::from_day_number(self as i64 - 2)
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
