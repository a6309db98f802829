//! Date-only values

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::{self, check_day_number, civil_from_days, days_from_civil, shift_months, DAYS_PER_WEEK};
use crate::{CalendarError, Duration, Moment, Unit, Weekday};

/// A civil date with no time of day
///
/// Stored as days since 1970-01-01. Serialized as `{year, month, day}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateParts", into = "DateParts")]
pub struct Date {
    days: i64,
}

/// Wire form of a [`Date`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        calendar::validate_ymd(year, month, day)?;
        Ok(Self {
            days: days_from_civil(year, month, day),
        })
    }

    /// Build from days since 1970-01-01
    pub fn from_day_number(days: i64) -> Result<Self, CalendarError> {
        Ok(Self {
            days: check_day_number(days)?,
        })
    }

    pub(crate) const fn from_day_number_unchecked(days: i64) -> Self {
        Self { days }
    }

    pub fn day_number(&self) -> i64 {
        self.days
    }

    pub fn to_ymd(&self) -> (i32, u32, u32) {
        civil_from_days(self.days)
    }

    pub fn day(&self) -> u32 {
        self.to_ymd().2
    }

    pub fn add_days(&self, days: i64) -> Result<Self, CalendarError> {
        let days = self.days.checked_add(days).ok_or(CalendarError::Overflow)?;
        Self::from_day_number(days)
    }

    pub fn add_months(&self, months: i64) -> Result<Self, CalendarError> {
        let (year, month, day) = self.to_ymd();
        let (year, month, day) = shift_months(year, month, day, months)?;
        Ok(Self {
            days: days_from_civil(year, month, day),
        })
    }

    pub fn to_iso_string(&self) -> String {
        let (year, month, day) = self.to_ymd();
        if year < 0 {
            format!("-{:04}-{:02}-{:02}", -year, month, day)
        } else {
            format!("{:04}-{:02}-{:02}", year, month, day)
        }
    }
}

impl Moment for Date {
    const KIND: &'static str = "Date";

    fn supports(unit: Unit) -> bool {
        !unit.is_sub_day()
    }

    fn year(&self) -> i32 {
        self.to_ymd().0
    }

    fn month(&self) -> u32 {
        self.to_ymd().1
    }

    fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.days)
    }

    fn duration_since(&self, earlier: &Self) -> Duration {
        Duration::from_days(self.days - earlier.days)
    }

    fn checked_add_units(&self, unit: Unit, amount: i64) -> Result<Self, CalendarError> {
        match unit {
            Unit::Years => {
                let months = amount.checked_mul(12).ok_or(CalendarError::Overflow)?;
                self.add_months(months)
            }
            Unit::Months => self.add_months(amount),
            Unit::Weeks => {
                let days = amount.checked_mul(DAYS_PER_WEEK).ok_or(CalendarError::Overflow)?;
                self.add_days(days)
            }
            Unit::Days => self.add_days(amount),
            Unit::Hours | Unit::Minutes | Unit::Seconds => Err(CalendarError::UnsupportedUnit {
                unit,
                moment: Self::KIND,
            }),
        }
    }

    fn start_of_day(&self) -> Self {
        *self
    }
}

impl TryFrom<DateParts> for Date {
    type Error = CalendarError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Date::from_ymd(parts.year, parts.month, parts.day)
    }
}

impl From<Date> for DateParts {
    fn from(date: Date) -> Self {
        let (year, month, day) = date.to_ymd();
        DateParts { year, month, day }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd() {
        let d = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(d.to_ymd(), (2025, 6, 15));
        assert_eq!(d.weekday(), Weekday::Sunday);
        assert!(d.is_weekend());
    }

    #[test]
    fn test_invalid_dates() {
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd(2025, 0, 1).is_err());
        assert!(Date::from_ymd(2025, 2, 30).is_err());
    }

    #[test]
    fn test_add_units() {
        let d = Date::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(d.checked_add_units(Unit::Months, 1).unwrap().to_ymd(), (2024, 2, 29));
        assert_eq!(d.checked_add_units(Unit::Years, 1).unwrap().to_ymd(), (2025, 1, 31));
        assert_eq!(d.checked_add_units(Unit::Weeks, 1).unwrap().to_ymd(), (2024, 2, 7));
        assert_eq!(d.checked_sub_units(Unit::Days, 31).unwrap().to_ymd(), (2023, 12, 31));
    }

    #[test]
    fn test_sub_day_units_unsupported() {
        let d = Date::from_ymd(2024, 1, 31).unwrap();
        assert!(!Date::supports(Unit::Hours));
        assert!(matches!(
            d.checked_add_units(Unit::Hours, 1),
            Err(CalendarError::UnsupportedUnit { unit: Unit::Hours, .. })
        ));
    }

    #[test]
    fn test_duration_since() {
        let a = Date::from_ymd(2025, 6, 10).unwrap();
        let b = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(b.duration_since(&a).days(), 5);
        assert_eq!(a.duration_since(&b).days(), -5);
    }

    #[test]
    fn test_between() {
        let a = Date::from_ymd(2025, 6, 10).unwrap();
        let b = Date::from_ymd(2025, 6, 15).unwrap();
        let mid = Date::from_ymd(2025, 6, 12).unwrap();
        assert!(mid.between(&a, &b));
        assert!(mid.between(&b, &a));
        assert!(a.between(&a, &b));
        assert!(!Date::from_ymd(2025, 6, 16).unwrap().between(&a, &b));
    }

    #[test]
    fn test_overflow() {
        let d = Date::from_ymd(9999, 12, 31).unwrap();
        assert_eq!(d.add_days(1), Err(CalendarError::Overflow));
    }

    #[test]
    fn test_serde_parts() {
        let d = Date::from_ymd(2023, 1, 5).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"year":2023,"month":1,"day":5}"#);
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Date>(r#"{"year":2023,"month":2,"day":30}"#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Date::from_ymd(2023, 1, 5).unwrap().to_string(), "2023-01-05");
    }
}
