//! Calendar and clock units

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit a moment can be shifted by
///
/// Years and months are calendar units of variable length. Weeks and days
/// count civil days; hours, minutes and seconds are fixed-length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// All units, largest first
    pub const ALL: [Unit; 7] = [
        Unit::Years,
        Unit::Months,
        Unit::Weeks,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    /// Plural lowercase name ("days")
    pub fn name(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        }
    }

    /// Look up a unit by name, accepting singular and plural forms
    pub fn from_name(name: &str) -> Option<Unit> {
        let lower = name.trim().to_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        Unit::ALL.iter().copied().find(|u| u.name().trim_end_matches('s') == singular)
    }

    /// True for units shorter than a day
    pub fn is_sub_day(self) -> bool {
        matches!(self, Unit::Hours | Unit::Minutes | Unit::Seconds)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
