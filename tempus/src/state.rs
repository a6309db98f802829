//! Reconstruction state and serde support
//!
//! A period is stored as the endpoints it was built from plus the absolute
//! flag. For an inverted absolute period the stored endpoints are swapped
//! back, so rebuilding derives the same inversion.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tempus_core::Moment;

use crate::{Period, PeriodError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodState<M> {
    pub start: M,
    pub end: M,
    #[serde(default)]
    pub absolute: bool,
}

impl<M: Moment> Period<M> {
    pub fn state(&self) -> PeriodState<M> {
        let (start, end) = if self.invert && self.absolute {
            (self.end.clone(), self.start.clone())
        } else {
            (self.start.clone(), self.end.clone())
        };
        PeriodState {
            start,
            end,
            absolute: self.absolute,
        }
    }

    pub fn from_state(state: PeriodState<M>) -> Result<Self, PeriodError> {
        Self::with_absolute(state.start, state.end, state.absolute)
    }
}

impl<M: Moment> TryFrom<PeriodState<M>> for Period<M> {
    type Error = PeriodError;

    fn try_from(state: PeriodState<M>) -> Result<Self, Self::Error> {
        Self::from_state(state)
    }
}

impl<M: Moment + Serialize> Serialize for Period<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.state().serialize(serializer)
    }
}

impl<'de, M: Moment + Deserialize<'de>> Deserialize<'de> for Period<M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let state = PeriodState::<M>::deserialize(deserializer)?;
        Period::from_state(state).map_err(serde::de::Error::custom)
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
    fn test_state_swaps_back_inverted_absolute() {
        let p = Period::<Date>::absolute(date(2023, 2, 1), date(2023, 1, 1)).unwrap();
        let state = p.state();
        assert_eq!(state.start, date(2023, 2, 1));
        assert_eq!(state.end, date(2023, 1, 1));
        assert!(state.absolute);

        let rebuilt = Period::from_state(state).unwrap();
        assert_eq!(rebuilt, p);
        assert!(rebuilt.is_inverted());
    }

    #[test]
    fn test_state_keeps_plain_order() {
        let p = Period::<Date>::new(date(2023, 2, 1), date(2023, 1, 1)).unwrap();
        let state = p.state();
        assert_eq!(state.start, date(2023, 2, 1));
        assert!(!state.absolute);
        assert_eq!(Period::try_from(state).unwrap(), p);
    }

    #[test]
    fn test_json_shape() {
        let p = Period::<Date>::new(date(2023, 1, 1), date(2023, 1, 5)).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "start": {"year": 2023, "month": 1, "day": 1},
                "end": {"year": 2023, "month": 1, "day": 5},
                "absolute": false
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let start = DateTime::from_ymd_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let end = DateTime::from_ymd_hms(2023, 12, 25, 8, 0, 0).unwrap();
        let p = Period::<DateTime>::absolute(start, end).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: Period<DateTime> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.start(), p.start());
        assert!(back.is_inverted() && back.is_absolute());
    }

    #[test]
    fn test_absolute_defaults_to_false() {
        let json = r#"{"start": {"year": 2023, "month": 1, "day": 1}, "end": {"year": 2023, "month": 1, "day": 2}}"#;
        let p: Period<Date> = serde_json::from_str(json).unwrap();
        assert!(!p.is_absolute());
        assert_eq!(p.days(), 1);
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let json = r#"{"start": {"year": 2023, "month": 2, "day": 30}, "end": {"year": 2023, "month": 3, "day": 1}}"#;
        assert!(serde_json::from_str::<Period<Date>>(json).is_err());
    }
}
