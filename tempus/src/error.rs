//! Period errors

use tempus_core::{CalendarError, TempusError};
use tempus_locale::LocaleError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error("Invalid range step: {0} (must be positive)")]
    InvalidStep(i64),
}

impl From<PeriodError> for TempusError {
    fn from(err: PeriodError) -> Self {
        match err {
            PeriodError::Calendar(e) => e.into(),
            PeriodError::Locale(e) => e.into(),
            PeriodError::InvalidStep(step) => TempusError::invalid_step(step),
        }
    }
}
