//! Locale errors

use tempus_core::TempusError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Locale not found: {locale}")]
    NotFound { locale: String, available: Vec<String> },
}

impl From<LocaleError> for TempusError {
    fn from(err: LocaleError) -> Self {
        match err {
            LocaleError::NotFound { locale, available } => {
                TempusError::locale_not_found(&locale)
                    .with_suggestion(format!("Available locales: {}", available.join(", ")))
            }
        }
    }
}
