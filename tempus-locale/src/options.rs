//! Humanization options
//!
//! Callers pass these explicitly; nothing in the library reads a global
//! default. `from_env` is a caller-side convenience.

use serde::{Deserialize, Serialize};
use std::env;

pub const LOCALE_ENV: &str = "TEMPUS_LOCALE";
pub const SEPARATOR_ENV: &str = "TEMPUS_SEPARATOR";

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_SEPARATOR: &str = " ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsOptions {
    pub locale: String,
    pub separator: String,
}

impl WordsOptions {
    pub fn new(locale: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            separator: separator.into(),
        }
    }

    /// Defaults overridden by `TEMPUS_LOCALE` / `TEMPUS_SEPARATOR`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(locale) = lookup(LOCALE_ENV).filter(|l| !l.trim().is_empty()) {
            options.locale = locale;
        }
        if let Some(separator) = lookup(SEPARATOR_ENV) {
            options.separator = separator;
        }
        options
    }

    /// Builder: set locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Builder: set separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl Default for WordsOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, DEFAULT_SEPARATOR)
    }
}
