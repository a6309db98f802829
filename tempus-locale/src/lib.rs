//! Tempus Locale - word lists for humanized periods
//!
//! Provides:
//! - `Locale`: the word-list and pluralization service
//! - `StaticLocale`: table-driven locales (en, fr, de, es, ru built in)
//! - `LocaleRegistry`: lookup with regional fallback
//! - `WordsOptions`: locale and separator, passed explicitly by callers

pub mod builtin;
mod error;
mod options;
mod registry;
mod traits;

pub use builtin::StaticLocale;
pub use error::LocaleError;
pub use options::{WordsOptions, DEFAULT_LOCALE, DEFAULT_SEPARATOR, LOCALE_ENV, SEPARATOR_ENV};
pub use registry::{normalize, LocaleRegistry};
pub use traits::{Locale, PluralRule};
