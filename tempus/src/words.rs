//! Humanized period text

use tempus_core::calendar::NANOS_PER_SECOND;
use tempus_core::{Moment, Unit};
use tempus_locale::{Locale, LocaleRegistry, WordsOptions};

use crate::{Period, PeriodError};

impl<M: Moment> Period<M> {
    /// Render the period as words, e.g. "1 year 2 months 2 weeks"
    ///
    /// The locale in `options` must be known to `registry`; an unknown
    /// locale is an error, never a silent fallback.
    pub fn in_words(&self, registry: &LocaleRegistry, options: &WordsOptions) -> Result<String, PeriodError> {
        let locale = registry.resolve(&options.locale)?;
        Ok(self.in_words_with(locale, &options.separator))
    }

    pub fn in_words_with(&self, locale: &dyn Locale, separator: &str) -> String {
        let parts: Vec<String> = self
            .word_components()
            .into_iter()
            .filter(|(_, count)| *count != 0)
            .map(|(unit, count)| locale.unit_phrase(unit, count.unsigned_abs(), &count.to_string()))
            .collect();

        if !parts.is_empty() {
            return parts.join(separator);
        }

        let nanos = self.elapsed.subsec_nanos().unsigned_abs();
        if nanos > 0 {
            let seconds = nanos as f64 / NANOS_PER_SECOND as f64;
            return locale.unit_phrase(Unit::Seconds, 1, &format!("{:.2}", seconds));
        }
        locale.zero_phrase()
    }

    fn word_components(&self) -> [(Unit, i64); 7] {
        [
            (Unit::Years, self.years()),
            (Unit::Months, self.months()),
            (Unit::Weeks, self.weeks()),
            (Unit::Days, self.days_exclude_weeks()),
            (Unit::Hours, self.hours()),
            (Unit::Minutes, self.minutes()),
            (Unit::Seconds, self.remaining_seconds()),
        ]
    }
}
