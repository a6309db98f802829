//! Locale Registry

use std::collections::HashMap;
use std::sync::Arc;

use crate::{builtin, Locale, LocaleError};

/// Central locale registry
///
/// Built once, then shared read-only (wrap it in an `Arc` to share across
/// threads).
pub struct LocaleRegistry {
    locales: HashMap<String, Arc<dyn Locale>>,
}

impl LocaleRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            locales: HashMap::new(),
        }
    }

    /// A registry with every built-in locale
    pub fn standard() -> Self {
        builtin::all()
            .into_iter()
            .fold(Self::new(), |registry, locale| registry.with_locale(*locale))
    }

    pub fn with_locale<L: Locale + 'static>(mut self, locale: L) -> Self {
        let code = normalize(locale.code());
        self.locales.insert(code, Arc::new(locale));
        self
    }

    /// Exact lookup on the normalized code
    pub fn get(&self, code: &str) -> Option<&dyn Locale> {
        self.locales.get(&normalize(code)).map(|l| l.as_ref())
    }

    /// Look up a locale, falling back from a regional code ("fr_CA") to its
    /// language ("fr")
    pub fn resolve(&self, code: &str) -> Result<&dyn Locale, LocaleError> {
        let normalized = normalize(code);
        if let Some(locale) = self.locales.get(&normalized) {
            return Ok(locale.as_ref());
        }

        if let Some((language, _)) = normalized.split_once('_') {
            if let Some(locale) = self.locales.get(language) {
                tracing::debug!(requested = code, resolved = language, "locale resolved to language");
                return Ok(locale.as_ref());
            }
        }

        Err(LocaleError::NotFound {
            locale: code.to_string(),
            available: self.codes(),
        })
    }

    /// Registered codes, sorted
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.locales.keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lowercase, with `-` mapped to `_`
pub fn normalize(code: &str) -> String {
    code.trim().to_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PluralRule, StaticLocale};
    use tempus_core::Unit;

    #[test]
    fn test_standard_registry() {
        let registry = LocaleRegistry::standard();
        assert_eq!(registry.codes(), vec!["de", "en", "es", "fr", "ru"]);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_resolve_regional_fallback() {
        let registry = LocaleRegistry::standard();
        assert_eq!(registry.resolve("fr-CA").unwrap().code(), "fr");
        assert_eq!(registry.resolve("EN_us").unwrap().code(), "en");
        assert!(registry.get("en_us").is_none());
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = LocaleRegistry::standard();
        match registry.resolve("xx") {
            Err(LocaleError::NotFound { locale, available }) => {
                assert_eq!(locale, "xx");
                assert_eq!(available.len(), 5);
            }
            Ok(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn test_custom_locale() {
        static PIRATE: StaticLocale = StaticLocale {
            code: "en-PIRATE",
            name: "Pirate",
            rule: PluralRule::OneOther,
            units: [
                &["{count} voyage", "{count} voyages"],
                &["{count} moon", "{count} moons"],
                &["{count} watch", "{count} watches"],
                &["{count} sunrise", "{count} sunrises"],
                &["{count} bell", "{count} bells"],
                &["{count} glass", "{count} glasses"],
                &["{count} tick", "{count} ticks"],
            ],
            zero: "no time at all",
        };
        let registry = LocaleRegistry::new().with_locale(PIRATE);
        let locale = registry.resolve("en_pirate").unwrap();
        assert_eq!(locale.unit_phrase(Unit::Months, 2, "2"), "2 moons");
        assert!(registry.resolve("en").is_err());
    }
}
