//! Locale traits

use tempus_core::Unit;

/// How a locale picks a grammatical form from a magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// English, German, Spanish: singular for exactly one
    OneOther,
    /// French: singular for zero and one
    ZeroOneOther,
    /// Russian, Ukrainian: one / few / many
    EastSlavic,
}

impl PluralRule {
    /// Index of the form to use for `n`
    pub fn form_index(self, n: u64) -> usize {
        match self {
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::ZeroOneOther => usize::from(n > 1),
            PluralRule::EastSlavic => {
                let (tens, units) = (n % 100, n % 10);
                if units == 1 && tens != 11 {
                    0
                } else if (2..=4).contains(&units) && !(12..=14).contains(&tens) {
                    1
                } else {
                    2
                }
            }
        }
    }
}

/// Word-list and pluralization service for one language
pub trait Locale: Send + Sync {
    /// Locale code ("en", "fr", ...), normalized by the registry
    fn code(&self) -> &str;

    /// English name of the language
    fn name(&self) -> &str;

    /// Render `count_text` with the form `unit` takes for `magnitude`
    ///
    /// The magnitude only selects the grammatical form; the text printed is
    /// `count_text`, which may carry a sign or decimals.
    fn unit_phrase(&self, unit: Unit, magnitude: u64, count_text: &str) -> String;

    /// Phrase for a duration with no non-zero component
    fn zero_phrase(&self) -> String;
}
