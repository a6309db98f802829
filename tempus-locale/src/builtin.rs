//! Built-in word lists

use tempus_core::Unit;

use crate::{Locale, PluralRule};

/// A locale backed by static word tables
///
/// Each unit has one template per plural form; `{count}` is replaced by the
/// rendered count.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocale {
    pub code: &'static str,
    pub name: &'static str,
    pub rule: PluralRule,
    /// Forms per unit, in [`Unit::ALL`] order
    pub units: [&'static [&'static str]; 7],
    pub zero: &'static str,
}

impl Locale for StaticLocale {
    fn code(&self) -> &str {
        self.code
    }

    fn name(&self) -> &str {
        self.name
    }

    fn unit_phrase(&self, unit: Unit, magnitude: u64, count_text: &str) -> String {
        let forms = self.units[unit as usize];
        let index = self.rule.form_index(magnitude).min(forms.len().saturating_sub(1));
        match forms.get(index) {
            Some(template) => template.replace("{count}", count_text),
            None => format!("{} {}", count_text, unit),
        }
    }

    fn zero_phrase(&self) -> String {
        self.zero.to_string()
    }
}

pub static EN: StaticLocale = StaticLocale {
    code: "en",
    name: "English",
    rule: PluralRule::OneOther,
    units: [
        &["{count} year", "{count} years"],
        &["{count} month", "{count} months"],
        &["{count} week", "{count} weeks"],
        &["{count} day", "{count} days"],
        &["{count} hour", "{count} hours"],
        &["{count} minute", "{count} minutes"],
        &["{count} second", "{count} seconds"],
    ],
    zero: "0 seconds",
};

pub static FR: StaticLocale = StaticLocale {
    code: "fr",
    name: "French",
    rule: PluralRule::ZeroOneOther,
    units: [
        &["{count} an", "{count} ans"],
        &["{count} mois", "{count} mois"],
        &["{count} semaine", "{count} semaines"],
        &["{count} jour", "{count} jours"],
        &["{count} heure", "{count} heures"],
        &["{count} minute", "{count} minutes"],
        &["{count} seconde", "{count} secondes"],
    ],
    zero: "0 seconde",
};

pub static DE: StaticLocale = StaticLocale {
    code: "de",
    name: "German",
    rule: PluralRule::OneOther,
    units: [
        &["{count} Jahr", "{count} Jahre"],
        &["{count} Monat", "{count} Monate"],
        &["{count} Woche", "{count} Wochen"],
        &["{count} Tag", "{count} Tage"],
        &["{count} Stunde", "{count} Stunden"],
        &["{count} Minute", "{count} Minuten"],
        &["{count} Sekunde", "{count} Sekunden"],
    ],
    zero: "0 Sekunden",
};

pub static ES: StaticLocale = StaticLocale {
    code: "es",
    name: "Spanish",
    rule: PluralRule::OneOther,
    units: [
        &["{count} año", "{count} años"],
        &["{count} mes", "{count} meses"],
        &["{count} semana", "{count} semanas"],
        &["{count} día", "{count} días"],
        &["{count} hora", "{count} horas"],
        &["{count} minuto", "{count} minutos"],
        &["{count} segundo", "{count} segundos"],
    ],
    zero: "0 segundos",
};

pub static RU: StaticLocale = StaticLocale {
    code: "ru",
    name: "Russian",
    rule: PluralRule::EastSlavic,
    units: [
        &["{count} год", "{count} года", "{count} лет"],
        &["{count} месяц", "{count} месяца", "{count} месяцев"],
        &["{count} неделя", "{count} недели", "{count} недель"],
        &["{count} день", "{count} дня", "{count} дней"],
        &["{count} час", "{count} часа", "{count} часов"],
        &["{count} минута", "{count} минуты", "{count} минут"],
        &["{count} секунда", "{count} секунды", "{count} секунд"],
    ],
    zero: "0 секунд",
};

/// Every built-in locale
pub fn all() -> [&'static StaticLocale; 5] {
    [&EN, &FR, &DE, &ES, &RU]
}
