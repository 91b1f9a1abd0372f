//! Locale-aware long date labels ("Saturday, June 15, 2024").
//!
//! The locale is always passed in explicitly so labels do not depend on the
//! host's locale settings. Weekday and month names come from chrono's
//! localized formatting.

use std::str::FromStr;

use chrono::{Locale, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale '{0}'")]
pub struct UnknownLocale(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateLocale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "es")]
    Es,
}

impl DateLocale {
    pub fn tag(self) -> &'static str {
        match self {
            DateLocale::EnUs => "en-US",
            DateLocale::EnGb => "en-GB",
            DateLocale::De => "de",
            DateLocale::Fr => "fr",
            DateLocale::Es => "es",
        }
    }

    pub fn chrono_locale(self) -> Locale {
        match self {
            DateLocale::EnUs => Locale::en_US,
            DateLocale::EnGb => Locale::en_GB,
            DateLocale::De => Locale::de_DE,
            DateLocale::Fr => Locale::fr_FR,
            DateLocale::Es => Locale::es_ES,
        }
    }

    /// strftime pattern for the long label, in the locale's word order.
    fn long_pattern(self) -> &'static str {
        match self {
            DateLocale::EnUs => "%A, %B %-d, %Y",
            DateLocale::EnGb => "%A %-d %B %Y",
            DateLocale::De => "%A, %-d. %B %Y",
            DateLocale::Fr => "%A %-d %B %Y",
            DateLocale::Es => "%A, %-d de %B de %Y",
        }
    }

    pub fn weekday_name(self, date: NaiveDate) -> String {
        date.format_localized("%A", self.chrono_locale()).to_string()
    }

    /// Long label with weekday, day, month name and year.
    pub fn format_long(self, date: NaiveDate) -> String {
        date.format_localized(self.long_pattern(), self.chrono_locale())
            .to_string()
    }
}

impl FromStr for DateLocale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Ok(DateLocale::EnUs),
            "en-gb" => Ok(DateLocale::EnGb),
            "de" | "de-de" => Ok(DateLocale::De),
            "fr" | "fr-fr" => Ok(DateLocale::Fr),
            "es" | "es-es" => Ok(DateLocale::Es),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Long display label for `date` in `locale`.
pub fn format_date(date: NaiveDate, locale: DateLocale) -> String {
    locale.format_long(date)
}
