//! Quick-date presets offered next to every date input.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::dates::calc::{add_time_to_date, format_date_to_string, TimeUnit};

/// A named rule producing a date relative to today.
#[derive(Debug, Clone, Copy)]
pub struct QuickDatePreset {
    pub label: &'static str,
    rule: fn(NaiveDate) -> NaiveDate,
}

impl QuickDatePreset {
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        (self.rule)(today)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPreset {
    pub label: &'static str,
    pub date: String,
}

pub static QUICK_DATE_OPTIONS: &[QuickDatePreset] = &[
    QuickDatePreset {
        label: "Today",
        rule: |today| today,
    },
    QuickDatePreset {
        label: "Tomorrow",
        rule: |today| shift(today, 1, TimeUnit::Days),
    },
    QuickDatePreset {
        label: "Yesterday",
        rule: |today| shift(today, -1, TimeUnit::Days),
    },
    QuickDatePreset {
        label: "Next Week",
        rule: |today| shift(today, 1, TimeUnit::Weeks),
    },
    QuickDatePreset {
        label: "Last Week",
        rule: |today| shift(today, -1, TimeUnit::Weeks),
    },
    QuickDatePreset {
        label: "Next Month",
        rule: |today| shift(today, 1, TimeUnit::Months),
    },
    QuickDatePreset {
        label: "Last Month",
        rule: |today| shift(today, -1, TimeUnit::Months),
    },
    QuickDatePreset {
        label: "New Year",
        rule: |today| ymd_or(today, today.year() + 1, 1, 1),
    },
    QuickDatePreset {
        label: "Christmas",
        rule: |today| ymd_or(today, today.year(), 12, 25),
    },
    QuickDatePreset {
        label: "End of Year",
        rule: |today| ymd_or(today, today.year(), 12, 31),
    },
];

// Presets only shift by at most a year around the current date, which is
// always representable; falling back to `today` keeps the rules total.
fn shift(today: NaiveDate, amount: i64, unit: TimeUnit) -> NaiveDate {
    add_time_to_date(today, amount, unit).unwrap_or(today)
}

fn ymd_or(today: NaiveDate, year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(today)
}

/// Resolves every preset against `today`.
pub fn resolve_presets(today: NaiveDate) -> Vec<ResolvedPreset> {
    QUICK_DATE_OPTIONS
        .iter()
        .map(|preset| ResolvedPreset {
            label: preset.label,
            date: format_date_to_string(preset.resolve(today)),
        })
        .collect()
}

/// Resolves every preset against the local clock.
///
/// Each preset reads the clock on its own, so two presets evaluated across
/// midnight can disagree about which day "today" is.
pub fn resolve_presets_now() -> Vec<ResolvedPreset> {
    QUICK_DATE_OPTIONS
        .iter()
        .map(|preset| ResolvedPreset {
            label: preset.label,
            date: format_date_to_string(preset.resolve(Local::now().date_naive())),
        })
        .collect()
}
