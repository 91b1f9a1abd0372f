//! Date calculations behind the weekday, difference, add/subtract and business-day tools.
//!
//! Every function here is pure. Dates are `NaiveDate` values built from their
//! year/month/day components, so no timezone offset can shift a parsed date
//! across midnight.

use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::format::DateLocale;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("'{0}' is not a YYYY-MM-DD date")]
    Malformed(String),

    #[error("'{0}' is not a valid calendar date")]
    OutOfRange(String),

    #[error("unknown time unit '{0}' (expected days, weeks, months or years)")]
    UnknownUnit(String),
}

/// Unit accepted by [`add_time_to_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl FromStr for TimeUnit {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days" => Ok(TimeUnit::Days),
            "weeks" => Ok(TimeUnit::Weeks),
            "months" => Ok(TimeUnit::Months),
            "years" => Ok(TimeUnit::Years),
            other => Err(DateError::UnknownUnit(other.to_string())),
        }
    }
}

/// Whole-day distance between two dates plus an approximate breakdown.
///
/// The breakdown divides by 365-day years and 30-day months. It does not
/// follow real month lengths; only `total_days` is calendar-exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDifference {
    pub total_days: i64,
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

/// Calendar facts about a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayInfo {
    pub date: String,
    pub weekday: String,
    pub day_of_year: u32,
    pub week_of_year: u32,
    pub formatted: String,
}

/// Parses `YYYY-MM-DD` from its components.
///
/// The string must split on `-` into exactly three numeric parts. Signs are
/// rejected so `-2024-01-01` or `2024-+1-01` never parse. Impossible dates
/// such as `2023-02-30` are rejected as `OutOfRange` instead of rolling over.
pub fn parse_local_date(s: &str) -> Result<NaiveDate, DateError> {
    let malformed = || DateError::Malformed(s.to_string());

    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(malformed());
    }
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(malformed());
    }

    let year: i32 = parts[0].parse().map_err(|_| malformed())?;
    let month: u32 = parts[1].parse().map_err(|_| malformed())?;
    let day: u32 = parts[2].parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateError::OutOfRange(s.to_string()))
}

/// Renders `YYYY-MM-DD` with zero-padded month and day.
pub fn format_date_to_string(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Same output as [`format_date_to_string`]; kept for the short-label call sites.
pub fn format_date_short(date: NaiveDate) -> String {
    format_date_to_string(date)
}

pub fn get_weekday(date: NaiveDate, locale: DateLocale) -> String {
    locale.weekday_name(date)
}

/// 1-indexed day count from January 1 of the date's year, inclusive.
pub fn get_day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// ISO-8601 week number.
///
/// Moves the date to the Thursday of its Monday-based week and counts weeks
/// from January 1 of that Thursday's year, so week 1 always holds the year's
/// first Thursday.
pub fn get_week_of_year(date: NaiveDate) -> u32 {
    let offset = 4 - i64::from(date.weekday().number_from_monday());
    let thursday = if offset >= 0 {
        date.checked_add_days(Days::new(offset as u64))
    } else {
        date.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
    .unwrap_or(date);

    (thursday.ordinal() - 1) / 7 + 1
}

pub fn weekday_info(date: NaiveDate, locale: DateLocale) -> WeekdayInfo {
    WeekdayInfo {
        date: format_date_to_string(date),
        weekday: get_weekday(date, locale),
        day_of_year: get_day_of_year(date),
        week_of_year: get_week_of_year(date),
        formatted: locale.format_long(date),
    }
}

/// Absolute distance between two dates with the 365/30-day breakdown.
pub fn calculate_date_difference(a: NaiveDate, b: NaiveDate) -> DateDifference {
    let total_days = b.signed_duration_since(a).num_days().abs();

    DateDifference {
        total_days,
        years: total_days / 365,
        months: (total_days % 365) / 30,
        days: total_days % 30,
    }
}

/// Adds `amount` units to `date`; negative amounts subtract.
///
/// Month and year steps roll over instead of clamping: January 31 plus one
/// month is March 3 (March 2 in a leap year), and February 29 plus one year
/// is March 1.
pub fn add_time_to_date(
    date: NaiveDate,
    amount: i64,
    unit: TimeUnit,
) -> Result<NaiveDate, DateError> {
    let out_of_range = || {
        DateError::OutOfRange(format!(
            "{} {amount} {unit:?}",
            format_date_to_string(date)
        ))
    };

    match unit {
        TimeUnit::Days => shift_days(date, amount).ok_or_else(out_of_range),
        TimeUnit::Weeks => amount
            .checked_mul(7)
            .and_then(|days| shift_days(date, days))
            .ok_or_else(out_of_range),
        TimeUnit::Months => shift_months(date, amount).ok_or_else(out_of_range),
        TimeUnit::Years => amount
            .checked_mul(12)
            .and_then(|months| shift_months(date, months))
            .ok_or_else(out_of_range),
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Moves to the target month, then re-applies the day of month as an offset
/// from the 1st so that overflowing days spill into the following month.
fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let index = i64::from(date.year())
        .checked_mul(12)?
        .checked_add(i64::from(date.month0()))?
        .checked_add(months)?;

    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = index.rem_euclid(12) as u32 + 1;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_days(Days::new(u64::from(date.day() - 1)))
}

/// Counts Monday–Friday dates from `start` to `end`, both inclusive.
///
/// Walks every day in the span. Returns 0 when `start` is after `end`.
pub fn calculate_business_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut count = 0;
    let mut current = start;

    while current <= end {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_local_date(s).unwrap()
    }

    #[test]
    fn test_parse_builds_date_from_components() {
        let date = d("2024-06-15");
        assert_eq!((date.year(), date.month(), date.day()), (2024, 6, 15));
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        for input in ["", "2024-06", "2024-06-15-01", "2024/06/15", "2024-Jun-15", "2024--15"] {
            assert!(
                matches!(parse_local_date(input), Err(DateError::Malformed(_))),
                "{input} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(matches!(
            parse_local_date("2023-02-29"),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_local_date("2023-02-30"),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_local_date("2024-13-01"),
            Err(DateError::OutOfRange(_))
        ));
        assert!(parse_local_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_parse_and_format_round_trip() {
        for s in ["2024-01-01", "1999-12-31", "2024-02-29", "0001-01-01", "2100-07-04"] {
            assert_eq!(format_date_to_string(d(s)), s);
            assert_eq!(format_date_short(d(s)), s);
        }
    }

    #[test]
    fn test_format_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date_to_string(date), "2024-03-05");
    }

    #[test]
    fn test_new_year_2024_facts() {
        let date = d("2024-01-01");
        assert_eq!(get_weekday(date, DateLocale::EnUs), "Monday");
        assert_eq!(get_day_of_year(date), 1);
        assert_eq!(get_week_of_year(date), 1);
    }

    #[test]
    fn test_day_of_year_year_end() {
        assert_eq!(get_day_of_year(d("2023-12-31")), 365);
        assert_eq!(get_day_of_year(d("2024-12-31")), 366);
        assert_eq!(get_day_of_year(d("1900-12-31")), 365);
        assert_eq!(get_day_of_year(d("2000-12-31")), 366);
    }

    #[test]
    fn test_week_of_year_boundaries() {
        // 2021-01-01 is a Friday: it belongs to week 53 of 2020.
        assert_eq!(get_week_of_year(d("2021-01-01")), 53);
        // 2024-12-30 is a Monday whose Thursday falls in 2025.
        assert_eq!(get_week_of_year(d("2024-12-30")), 1);
        assert_eq!(get_week_of_year(d("2026-01-04")), 1);
        assert_eq!(get_week_of_year(d("2024-06-15")), 24);
    }

    #[test]
    fn test_week_of_year_agrees_with_chrono_iso_week() {
        let mut date = d("2019-12-01");
        let end = d("2027-02-01");
        while date <= end {
            assert_eq!(get_week_of_year(date), date.iso_week().week(), "{date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_difference_same_date_is_zero() {
        let diff = calculate_date_difference(d("2024-06-15"), d("2024-06-15"));
        assert_eq!(
            diff,
            DateDifference {
                total_days: 0,
                years: 0,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn test_difference_one_week() {
        let diff = calculate_date_difference(d("2024-01-01"), d("2024-01-08"));
        assert_eq!(
            diff,
            DateDifference {
                total_days: 7,
                years: 0,
                months: 0,
                days: 7
            }
        );
    }

    #[test]
    fn test_difference_is_symmetric() {
        let a = d("2019-03-14");
        let b = d("2024-11-02");
        assert_eq!(calculate_date_difference(a, b), calculate_date_difference(b, a));
    }

    #[test]
    fn test_difference_keeps_approximate_breakdown() {
        // 400 days: 1 "year" of 365, 35 left -> 1 "month", and days = 400 % 30.
        let diff = calculate_date_difference(d("2023-01-01"), d("2024-02-05"));
        assert_eq!(diff.total_days, 400);
        assert_eq!(diff.years, 1);
        assert_eq!(diff.months, 1);
        assert_eq!(diff.days, 10);
    }

    #[test]
    fn test_time_unit_from_str() {
        assert_eq!("weeks".parse::<TimeUnit>().unwrap(), TimeUnit::Weeks);
        assert!(matches!(
            "fortnights".parse::<TimeUnit>(),
            Err(DateError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_add_days_then_subtract_restores_date() {
        let date = d("2024-02-27");
        for n in [0, 1, 3, 30, 365, 10_000] {
            let forward = add_time_to_date(date, n, TimeUnit::Days).unwrap();
            assert_eq!(add_time_to_date(forward, -n, TimeUnit::Days).unwrap(), date);
        }
    }

    #[test]
    fn test_add_weeks() {
        assert_eq!(
            add_time_to_date(d("2024-01-01"), 2, TimeUnit::Weeks).unwrap(),
            d("2024-01-15")
        );
        assert_eq!(
            add_time_to_date(d("2024-01-01"), -1, TimeUnit::Weeks).unwrap(),
            d("2023-12-25")
        );
    }

    #[test]
    fn test_add_month_rolls_over_month_end() {
        assert_eq!(
            add_time_to_date(d("2023-01-31"), 1, TimeUnit::Months).unwrap(),
            d("2023-03-03")
        );
        assert_eq!(
            add_time_to_date(d("2024-01-31"), 1, TimeUnit::Months).unwrap(),
            d("2024-03-02")
        );
        assert_eq!(
            add_time_to_date(d("2024-03-31"), -1, TimeUnit::Months).unwrap(),
            d("2024-03-02")
        );
    }

    #[test]
    fn test_add_months_across_years() {
        assert_eq!(
            add_time_to_date(d("2024-11-15"), 3, TimeUnit::Months).unwrap(),
            d("2025-02-15")
        );
        assert_eq!(
            add_time_to_date(d("2024-02-15"), -14, TimeUnit::Months).unwrap(),
            d("2022-12-15")
        );
    }

    #[test]
    fn test_add_year_to_leap_day_rolls_to_march() {
        assert_eq!(
            add_time_to_date(d("2024-02-29"), 1, TimeUnit::Years).unwrap(),
            d("2025-03-01")
        );
        assert_eq!(
            add_time_to_date(d("2024-02-29"), 4, TimeUnit::Years).unwrap(),
            d("2028-02-29")
        );
    }

    #[test]
    fn test_add_out_of_range_is_error() {
        assert!(matches!(
            add_time_to_date(d("2024-01-01"), i64::MAX, TimeUnit::Days),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            add_time_to_date(d("2024-01-01"), i64::MAX, TimeUnit::Years),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_business_days_monday_to_sunday() {
        assert_eq!(calculate_business_days(d("2024-01-01"), d("2024-01-07")), 5);
    }

    #[test]
    fn test_business_days_any_full_week_is_five() {
        let mut start = d("2024-05-01");
        for _ in 0..7 {
            let end = add_time_to_date(start, 6, TimeUnit::Days).unwrap();
            assert_eq!(calculate_business_days(start, end), 5, "week from {start}");
            start = start.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_business_days_single_days_and_reversed_range() {
        assert_eq!(calculate_business_days(d("2024-01-06"), d("2024-01-06")), 0);
        assert_eq!(calculate_business_days(d("2024-01-08"), d("2024-01-08")), 1);
        assert_eq!(calculate_business_days(d("2024-01-08"), d("2024-01-01")), 0);
    }

    #[test]
    fn test_weekday_info_bundles_facts() {
        let info = weekday_info(d("2024-06-15"), DateLocale::EnUs);
        assert_eq!(info.date, "2024-06-15");
        assert_eq!(info.weekday, "Saturday");
        assert_eq!(info.day_of_year, 167);
        assert_eq!(info.week_of_year, 24);
        assert_eq!(info.formatted, "Saturday, June 15, 2024");
    }
}
