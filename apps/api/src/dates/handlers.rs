//! Axum route handlers for the date calculators.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::dates::calc::{
    add_time_to_date, calculate_business_days, calculate_date_difference, format_date_short,
    parse_local_date, weekday_info, DateDifference, TimeUnit, WeekdayInfo,
};
use crate::dates::format::{format_date, DateLocale};
use crate::dates::presets::{resolve_presets, resolve_presets_now, ResolvedPreset};
use crate::errors::AppError;
use crate::extract::ApiQuery;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct WeekdayQuery {
    pub date: String,
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WeekdayResponse {
    pub locale: &'static str,
    #[serde(flatten)]
    pub info: WeekdayInfo,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct DifferenceResponse {
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub difference: DateDifference,
}

#[derive(Debug, Deserialize)]
pub struct AddTimeQuery {
    pub date: String,
    pub amount: i64,
    pub unit: String,
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddTimeResponse {
    pub start: String,
    pub amount: i64,
    pub unit: TimeUnit,
    pub result: String,
    pub formatted: String,
}

#[derive(Debug, Serialize)]
pub struct BusinessDaysResponse {
    pub from: String,
    pub to: String,
    pub business_days: u32,
}

#[derive(Debug, Deserialize)]
pub struct PresetsQuery {
    /// Pins "today" for the presets; defaults to the server's local date.
    pub today: Option<String>,
}

/// Roughly 100 years. The business-day count walks every day in the range.
pub const MAX_BUSINESS_DAY_SPAN: i64 = 36_525;

fn resolve_locale(requested: Option<&str>, state: &AppState) -> Result<DateLocale, AppError> {
    match requested {
        Some(tag) => Ok(tag.parse::<DateLocale>()?),
        None => Ok(state.config.default_locale),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/dates/weekday
pub async fn handle_weekday(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<WeekdayQuery>,
) -> Result<Json<WeekdayResponse>, AppError> {
    let locale = resolve_locale(params.locale.as_deref(), &state)?;
    let date = parse_local_date(&params.date)?;

    Ok(Json(WeekdayResponse {
        locale: locale.tag(),
        info: weekday_info(date, locale),
    }))
}

/// GET /api/v1/dates/difference
pub async fn handle_difference(
    ApiQuery(params): ApiQuery<RangeQuery>,
) -> Result<Json<DifferenceResponse>, AppError> {
    let from = parse_local_date(&params.from)?;
    let to = parse_local_date(&params.to)?;

    Ok(Json(DifferenceResponse {
        from: format_date_short(from),
        to: format_date_short(to),
        difference: calculate_date_difference(from, to),
    }))
}

/// GET /api/v1/dates/add
///
/// Negative `amount` subtracts.
pub async fn handle_add_time(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<AddTimeQuery>,
) -> Result<Json<AddTimeResponse>, AppError> {
    let locale = resolve_locale(params.locale.as_deref(), &state)?;
    let start = parse_local_date(&params.date)?;
    let unit: TimeUnit = params.unit.parse()?;

    let result = add_time_to_date(start, params.amount, unit)?;

    Ok(Json(AddTimeResponse {
        start: format_date_short(start),
        amount: params.amount,
        unit,
        result: format_date_short(result),
        formatted: format_date(result, locale),
    }))
}

/// GET /api/v1/dates/business-days
///
/// Spans longer than [`MAX_BUSINESS_DAY_SPAN`] days are rejected.
pub async fn handle_business_days(
    ApiQuery(params): ApiQuery<RangeQuery>,
) -> Result<Json<BusinessDaysResponse>, AppError> {
    let from = parse_local_date(&params.from)?;
    let to = parse_local_date(&params.to)?;

    let span = to.signed_duration_since(from).num_days();
    if span > MAX_BUSINESS_DAY_SPAN {
        return Err(AppError::Validation(format!(
            "business-day range covers {span} days; the limit is {MAX_BUSINESS_DAY_SPAN}"
        )));
    }

    Ok(Json(BusinessDaysResponse {
        from: format_date_short(from),
        to: format_date_short(to),
        business_days: calculate_business_days(from, to),
    }))
}

/// GET /api/v1/dates/presets
pub async fn handle_presets(
    ApiQuery(params): ApiQuery<PresetsQuery>,
) -> Result<Json<Vec<ResolvedPreset>>, AppError> {
    let presets = match params.today.as_deref() {
        Some(today) => resolve_presets(parse_local_date(today)?),
        None => resolve_presets_now(),
    };
    Ok(Json(presets))
}
