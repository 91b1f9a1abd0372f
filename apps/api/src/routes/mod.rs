pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dates::handlers as dates;
use crate::errors::AppError;
use crate::generators::handlers as generators;
use crate::ip_lookup::handlers as ip_lookup;
use crate::json_tools::handlers as json_tools;
use crate::resume::handlers as resume;
use crate::roman::handlers as roman;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such endpoint".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Date calculators
        .route("/api/v1/dates/weekday", get(dates::handle_weekday))
        .route("/api/v1/dates/difference", get(dates::handle_difference))
        .route("/api/v1/dates/add", get(dates::handle_add_time))
        .route(
            "/api/v1/dates/business-days",
            get(dates::handle_business_days),
        )
        .route("/api/v1/dates/presets", get(dates::handle_presets))
        // Converters and generators
        .route("/api/v1/tools/roman", get(roman::handle_roman))
        .route("/api/v1/tools/password", post(generators::handle_password))
        .route("/api/v1/tools/uuid", get(generators::handle_uuid))
        .route("/api/v1/tools/lorem", post(generators::handle_lorem))
        .route("/api/v1/tools/json/format", post(json_tools::handle_format))
        .route("/api/v1/tools/json/diff", post(json_tools::handle_diff))
        .route(
            "/api/v1/tools/ip-lookup",
            get(ip_lookup::handle_ip_lookup),
        )
        // Resume wizard
        .route("/api/v1/resume/wizard", post(resume::handle_wizard))
        .route("/api/v1/resume/convert", post(resume::handle_convert))
        .fallback(not_found)
        .with_state(state)
}
