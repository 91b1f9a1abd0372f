//! Axum route handler for the Roman numeral converter.

use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::ApiQuery;
use crate::roman::convert::{convert, RomanConversion};

#[derive(Debug, Deserialize)]
pub struct RomanQuery {
    pub value: String,
}

/// GET /api/v1/tools/roman?value=...
///
/// Digits convert to a numeral; anything else is read as a numeral.
pub async fn handle_roman(
    ApiQuery(params): ApiQuery<RomanQuery>,
) -> Result<Json<RomanConversion>, AppError> {
    Ok(Json(convert(&params.value)?))
}
