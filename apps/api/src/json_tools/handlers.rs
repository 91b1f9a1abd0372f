//! Axum route handlers for the JSON tools.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::json_tools::diff::{diff_json, JsonChange};
use crate::json_tools::format::{minify, pretty_print, validate, FormattedJson, JsonFormatMode, ValidationReport};
use crate::json_tools::parse_document;

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    pub input: String,
    #[serde(flatten)]
    pub mode: JsonFormatMode,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FormatResponse {
    Formatted(FormattedJson),
    Validated(ValidationReport),
}

#[derive(Debug, Deserialize)]
pub struct DiffRequest {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Serialize)]
pub struct DiffResponse {
    pub identical: bool,
    pub changes: Vec<JsonChange>,
}

/// POST /api/v1/tools/json/format
///
/// `mode` is `pretty` (optional `indent`), `minify` or `validate`.
pub async fn handle_format(
    ApiJson(request): ApiJson<FormatRequest>,
) -> Result<Json<FormatResponse>, AppError> {
    let response = match request.mode {
        JsonFormatMode::Pretty { indent } => {
            FormatResponse::Formatted(pretty_print(&request.input, indent)?)
        }
        JsonFormatMode::Minify => FormatResponse::Formatted(minify(&request.input)?),
        JsonFormatMode::Validate => FormatResponse::Validated(validate(&request.input)),
    };
    Ok(Json(response))
}

/// POST /api/v1/tools/json/diff
pub async fn handle_diff(
    ApiJson(request): ApiJson<DiffRequest>,
) -> Result<Json<DiffResponse>, AppError> {
    let left = parse_document("left", &request.left)?;
    let right = parse_document("right", &request.right)?;

    let changes = diff_json(&left, &right);
    Ok(Json(DiffResponse {
        identical: changes.is_empty(),
        changes,
    }))
}
