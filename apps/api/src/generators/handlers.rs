//! Axum route handlers for the password, UUID and lorem-ipsum generators.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiQuery};
use crate::generators::lorem::{generate_lorem, LoremOptions};
use crate::generators::password::{estimate_strength, generate_password, PasswordOptions, Strength};
use crate::generators::uuids::{generate_uuids, UuidFormat};

#[derive(Debug, Serialize)]
pub struct PasswordResponse {
    pub password: String,
    pub strength: Strength,
}

#[derive(Debug, Deserialize)]
pub struct UuidQuery {
    pub count: Option<usize>,
    #[serde(default)]
    pub format: UuidFormat,
}

#[derive(Debug, Serialize)]
pub struct UuidResponse {
    pub uuids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LoremResponse {
    pub paragraphs: Vec<String>,
}

/// POST /api/v1/tools/password
pub async fn handle_password(
    ApiJson(options): ApiJson<PasswordOptions>,
) -> Result<Json<PasswordResponse>, AppError> {
    let password = generate_password(&options, &mut rand::thread_rng())?;
    let strength = estimate_strength(&password);
    Ok(Json(PasswordResponse { password, strength }))
}

/// GET /api/v1/tools/uuid?count=N&format=hyphenated|simple|uppercase
pub async fn handle_uuid(
    ApiQuery(params): ApiQuery<UuidQuery>,
) -> Result<Json<UuidResponse>, AppError> {
    let uuids = generate_uuids(params.count.unwrap_or(1), params.format)?;
    Ok(Json(UuidResponse { uuids }))
}

/// POST /api/v1/tools/lorem
pub async fn handle_lorem(
    ApiJson(options): ApiJson<LoremOptions>,
) -> Result<Json<LoremResponse>, AppError> {
    let paragraphs = generate_lorem(&options, &mut rand::thread_rng())?;
    Ok(Json(LoremResponse { paragraphs }))
}
