//! Query and JSON extractors whose rejections render as `AppError`.
//!
//! axum's own `Query` and `Json` reject with a plain-text body. These wrappers
//! run the same extraction and route any rejection through the JSON error
//! envelope instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
