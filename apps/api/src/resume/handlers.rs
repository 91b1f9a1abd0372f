//! Axum route handlers for the resume wizard.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::resume::converter::{convert_document, ConvertResponse};
use crate::resume::wizard::{WizardDraft, WizardStep};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardAction {
    Next,
    Back,
}

#[derive(Debug, Deserialize)]
pub struct WizardRequest {
    pub action: WizardAction,
    pub draft: WizardDraft,
}

#[derive(Debug, Serialize)]
pub struct WizardResponse {
    pub draft: WizardDraft,
    pub step_index: usize,
    pub total_steps: usize,
    pub title: &'static str,
    pub complete: bool,
}

impl From<WizardDraft> for WizardResponse {
    fn from(draft: WizardDraft) -> Self {
        WizardResponse {
            step_index: draft.step.index(),
            total_steps: WizardStep::ALL.len(),
            title: draft.step.title(),
            complete: draft.is_complete(),
            draft,
        }
    }
}

/// POST /api/v1/resume/wizard
///
/// Moves the posted draft one step forward (validating the current step) or back.
pub async fn handle_wizard(
    ApiJson(request): ApiJson<WizardRequest>,
) -> Result<Json<WizardResponse>, AppError> {
    let draft = match request.action {
        WizardAction::Next => request.draft.advance()?,
        WizardAction::Back => request.draft.back(),
    };
    Ok(Json(draft.into()))
}

/// POST /api/v1/resume/convert
///
/// Accepts a draft on the review step and returns the rewritten document.
pub async fn handle_convert(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<WizardDraft>,
) -> Result<Json<ConvertResponse>, AppError> {
    let request = draft.into_request()?;
    let response = convert_document(&state.llm, &request).await?;
    Ok(Json(response))
}
