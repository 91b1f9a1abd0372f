//! Converter — turns a completed wizard draft into a rewritten Markdown document.
//! All LLM calls go through llm_client.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::GROUNDING_INSTRUCTION;
use crate::llm_client::{strip_code_fences, LlmClient};
use crate::resume::prompts::{CONVERT_PROMPT_TEMPLATE, CONVERT_SYSTEM, JOB_DESCRIPTION_BLOCK};
use crate::resume::wizard::{ConvertRequest, DocumentKind};

#[derive(Debug, Clone, Serialize)]
pub struct ConvertResponse {
    pub document_kind: DocumentKind,
    pub markdown: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Fills the conversion template for `request`.
pub fn build_prompt(request: &ConvertRequest) -> String {
    let job_description_block = match &request.job_description {
        Some(jd) => fill_template(JOB_DESCRIPTION_BLOCK, &[("job_description", jd)]),
        None => String::new(),
    };
    let kind = request.document_kind.label();
    let kind_upper = kind.to_uppercase();

    let prompt = fill_template(
        CONVERT_PROMPT_TEMPLATE,
        &[
            ("document_kind_upper", &kind_upper),
            ("document_kind", kind),
            ("target_role", &request.target_role),
            ("tone_guidance", request.tone.guidance()),
            ("job_description_block", &job_description_block),
            ("source_text", &request.source_text),
        ],
    );

    format!("{prompt}\n{GROUNDING_INSTRUCTION}")
}

/// Replaces each `{name}` in `template` with its value in one left-to-right
/// pass. Inserted values are never scanned again, and unknown names are
/// copied through unchanged.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match filled {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

pub async fn convert_document(
    llm: &LlmClient,
    request: &ConvertRequest,
) -> Result<ConvertResponse, AppError> {
    info!(
        "Converting {} for role '{}' ({} chars, tone {:?})",
        request.document_kind.label(),
        request.target_role,
        request.source_text.chars().count(),
        request.tone
    );

    let prompt = build_prompt(request);
    let response = llm
        .call(&prompt, CONVERT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("document conversion failed: {e}")))?;

    let markdown = response
        .text()
        .map(strip_code_fences)
        .map(str::to_string)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::Llm("model returned no text".to_string()))?;

    Ok(ConvertResponse {
        document_kind: request.document_kind,
        markdown,
        input_tokens: response.usage.input_tokens,
        output_tokens: response.usage.output_tokens,
    })
}
