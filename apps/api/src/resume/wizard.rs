//! The five-step resume / cover-letter wizard.
//!
//! The draft lives on the client and is posted back on every step change.
//! Steps only move one at a time, and a step cannot be left forward while its
//! required fields are empty.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_SOURCE_CHARS: usize = 50;
pub const MAX_SOURCE_CHARS: usize = 20_000;
pub const MAX_JOB_DESCRIPTION_CHARS: usize = 20_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be at least {min} characters (got {given})")]
    TooShort {
        field: &'static str,
        min: usize,
        given: usize,
    },

    #[error("{field} must be at most {max} characters (got {given})")]
    TooLong {
        field: &'static str,
        max: usize,
        given: usize,
    },

    #[error("the wizard is already on its last step")]
    AlreadyComplete,

    #[error("the draft must reach the review step before converting (currently at {0:?})")]
    NotReviewed(WizardStep),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    DocumentType,
    SourceText,
    TargetRole,
    Tone,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::DocumentType,
        WizardStep::SourceText,
        WizardStep::TargetRole,
        WizardStep::Tone,
        WizardStep::Review,
    ];

    /// Zero-based position in [`WizardStep::ALL`].
    pub fn index(self) -> usize {
        match self {
            WizardStep::DocumentType => 0,
            WizardStep::SourceText => 1,
            WizardStep::TargetRole => 2,
            WizardStep::Tone => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::DocumentType => "Choose a document",
            WizardStep::SourceText => "Paste your current text",
            WizardStep::TargetRole => "Describe the target role",
            WizardStep::Tone => "Pick a tone",
            WizardStep::Review => "Review and convert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover letter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeTone {
    Professional,
    Confident,
    Friendly,
    Concise,
}

impl ResumeTone {
    /// Style guidance handed to the model for this tone.
    pub fn guidance(self) -> &'static str {
        match self {
            ResumeTone::Professional => {
                "Formal and polished. Neutral vocabulary, complete sentences, no slang."
            }
            ResumeTone::Confident => {
                "Assertive and results-first. Lead with outcomes and strong action verbs, \
                 but never overstate what the source text supports."
            }
            ResumeTone::Friendly => {
                "Warm and approachable while staying professional. Light personality is fine."
            }
            ResumeTone::Concise => {
                "Short and scannable. Trim filler words; prefer one-line bullets."
            }
        }
    }
}

/// Client-held wizard state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardDraft {
    pub step: WizardStep,
    pub document_kind: Option<DocumentKind>,
    pub source_text: String,
    pub target_role: String,
    pub job_description: Option<String>,
    pub tone: Option<ResumeTone>,
}

/// A fully validated draft, ready for the LLM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertRequest {
    pub document_kind: DocumentKind,
    pub source_text: String,
    pub target_role: String,
    pub job_description: Option<String>,
    pub tone: ResumeTone,
}

fn check_length(field: &'static str, text: &str, min: usize, max: usize) -> Result<(), WizardError> {
    let given = text.chars().count();
    if given == 0 {
        return Err(WizardError::MissingField(field));
    }
    if given < min {
        return Err(WizardError::TooShort { field, min, given });
    }
    if given > max {
        return Err(WizardError::TooLong { field, max, given });
    }
    Ok(())
}

impl WizardDraft {
    /// Checks the fields that `step` collects.
    pub fn validate_step(&self, step: WizardStep) -> Result<(), WizardError> {
        match step {
            WizardStep::DocumentType => self
                .document_kind
                .map(|_| ())
                .ok_or(WizardError::MissingField("document_kind")),
            WizardStep::SourceText => check_length(
                "source_text",
                self.source_text.trim(),
                MIN_SOURCE_CHARS,
                MAX_SOURCE_CHARS,
            ),
            WizardStep::TargetRole => {
                check_length("target_role", self.target_role.trim(), 1, 200)?;
                match self.job_description.as_deref().map(str::trim) {
                    Some(jd) if !jd.is_empty() => {
                        check_length("job_description", jd, 1, MAX_JOB_DESCRIPTION_CHARS)
                    }
                    _ => Ok(()),
                }
            }
            WizardStep::Tone => self
                .tone
                .map(|_| ())
                .ok_or(WizardError::MissingField("tone")),
            WizardStep::Review => Ok(()),
        }
    }

    /// Validates the current step and moves to the next one.
    pub fn advance(mut self) -> Result<Self, WizardError> {
        self.validate_step(self.step)?;
        self.step = self.step.next().ok_or(WizardError::AlreadyComplete)?;
        Ok(self)
    }

    /// Moves one step back; stays put on the first step.
    pub fn back(mut self) -> Self {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self
    }

    pub fn is_complete(&self) -> bool {
        self.step == WizardStep::Review
    }

    /// Re-validates every step and produces the request sent to the model.
    pub fn into_request(self) -> Result<ConvertRequest, WizardError> {
        if !self.is_complete() {
            return Err(WizardError::NotReviewed(self.step));
        }
        for step in WizardStep::ALL {
            self.validate_step(step)?;
        }

        let document_kind = self
            .document_kind
            .ok_or(WizardError::MissingField("document_kind"))?;
        let tone = self.tone.ok_or(WizardError::MissingField("tone"))?;
        let job_description = self
            .job_description
            .map(|jd| jd.trim().to_string())
            .filter(|jd| !jd.is_empty());

        Ok(ConvertRequest {
            document_kind,
            source_text: self.source_text.trim().to_string(),
            target_role: self.target_role.trim().to_string(),
            job_description,
            tone,
        })
    }
}
