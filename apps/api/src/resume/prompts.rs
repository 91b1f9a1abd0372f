// Prompt constants for the resume / cover-letter converter.
// Reuses the cross-cutting fragments from llm_client::prompts.

/// System prompt for document rewriting. Output is Markdown, not JSON.
pub const CONVERT_SYSTEM: &str = "You are an experienced career coach and editor. \
    You rewrite resumes and cover letters so they target a specific role. \
    Respond with the rewritten document in Markdown only. \
    Do NOT wrap the document in code fences. \
    Do NOT add commentary before or after the document.";

/// Conversion prompt template. Replace `{document_kind}`, `{target_role}`,
/// `{tone_guidance}`, `{job_description_block}` and `{source_text}` before sending.
pub const CONVERT_PROMPT_TEMPLATE: &str = r#"Rewrite the following {document_kind} for the role of "{target_role}".

TONE:
{tone_guidance}

{job_description_block}STRUCTURE:
- Resume: a short summary, then Experience, Skills and Education sections as Markdown headings, bullets under each role.
- Cover letter: greeting, three to four short paragraphs, sign-off.

SOURCE {document_kind_upper}:
"""
{source_text}
"""
"#;

/// Inserted into the template only when the user supplied a job description.
pub const JOB_DESCRIPTION_BLOCK: &str = r#"JOB DESCRIPTION (align wording and emphasis with it):
"""
{job_description}
"""

"#;
