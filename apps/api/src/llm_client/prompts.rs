// Cross-cutting prompt fragments shared by every service that calls the LLM.
// Each service defines its own prompts.rs alongside it.

/// Appended to every rewriting prompt: the model may rephrase, never invent.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Every claim in your output must come from the source text. \
    Do NOT invent employers, titles, dates, degrees, metrics or skills. \
    If the source does not support a detail, leave it out.";
