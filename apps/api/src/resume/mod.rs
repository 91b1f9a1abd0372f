// Resume / cover-letter converter: a five-step wizard whose final step sends
// the draft to the LLM and returns the rewritten document as Markdown.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod converter;
pub mod handlers;
pub mod prompts;
pub mod wizard;
