// Technical screening: question generation from the candidate's tech stack
// and free-text answer scoring.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod prompts;
pub mod questions;
pub mod scoring;
