//! Question Generator — turns the candidate's tech stack into a short quiz.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::prompts::SCREENING_SYSTEM;
use crate::llm_client::LlmClient;
use crate::screening::prompts::QUESTION_PROMPT_TEMPLATE;

/// The question generator seam. Carried in `AppState` as `Arc<dyn QuestionGenerator>`
/// so tests swap in a deterministic stub.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Returns the generated questions in asking order. The count is whatever
    /// the model produced — nothing enforces exactly 5.
    async fn generate(&self, tech_stack: &[String]) -> Result<Vec<String>, AppError>;
}

/// LLM-backed generator: one prompt, one call, line-split reply.
pub struct LlmQuestionGenerator {
    llm: LlmClient,
}

impl LlmQuestionGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(&self, tech_stack: &[String]) -> Result<Vec<String>, AppError> {
        let prompt = QUESTION_PROMPT_TEMPLATE.replace("{tech_stack}", &tech_stack.join(", "));
        let text = self
            .llm
            .call_text(&prompt, SCREENING_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("question generation failed: {e}")))?;
        Ok(split_question_lines(&text))
    }
}

/// Splits a model reply into questions: one per line, trimmed, blanks dropped.
pub fn split_question_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
