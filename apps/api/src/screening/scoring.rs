//! Answer Scorer — asks the model for a 1–10 score of a free-text answer.

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::prompts::SCREENING_SYSTEM;
use crate::llm_client::LlmClient;
use crate::screening::prompts::SCORE_PROMPT_TEMPLATE;

/// Fixed fallback score when scoring cannot produce a usable number.
const DEFAULT_SCORE: u8 = 1;

/// The answer scorer seam. Total by contract: every call yields a score in
/// [1,10]; remote or parse failures degrade to the fixed default, never an
/// error. Carried in `AppState` as `Arc<dyn AnswerScorer>` so tests swap in
/// a deterministic stub.
#[async_trait]
pub trait AnswerScorer: Send + Sync {
    async fn score(&self, question: &str, answer: &str) -> u8;
}

/// LLM-backed scorer: one prompt, one call, numeric-token parse.
pub struct LlmAnswerScorer {
    llm: LlmClient,
}

impl LlmAnswerScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl AnswerScorer for LlmAnswerScorer {
    async fn score(&self, question: &str, answer: &str) -> u8 {
        let prompt = SCORE_PROMPT_TEMPLATE
            .replace("{question}", question)
            .replace("{answer}", answer);

        match self.llm.call_text(&prompt, SCREENING_SYSTEM).await {
            Ok(text) => parse_score(&text).unwrap_or(DEFAULT_SCORE),
            Err(e) => {
                warn!("answer scoring failed, defaulting to {DEFAULT_SCORE}: {e}");
                DEFAULT_SCORE
            }
        }
    }
}

/// Parses the leading numeric token before any `/` (models like to answer
/// "8/10") and clamps it to [1,10]. Non-numeric replies yield `None` and the
/// caller falls back to the default.
pub fn parse_score(text: &str) -> Option<u8> {
    let token = text.trim().split('/').next()?.trim();
    let value: i64 = token.parse().ok()?;
    Some(value.clamp(1, 10) as u8)
}
