use std::sync::Arc;

use crate::intake::store::SessionStore;
use crate::records::RecordWriter;
use crate::screening::questions::QuestionGenerator;
use crate::screening::scoring::AnswerScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable screening backends. LLM-backed in production; tests swap in stubs.
    pub generator: Arc<dyn QuestionGenerator>,
    pub scorer: Arc<dyn AnswerScorer>,
    pub records: RecordWriter,
    pub sessions: SessionStore,
}
