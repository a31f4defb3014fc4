use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::machine::{AnswerFeedback, IntakeSession, StepAction, Transition};
use crate::models::candidate::SessionSummary;
use crate::state::AppState;

/// Wire form of a user action. Step-level validation failures are reported
/// in-band via `StepReply.error` (the flow re-prompts) — only unknown
/// sessions and malformed requests become HTTP errors.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepActionDto {
    Submit { input: String },
    Finish,
    EndChat,
    StartOver,
}

impl From<StepActionDto> for StepAction {
    fn from(dto: StepActionDto) -> Self {
        match dto {
            StepActionDto::Submit { input } => StepAction::Submit(input),
            StepActionDto::Finish => StepAction::Finish,
            StepActionDto::EndChat => StepAction::EndChat,
            StepActionDto::StartOver => StepAction::StartOver,
        }
    }
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub step: u8,
    pub prompt: String,
    pub pending_questions: usize,
    pub answered: usize,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SessionSummary>,
}

impl SessionResponse {
    fn from_session(session: &IntakeSession) -> Self {
        Self {
            session_id: session.id,
            step: session.step.index(),
            prompt: session.prompt(),
            pending_questions: session.questions.len(),
            answered: session.answers.len(),
            created_at: session.created_at,
            summary: session.summary.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct StepReply {
    pub session_id: Uuid,
    pub step: u8,
    pub prompt: String,
    pub transition: Transition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<AnswerFeedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SessionSummary>,
}

/// POST /api/v1/intake/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let handle = state.sessions.create().await;
    let session = handle.lock().await;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::from_session(&session)),
    ))
}

/// GET /api/v1/intake/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    let session = handle.lock().await;
    Ok(Json(SessionResponse::from_session(&session)))
}

/// POST /api/v1/intake/sessions/:id/events
pub async fn handle_session_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<StepActionDto>,
) -> Result<Json<StepReply>, AppError> {
    let handle = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    let mut session = handle.lock().await;
    let outcome = session
        .apply(
            action.into(),
            state.generator.as_ref(),
            state.scorer.as_ref(),
            &state.records,
        )
        .await;

    Ok(Json(StepReply {
        session_id: session.id,
        step: session.step.index(),
        prompt: session.prompt(),
        transition: outcome.transition,
        error: outcome.error,
        feedback: outcome.feedback,
        summary: outcome.summary,
    }))
}
