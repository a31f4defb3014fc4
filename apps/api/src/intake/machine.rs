//! Intake State Machine — the orchestrator of one candidate's session.
//!
//! A single linear progression of steps, each collecting one field or
//! triggering one side effect, advancing only on explicit confirmation.
//! Step handlers return a typed outcome (advance / stay / reset) and are
//! independent of the HTTP layer, so tests drive the whole flow with stub
//! screening backends.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::intake::validation::{is_valid_email, is_valid_mobile};
use crate::models::candidate::{CandidateProfile, Position, SessionSummary};
use crate::records::RecordWriter;
use crate::screening::questions::QuestionGenerator;
use crate::screening::scoring::AnswerScorer;

/// One discrete stage of the intake flow, numbered 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    FullName,
    Email,
    Phone,
    Experience,
    Position,
    Location,
    TechStack,
    Questions,
    Complete,
}

impl Step {
    pub fn index(self) -> u8 {
        match self {
            Step::FullName => 0,
            Step::Email => 1,
            Step::Phone => 2,
            Step::Experience => 3,
            Step::Position => 4,
            Step::Location => 5,
            Step::TechStack => 6,
            Step::Questions => 7,
            Step::Complete => 8,
        }
    }

    /// Out-of-range indices are unreachable via normal flow but are treated
    /// as "all done" rather than a panic.
    pub fn from_index(index: u8) -> Step {
        match index {
            0 => Step::FullName,
            1 => Step::Email,
            2 => Step::Phone,
            3 => Step::Experience,
            4 => Step::Position,
            5 => Step::Location,
            6 => Step::TechStack,
            7 => Step::Questions,
            _ => Step::Complete,
        }
    }
}

/// A user action against the current step.
#[derive(Debug, Clone)]
pub enum StepAction {
    /// The forward-confirmation control: one field value or one answer.
    Submit(String),
    /// Confirms the completed quiz at step 7 (queue empty).
    Finish,
    /// Global control: abandon the session and jump to the terminal step.
    EndChat,
    /// Terminal control: discard everything and begin at step 0 again.
    StartOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Advance,
    #[default]
    Stay,
    Reset,
}

/// Score feedback for one submitted answer.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerFeedback {
    pub question: String,
    pub score: u8,
}

/// The typed result of applying one action. The caller decides how to render
/// it — `error` is a re-prompt message, never an HTTP failure.
#[derive(Debug, Default)]
pub struct StepOutcome {
    pub transition: Transition,
    pub error: Option<String>,
    pub feedback: Option<AnswerFeedback>,
    pub summary: Option<SessionSummary>,
}

impl StepOutcome {
    fn advance() -> Self {
        Self {
            transition: Transition::Advance,
            ..Self::default()
        }
    }

    fn stay(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::default()
        }
    }
}

/// One candidate's session: current step, profile, pending questions and the
/// recorded answers. Lifecycle is process-bound — nothing here survives a
/// restart; the record file is the only durable artifact.
#[derive(Debug)]
pub struct IntakeSession {
    pub id: Uuid,
    pub step: Step,
    pub profile: CandidateProfile,
    pub questions: VecDeque<String>,
    pub answers: Vec<String>,
    pub scores: Vec<u8>,
    pub summary: Option<SessionSummary>,
    pub created_at: DateTime<Utc>,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            step: Step::FullName,
            profile: CandidateProfile::default(),
            questions: VecDeque::new(),
            answers: Vec::new(),
            scores: Vec::new(),
            summary: None,
            created_at: Utc::now(),
        }
    }

    /// The user-facing prompt for the current step.
    pub fn prompt(&self) -> String {
        match self.step {
            Step::FullName => {
                "Hello! I'm the TalentScout Hiring Assistant. Let's start with some basic \
                 information. What's your full name?"
                    .to_string()
            }
            Step::Email => "Great! What's your email address?".to_string(),
            Step::Phone => "Thanks! What's your phone number?".to_string(),
            Step::Experience => "How many years of experience do you have?".to_string(),
            Step::Position => format!(
                "What position are you applying for? Options: {}.",
                Position::labels().join(", ")
            ),
            Step::Location => "Where are you currently located?".to_string(),
            Step::TechStack => {
                "Please specify your tech stack, comma separated (Java, Python, Ruby etc)."
                    .to_string()
            }
            Step::Questions => match self.questions.front() {
                Some(question) => question.clone(),
                None => "All questions answered. Confirm to finish the test.".to_string(),
            },
            Step::Complete => "Thank you for participating!".to_string(),
        }
    }

    /// Reconstructs the session from scratch, keeping only the identifier.
    pub fn reset(&mut self) {
        let id = self.id;
        *self = Self::new();
        self.id = id;
    }

    pub async fn apply(
        &mut self,
        action: StepAction,
        generator: &dyn QuestionGenerator,
        scorer: &dyn AnswerScorer,
        records: &RecordWriter,
    ) -> StepOutcome {
        match action {
            StepAction::EndChat => self.end_chat(),
            StepAction::StartOver => self.start_over(),
            StepAction::Finish => self.finish(),
            StepAction::Submit(input) => self.submit(&input, generator, scorer, records).await,
        }
    }

    fn end_chat(&mut self) -> StepOutcome {
        if self.step == Step::Complete {
            return StepOutcome::default();
        }
        // Abandons any in-progress and pending data; no partial save.
        self.step = Step::Complete;
        StepOutcome::advance()
    }

    fn start_over(&mut self) -> StepOutcome {
        if self.step != Step::Complete {
            return StepOutcome::stay("You can start over once the session is complete.");
        }
        self.reset();
        StepOutcome {
            transition: Transition::Reset,
            ..StepOutcome::default()
        }
    }

    fn finish(&mut self) -> StepOutcome {
        let quiz_done =
            self.step == Step::Questions && self.questions.is_empty() && !self.scores.is_empty();
        if !quiz_done {
            return StepOutcome::stay("Nothing to finish yet.");
        }
        self.step = Step::Complete;
        StepOutcome::advance()
    }

    async fn submit(
        &mut self,
        input: &str,
        generator: &dyn QuestionGenerator,
        scorer: &dyn AnswerScorer,
        records: &RecordWriter,
    ) -> StepOutcome {
        match self.step {
            Step::FullName => {
                let name = input.trim();
                if name.is_empty() {
                    return StepOutcome::stay("Please enter your full name.");
                }
                self.profile.full_name = Some(name.to_string());
                self.advance()
            }
            Step::Email => {
                let email = input.trim();
                if !is_valid_email(email) {
                    return StepOutcome::stay("Please enter a valid email address.");
                }
                self.profile.email = Some(email.to_string());
                self.advance()
            }
            Step::Phone => {
                let phone = input.trim();
                if !is_valid_mobile(phone) {
                    return StepOutcome::stay(
                        "Please enter a valid mobile number starting with 6, 7, 8, or 9 \
                         with exactly 10 digits.",
                    );
                }
                self.profile.phone = Some(phone.to_string());
                self.advance()
            }
            Step::Experience => match input.trim().parse::<f64>() {
                Ok(years) if years.is_finite() && years >= 0.0 => {
                    self.profile.experience = Some(years);
                    self.advance()
                }
                _ => StepOutcome::stay("Please enter a non-negative number of years."),
            },
            Step::Position => match Position::parse(input) {
                Some(position) => {
                    self.profile.desired_position = Some(position);
                    self.advance()
                }
                None => StepOutcome::stay("Please choose one of the listed positions."),
            },
            Step::Location => {
                let location = input.trim();
                if location.is_empty() {
                    return StepOutcome::stay("Please tell us where you are currently located.");
                }
                self.profile.current_location = Some(location.to_string());
                self.advance()
            }
            Step::TechStack => self.submit_tech_stack(input, generator).await,
            Step::Questions => self.submit_answer(input, scorer, records).await,
            Step::Complete => {
                StepOutcome::stay("The session is complete. Start over to begin a new one.")
            }
        }
    }

    async fn submit_tech_stack(
        &mut self,
        input: &str,
        generator: &dyn QuestionGenerator,
    ) -> StepOutcome {
        let tags = parse_tech_stack(input);
        if tags.is_empty() {
            return StepOutcome::stay("Please provide a valid tech stack.");
        }

        match generator.generate(&tags).await {
            Ok(questions) if !questions.is_empty() => {
                self.questions.extend(questions);
                self.advance()
            }
            Ok(_) => StepOutcome::stay(
                "No questions could be generated from that tech stack. Please resubmit.",
            ),
            Err(e) => {
                warn!("question generation failed: {e}");
                StepOutcome::stay("Question generation failed. Please resubmit your tech stack.")
            }
        }
    }

    async fn submit_answer(
        &mut self,
        input: &str,
        scorer: &dyn AnswerScorer,
        records: &RecordWriter,
    ) -> StepOutcome {
        let Some(question) = self.questions.front().cloned() else {
            return StepOutcome::stay("All questions are answered. Confirm to finish the test.");
        };

        let answer = input.trim();
        if answer.is_empty() {
            return StepOutcome::stay("Please enter an answer.");
        }

        let score = scorer.score(&question, answer).await;
        self.answers.push(answer.to_string());
        self.scores.push(score);
        self.questions.pop_front();

        let mut outcome = StepOutcome {
            feedback: Some(AnswerFeedback { question, score }),
            ..StepOutcome::default()
        };

        if self.questions.is_empty() {
            // The record is written exactly once, when the queue empties
            let average_score = self.average_score();
            let summary = match records.save(&self.profile, average_score).await {
                Ok(path) => SessionSummary {
                    average_score,
                    saved_to: Some(path),
                    save_warning: None,
                },
                Err(e) => {
                    warn!("failed to save candidate record: {e}");
                    SessionSummary {
                        average_score,
                        saved_to: None,
                        save_warning: Some("Failed to save your details.".to_string()),
                    }
                }
            };
            self.summary = Some(summary.clone());
            outcome.summary = Some(summary);
        }

        outcome
    }

    fn advance(&mut self) -> StepOutcome {
        self.step = Step::from_index(self.step.index() + 1);
        StepOutcome::advance()
    }

    fn average_score(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().map(|&s| f64::from(s)).sum::<f64>() / self.scores.len() as f64
    }
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the comma-separated tech stack field into non-empty tags.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
