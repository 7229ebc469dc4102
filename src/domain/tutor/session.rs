//! Tutor session aggregate.
//!
//! One session holds the whole conversational state for a learner: the
//! accumulated history and the quiz cycle. The server keeps a single
//! process-wide session; it lives until cleared or until the process exits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::errors::QuizStateError;
use super::history::ConversationHistory;
use super::quiz::QuizCycle;

/// Unique identifier for a tutor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a SessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tutor session aggregate.
///
/// # Invariants
///
/// - `history` only grows between resets
/// - `quiz` only changes through its state machine transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorSession {
    /// Unique identifier for this session.
    id: SessionId,

    /// When the session was created.
    started_at: DateTime<Utc>,

    /// Accumulated conversation turns.
    history: ConversationHistory,

    /// Current quiz cycle state.
    quiz: QuizCycle,
}

impl TutorSession {
    /// Creates a fresh session with empty history and no quiz.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            started_at: Utc::now(),
            history: ConversationHistory::new(),
            quiz: QuizCycle::NotStarted,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns when the session was created.
    pub fn started_at(&self) -> &DateTime<Utc> {
        &self.started_at
    }

    /// Returns the conversation history.
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Returns the quiz cycle state.
    pub fn quiz(&self) -> &QuizCycle {
        &self.quiz
    }

    /// Renders the history as a transcript for chain prompts.
    pub fn transcript(&self) -> String {
        self.history.transcript()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records a learner/tutor exchange into the history.
    pub fn record_exchange(&mut self, user_input: impl Into<String>, tutor_output: impl Into<String>) {
        self.history.record_turn(user_input, tutor_output);
    }

    /// Records a tutor-initiated message (intro, continuation) into the
    /// history with an empty user input.
    pub fn record_tutor_message(&mut self, tutor_output: impl Into<String>) {
        self.history.record_turn("", tutor_output);
    }

    /// Replaces the current quiz, discarding prior quiz progress.
    pub fn issue_quiz(&mut self, quiz: impl Into<String>) {
        self.quiz.issue(quiz);
    }

    /// Records feedback for a quiz submission.
    ///
    /// # Errors
    ///
    /// - `NotStarted` if no quiz was issued
    pub fn record_quiz_feedback(
        &mut self,
        feedback: impl Into<String>,
    ) -> Result<(), QuizStateError> {
        self.quiz.record_feedback(feedback)
    }

    /// Records the grade for the pending quiz submission.
    ///
    /// # Errors
    ///
    /// - `NoPendingSubmission` unless feedback was just recorded
    pub fn record_quiz_grade(&mut self, grade: impl Into<String>) -> Result<(), QuizStateError> {
        self.quiz.record_grade(grade)
    }
}

impl Default for TutorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_blank() {
        let session = TutorSession::new();
        assert!(session.history().is_empty());
        assert!(!session.quiz().has_quiz());
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let a = TutorSession::new();
        let b = TutorSession::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn record_exchange_grows_history() {
        let mut session = TutorSession::new();
        session.record_exchange("hi", "hello");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.transcript(), "Human: hi\nAI: hello");
    }

    #[test]
    fn record_tutor_message_uses_empty_user_input() {
        let mut session = TutorSession::new();
        session.record_tutor_message("Welcome!");
        assert_eq!(session.transcript(), "Human: \nAI: Welcome!");
    }

    #[test]
    fn quiz_lifecycle_flows_through_session() {
        let mut session = TutorSession::new();
        session.issue_quiz("five questions");
        session.record_quiz_feedback("F").unwrap();
        session.record_quiz_grade("G").unwrap();

        assert_eq!(session.quiz().quiz_text(), "five questions");
        assert_eq!(session.quiz().feedback(), "F");
        assert_eq!(session.quiz().grade(), "G");
    }

    #[test]
    fn quiz_feedback_without_quiz_fails() {
        let mut session = TutorSession::new();
        let result = session.record_quiz_feedback("F");
        assert_eq!(result, Err(QuizStateError::NotStarted));
    }
}
