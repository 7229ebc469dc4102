//! SubmitQuizHandler - Grade a quiz submission in two chain steps
//!
//! Feedback is generated first and persisted before grading starts, so a
//! grade failure leaves the recorded feedback in place rather than rolling
//! the submission back.

use std::sync::Arc;

use crate::domain::tutor::{QuizAnswers, QuizStateError, Subject};
use crate::ports::{ChainError, ChainProvider, SessionStore, SessionStoreError};

/// Command to grade a quiz submission
#[derive(Debug, Clone)]
pub struct SubmitQuizCommand {
    pub subject: Subject,
    pub answers: QuizAnswers,
}

/// Result of grading a submission
#[derive(Debug, Clone)]
pub struct SubmitQuizResult {
    pub feedback: String,
    pub grade: String,
}

/// Error type for grading a submission
#[derive(Debug, thiserror::Error)]
pub enum SubmitQuizError {
    /// Answers were submitted before any quiz was issued
    #[error("No quiz has been started")]
    NoQuizIssued,

    #[error("{0}")]
    Chain(#[from] ChainError),

    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),

    #[error("{0}")]
    QuizState(#[from] QuizStateError),
}

/// Handler for grading quiz submissions
pub struct SubmitQuizHandler<P: ?Sized + ChainProvider> {
    chains: Arc<P>,
    store: Arc<dyn SessionStore>,
}

impl<P: ?Sized + ChainProvider> SubmitQuizHandler<P> {
    pub fn new(chains: Arc<P>, store: Arc<dyn SessionStore>) -> Self {
        Self { chains, store }
    }

    pub async fn handle(
        &self,
        cmd: SubmitQuizCommand,
    ) -> Result<SubmitQuizResult, SubmitQuizError> {
        let mut session = self.store.load().await?;

        // Out-of-order submission is rejected before any chain call
        if !session.quiz().has_quiz() {
            return Err(SubmitQuizError::NoQuizIssued);
        }

        let transcript = session.transcript();
        let quiz = session.quiz().quiz_text().to_string();

        let feedback = self
            .chains
            .generate_quiz_feedback(&cmd.subject, &transcript, &quiz, &cmd.answers)
            .await?;
        session.record_quiz_feedback(feedback.clone())?;
        // Persist now: the submission must survive a grading failure
        self.store.save(session.clone()).await?;

        let grade = self
            .chains
            .generate_quiz_grade(&cmd.subject, &feedback)
            .await?;
        session.record_quiz_grade(grade.clone())?;
        self.store.save(session).await?;

        Ok(SubmitQuizResult { feedback, grade })
    }
}
