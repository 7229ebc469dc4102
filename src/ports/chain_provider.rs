//! Chain Provider Port - Interface for prompt-chain text generation.
//!
//! This port abstracts the prompt-chain backend that produces all tutoring
//! content (intros, quizzes, chat replies, feedback, grades, continuations).
//! Each operation wraps one pre-built chain: prompt template plus LLM call.
//! The orchestration layer never sees prompts or providers, only text in and
//! text out.
//!
//! # Design
//!
//! - One method per chain; no generic completion surface leaks through
//! - Conversation context travels as a rendered transcript string
//! - No retries at this boundary; callers surface failures directly
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct CannedChains;
//!
//! #[async_trait]
//! impl ChainProvider for CannedChains {
//!     async fn generate_intro(&self, subject: &Subject) -> Result<String, ChainError> {
//!         Ok(format!("Welcome to {}!", subject))
//!     }
//!     // ... other methods
//! }
//! ```

use async_trait::async_trait;

use crate::domain::tutor::{QuizAnswers, Subject};

/// Port for prompt-chain text generation.
///
/// Implementations connect to an LLM backend (or canned responses in tests)
/// and run the per-operation prompt chain.
#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// Generate the opening message for a tutoring session.
    async fn generate_intro(&self, subject: &Subject) -> Result<String, ChainError>;

    /// Generate a five-question quiz grounded in the conversation so far.
    async fn generate_quiz(
        &self,
        subject: &Subject,
        prior_history: &str,
    ) -> Result<String, ChainError>;

    /// Generate a conversational reply to a learner message.
    async fn generate_chat_reply(
        &self,
        subject: &Subject,
        user_message: &str,
    ) -> Result<String, ChainError>;

    /// Generate feedback for a quiz submission.
    async fn generate_quiz_feedback(
        &self,
        subject: &Subject,
        prior_history: &str,
        quiz: &str,
        answers: &QuizAnswers,
    ) -> Result<String, ChainError>;

    /// Generate a grade from previously generated feedback.
    async fn generate_quiz_grade(
        &self,
        subject: &Subject,
        feedback: &str,
    ) -> Result<String, ChainError>;

    /// Generate the message that picks the lesson back up after a quiz.
    async fn generate_continuation(
        &self,
        subject: &Subject,
        feedback: &str,
        grade: &str,
        prior_history: &str,
    ) -> Result<String, ChainError>;
}

/// Chain provider errors.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// Rate limited by the backend.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Backend is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl ChainError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns true if this error is transient.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ChainError::RateLimited { .. }
                | ChainError::Unavailable { .. }
                | ChainError::Network(_)
                | ChainError::Timeout { .. }
        )
    }
}
