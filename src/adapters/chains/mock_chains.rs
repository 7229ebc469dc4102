//! Mock Chain Provider for testing.
//!
//! Provides a configurable mock implementation of the ChainProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order across all operations
//! - Error injection for failure-path testing
//! - Call tracking with the arguments each chain received
//!
//! # Example
//!
//! ```ignore
//! let provider = MockChainProvider::new()
//!     .with_response("Welcome to Astronomy!")
//!     .with_response("1. What is a star?");
//!
//! let intro = provider.generate_intro(&subject).await?;
//! assert_eq!(intro, "Welcome to Astronomy!");
//! assert_eq!(provider.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::tutor::{QuizAnswers, Subject};
use crate::ports::{ChainError, ChainProvider};

/// Mock chain provider for testing.
///
/// Configurable to return specific responses or inject errors.
#[derive(Debug, Clone)]
pub struct MockChainProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockChainResponse>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<ChainCall>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockChainResponse {
    /// Return generated text.
    Success(String),
    /// Return an error.
    Error(MockChainError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockChainError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate a malformed backend response.
    Parse { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockChainError> for ChainError {
    fn from(err: MockChainError) -> Self {
        match err {
            MockChainError::RateLimited { retry_after_secs } => {
                ChainError::rate_limited(retry_after_secs)
            }
            MockChainError::Unavailable { message } => ChainError::unavailable(message),
            MockChainError::AuthenticationFailed => ChainError::AuthenticationFailed,
            MockChainError::Network { message } => ChainError::network(message),
            MockChainError::Parse { message } => ChainError::parse(message),
            MockChainError::Timeout { timeout_secs } => ChainError::Timeout { timeout_secs },
        }
    }
}

/// A recorded chain invocation and the arguments it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainCall {
    Intro {
        subject: String,
    },
    Quiz {
        subject: String,
        prior_history: String,
    },
    ChatReply {
        subject: String,
        user_message: String,
    },
    QuizFeedback {
        subject: String,
        prior_history: String,
        quiz: String,
        answers: Vec<String>,
    },
    QuizGrade {
        subject: String,
        feedback: String,
    },
    Continuation {
        subject: String,
        feedback: String,
        grade: String,
        prior_history: String,
    },
}

impl Default for MockChainProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChainProvider {
    /// Creates a new mock provider with no queued responses.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockChainResponse::Success(content.into()));
        drop(responses);
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockChainError) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockChainResponse::Error(error));
        drop(responses);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of chain calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<ChainCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Records a call, waits out any configured delay, and pops the next
    /// response.
    async fn respond(&self, call: ChainCall) -> Result<String, ChainError> {
        self.calls.lock().unwrap().push(call);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockChainResponse::Success("Mock chain output".to_string()));

        match next {
            MockChainResponse::Success(content) => Ok(content),
            MockChainResponse::Error(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl ChainProvider for MockChainProvider {
    async fn generate_intro(&self, subject: &Subject) -> Result<String, ChainError> {
        self.respond(ChainCall::Intro {
            subject: subject.to_string(),
        })
        .await
    }

    async fn generate_quiz(
        &self,
        subject: &Subject,
        prior_history: &str,
    ) -> Result<String, ChainError> {
        self.respond(ChainCall::Quiz {
            subject: subject.to_string(),
            prior_history: prior_history.to_string(),
        })
        .await
    }

    async fn generate_chat_reply(
        &self,
        subject: &Subject,
        user_message: &str,
    ) -> Result<String, ChainError> {
        self.respond(ChainCall::ChatReply {
            subject: subject.to_string(),
            user_message: user_message.to_string(),
        })
        .await
    }

    async fn generate_quiz_feedback(
        &self,
        subject: &Subject,
        prior_history: &str,
        quiz: &str,
        answers: &QuizAnswers,
    ) -> Result<String, ChainError> {
        self.respond(ChainCall::QuizFeedback {
            subject: subject.to_string(),
            prior_history: prior_history.to_string(),
            quiz: quiz.to_string(),
            answers: answers.as_slice().to_vec(),
        })
        .await
    }

    async fn generate_quiz_grade(
        &self,
        subject: &Subject,
        feedback: &str,
    ) -> Result<String, ChainError> {
        self.respond(ChainCall::QuizGrade {
            subject: subject.to_string(),
            feedback: feedback.to_string(),
        })
        .await
    }

    async fn generate_continuation(
        &self,
        subject: &Subject,
        feedback: &str,
        grade: &str,
        prior_history: &str,
    ) -> Result<String, ChainError> {
        self.respond(ChainCall::Continuation {
            subject: subject.to_string(),
            feedback: feedback.to_string(),
            grade: grade.to_string(),
            prior_history: prior_history.to_string(),
        })
        .await
    }
}
