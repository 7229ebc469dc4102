//! HTTP DTOs for the tutoring endpoints
//!
//! Request fields are optional so that a well-formed body with a missing
//! field reaches the handler and produces the documented 400 message instead
//! of a generic deserialization error.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Optional subject override carried in the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectQuery {
    pub subject: Option<String>,
}

/// Body of POST /chat
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of POST /quiz/submit
///
/// `answers` stays a raw JSON value here; shape validation happens in the
/// domain so every malformed variant collapses to one documented message.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub answers: Option<serde_json::Value>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Envelope for intro, chat, and continue replies
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Envelope for a generated quiz
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub quiz: String,
}

/// Envelope for a graded submission
#[derive(Debug, Clone, Serialize)]
pub struct QuizResultResponse {
    pub feedback: String,
    pub grade: String,
}
