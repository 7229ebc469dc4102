//! HTTP handlers for the tutoring endpoints
//!
//! These handlers connect Axum routes to the application layer command
//! handlers. Error bodies are plain text so clients see the documented
//! messages directly.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::tutor::{
    ClearMemoryCommand, ClearMemoryError, ClearMemoryHandler, ContinueLessonCommand,
    ContinueLessonError, ContinueLessonHandler, GetIntroCommand, GetIntroError, GetIntroHandler,
    SendChatCommand, SendChatError, SendChatHandler, StartQuizCommand, StartQuizError,
    StartQuizHandler, SubmitQuizCommand, SubmitQuizError, SubmitQuizHandler,
};
use crate::config::SubjectResolution;
use crate::domain::tutor::{QuizAnswers, Subject};
use crate::ports::{ChainProvider, SessionStore};

use super::dto::{
    ChatRequest, MessageResponse, QuizResponse, QuizResultResponse, SubjectQuery,
    SubmitQuizRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct TutorAppState {
    pub chains: Arc<dyn ChainProvider>,
    pub store: Arc<dyn SessionStore>,
    pub default_subject: Subject,
    pub subject_resolution: SubjectResolution,
}

impl TutorAppState {
    pub fn new(
        chains: Arc<dyn ChainProvider>,
        store: Arc<dyn SessionStore>,
        default_subject: Subject,
        subject_resolution: SubjectResolution,
    ) -> Self {
        Self {
            chains,
            store,
            default_subject,
            subject_resolution,
        }
    }

    /// Resolve the subject for one request, per the configured strategy.
    ///
    /// An absent, empty, or whitespace-only query value falls back to the
    /// configured default.
    fn resolve_subject(&self, query: &SubjectQuery) -> Subject {
        match self.subject_resolution {
            SubjectResolution::Fixed => self.default_subject.clone(),
            SubjectResolution::Query => query
                .subject
                .as_deref()
                .and_then(|raw| Subject::new(raw).ok())
                .unwrap_or_else(|| self.default_subject.clone()),
        }
    }

    fn get_intro_handler(&self) -> GetIntroHandler<dyn ChainProvider> {
        GetIntroHandler::new(self.chains.clone(), self.store.clone())
    }

    fn start_quiz_handler(&self) -> StartQuizHandler<dyn ChainProvider> {
        StartQuizHandler::new(self.chains.clone(), self.store.clone())
    }

    fn send_chat_handler(&self) -> SendChatHandler<dyn ChainProvider> {
        SendChatHandler::new(self.chains.clone(), self.store.clone())
    }

    fn submit_quiz_handler(&self) -> SubmitQuizHandler<dyn ChainProvider> {
        SubmitQuizHandler::new(self.chains.clone(), self.store.clone())
    }

    fn continue_lesson_handler(&self) -> ContinueLessonHandler<dyn ChainProvider> {
        ContinueLessonHandler::new(self.chains.clone(), self.store.clone())
    }

    fn clear_memory_handler(&self) -> ClearMemoryHandler {
        ClearMemoryHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════════

/// HTTP-level error with a plain-text body
#[derive(Debug)]
pub enum ApiError {
    /// Request body was not valid JSON
    InvalidJson,
    /// Chat body carried no usable `message`
    MissingMessage,
    /// Submission body carried no usable `answers` list
    BadAnswers,
    /// Answers arrived before any quiz was issued
    NoQuizStarted,
    /// The chain backend failed
    Provider(String),
    /// Session store or state bookkeeping failed
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidJson => (
                StatusCode::BAD_REQUEST,
                "Invalid JSON in request body".to_string(),
            ),
            ApiError::MissingMessage => (
                StatusCode::BAD_REQUEST,
                "Missing 'message' in request body".to_string(),
            ),
            ApiError::BadAnswers => (
                StatusCode::BAD_REQUEST,
                "Expected 'answers' as a list of 5 answers".to_string(),
            ),
            ApiError::NoQuizStarted => {
                (StatusCode::CONFLICT, "No quiz has been started".to_string())
            }
            ApiError::Provider(message) => {
                tracing::error!(error = %message, "chain call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, body).into_response()
    }
}

impl From<GetIntroError> for ApiError {
    fn from(err: GetIntroError) -> Self {
        match err {
            GetIntroError::Chain(e) => ApiError::Provider(e.to_string()),
            GetIntroError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<StartQuizError> for ApiError {
    fn from(err: StartQuizError) -> Self {
        match err {
            StartQuizError::Chain(e) => ApiError::Provider(e.to_string()),
            StartQuizError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SendChatError> for ApiError {
    fn from(err: SendChatError) -> Self {
        match err {
            SendChatError::Chain(e) => ApiError::Provider(e.to_string()),
            SendChatError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SubmitQuizError> for ApiError {
    fn from(err: SubmitQuizError) -> Self {
        match err {
            SubmitQuizError::NoQuizIssued => ApiError::NoQuizStarted,
            SubmitQuizError::Chain(e) => ApiError::Provider(e.to_string()),
            SubmitQuizError::Store(e) => ApiError::Internal(e.to_string()),
            SubmitQuizError::QuizState(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ContinueLessonError> for ApiError {
    fn from(err: ContinueLessonError) -> Self {
        match err {
            ContinueLessonError::Chain(e) => ApiError::Provider(e.to_string()),
            ContinueLessonError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ClearMemoryError> for ApiError {
    fn from(err: ClearMemoryError) -> Self {
        match err {
            ClearMemoryError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Produce the introductory message
///
/// GET /intro
pub async fn get_intro(
    State(state): State<TutorAppState>,
    Query(query): Query<SubjectQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cmd = GetIntroCommand {
        subject: state.resolve_subject(&query),
    };

    let result = state.get_intro_handler().handle(cmd).await?;

    Ok(Json(MessageResponse {
        message: result.message,
    }))
}

/// Generate a five-question quiz
///
/// GET /quiz/start
pub async fn start_quiz(
    State(state): State<TutorAppState>,
    Query(query): Query<SubjectQuery>,
) -> Result<Json<QuizResponse>, ApiError> {
    let cmd = StartQuizCommand {
        subject: state.resolve_subject(&query),
    };

    let result = state.start_quiz_handler().handle(cmd).await?;

    Ok(Json(QuizResponse { quiz: result.quiz }))
}

/// Produce the post-quiz continuation message
///
/// GET /continue
pub async fn continue_lesson(
    State(state): State<TutorAppState>,
    Query(query): Query<SubjectQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cmd = ContinueLessonCommand {
        subject: state.resolve_subject(&query),
    };

    let result = state.continue_lesson_handler().handle(cmd).await?;

    Ok(Json(MessageResponse {
        message: result.message,
    }))
}

/// Produce a conversational reply
///
/// POST /chat
pub async fn send_chat(
    State(state): State<TutorAppState>,
    Query(query): Query<SubjectQuery>,
    body: String,
) -> Result<Json<MessageResponse>, ApiError> {
    let req: ChatRequest = serde_json::from_str(&body).map_err(|_| ApiError::InvalidJson)?;

    let message = match req.message {
        Some(message) if !message.trim().is_empty() => message,
        _ => return Err(ApiError::MissingMessage),
    };

    let cmd = SendChatCommand {
        subject: state.resolve_subject(&query),
        message,
    };

    let result = state.send_chat_handler().handle(cmd).await?;

    Ok(Json(MessageResponse {
        message: result.reply,
    }))
}

/// Grade a submitted quiz
///
/// POST /quiz/submit
pub async fn submit_quiz(
    State(state): State<TutorAppState>,
    Query(query): Query<SubjectQuery>,
    body: String,
) -> Result<Json<QuizResultResponse>, ApiError> {
    let req: SubmitQuizRequest = serde_json::from_str(&body).map_err(|_| ApiError::InvalidJson)?;

    let answers = req
        .answers
        .as_ref()
        .ok_or(ApiError::BadAnswers)
        .and_then(|value| QuizAnswers::from_json(value).map_err(|_| ApiError::BadAnswers))?;

    let cmd = SubmitQuizCommand {
        subject: state.resolve_subject(&query),
        answers,
    };

    let result = state.submit_quiz_handler().handle(cmd).await?;

    Ok(Json(QuizResultResponse {
        feedback: result.feedback,
        grade: result.grade,
    }))
}

/// Reset the conversation
///
/// POST /memory/clear
pub async fn clear_memory(
    State(state): State<TutorAppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let result = state.clear_memory_handler().handle(ClearMemoryCommand).await?;

    tracing::debug!(session_id = %result.session_id, "session cleared");

    Ok(Json(MessageResponse {
        message: "Memory cleared".to_string(),
    }))
}

/// Shared 404 for unknown routes and wrong methods on known paths
pub async fn endpoint_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Endpoint not found")
}
