//! HTTP adapter for the tutoring API.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatRequest, MessageResponse, QuizResponse, QuizResultResponse, SubjectQuery,
    SubmitQuizRequest,
};
pub use handlers::{ApiError, TutorAppState};
pub use routes::{app, tutor_router};
