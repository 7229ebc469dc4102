//! Route definitions for the tutoring endpoints

use std::time::Duration;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    clear_memory, continue_lesson, endpoint_not_found, get_intro, send_chat, start_quiz,
    submit_quiz, TutorAppState,
};

/// Create the tutoring router with all endpoints
///
/// # Endpoints
///
/// - `GET /intro` - Introductory message
/// - `GET /quiz/start` - Generate a 5-question quiz
/// - `GET /continue` - Post-quiz continuation message
/// - `POST /chat` - Conversational reply
/// - `POST /quiz/submit` - Grade a submission
/// - `POST /memory/clear` - Reset the conversation
///
/// A wrong method on a known path falls through to the same plain-text 404
/// as an unknown path.
pub fn tutor_router() -> Router<TutorAppState> {
    Router::new()
        .route("/intro", get(get_intro).fallback(endpoint_not_found))
        .route("/quiz/start", get(start_quiz).fallback(endpoint_not_found))
        .route(
            "/continue",
            get(continue_lesson).fallback(endpoint_not_found),
        )
        .route("/chat", post(send_chat).fallback(endpoint_not_found))
        .route(
            "/quiz/submit",
            post(submit_quiz).fallback(endpoint_not_found),
        )
        .route(
            "/memory/clear",
            post(clear_memory).fallback(endpoint_not_found),
        )
        .fallback(endpoint_not_found)
}

/// Assemble the full application: routes, CORS, tracing, request timeout
pub fn app(state: TutorAppState, request_timeout: Duration) -> Router {
    tutor_router()
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Permissive CORS: any origin, GET/POST/OPTIONS, Content-Type
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
