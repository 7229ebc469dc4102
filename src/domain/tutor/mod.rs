//! Tutoring domain types.
//!
//! # Module Organization
//!
//! - `subject` - Topic value object
//! - `history` - Conversation history accumulator
//! - `quiz` - Quiz cycle state machine and answer container
//! - `session` - Tutor session aggregate
//! - `errors` - Domain error types

mod errors;
mod history;
mod quiz;
mod session;
mod subject;

pub use errors::{AnswersError, QuizStateError, SubjectError};
pub use history::{ConversationHistory, Turn};
pub use quiz::{QuizAnswers, QuizCycle, ANSWER_COUNT};
pub use session::{SessionId, TutorSession};
pub use subject::Subject;
