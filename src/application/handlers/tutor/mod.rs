//! Tutoring operation handlers.
//!
//! One handler per HTTP operation, each following the same shape: load the
//! session, call the chain, record the outcome, save the session.

mod clear_memory;
mod continue_lesson;
mod get_intro;
mod send_chat;
mod start_quiz;
mod submit_quiz;

pub use clear_memory::{
    ClearMemoryCommand, ClearMemoryError, ClearMemoryHandler, ClearMemoryResult,
};
pub use continue_lesson::{
    ContinueLessonCommand, ContinueLessonError, ContinueLessonHandler, ContinueLessonResult,
};
pub use get_intro::{GetIntroCommand, GetIntroError, GetIntroHandler, GetIntroResult};
pub use send_chat::{SendChatCommand, SendChatError, SendChatHandler, SendChatResult};
pub use start_quiz::{StartQuizCommand, StartQuizError, StartQuizHandler, StartQuizResult};
pub use submit_quiz::{SubmitQuizCommand, SubmitQuizError, SubmitQuizHandler, SubmitQuizResult};
