//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::tutor::{
    ClearMemoryCommand, ClearMemoryHandler, ContinueLessonCommand, ContinueLessonHandler,
    GetIntroCommand, GetIntroHandler, SendChatCommand, SendChatHandler, StartQuizCommand,
    StartQuizHandler, SubmitQuizCommand, SubmitQuizHandler,
};
