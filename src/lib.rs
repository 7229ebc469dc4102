//! Casual Tutor - Conversational learning API
//!
//! An HTTP front-end for a prompt-chain tutor: intro messages, free-form
//! chat, five-question quizzes with feedback and grading, and post-quiz
//! continuations, all threaded through one in-process tutor session.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
