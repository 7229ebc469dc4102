//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `tutor` - Tutoring session aggregate, conversation history, and quiz cycle

pub mod tutor;
