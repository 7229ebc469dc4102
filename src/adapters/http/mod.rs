//! HTTP adapters - REST API implementations.

pub mod tutor;

// Re-export key types for convenience
pub use tutor::{app, tutor_router, TutorAppState};
