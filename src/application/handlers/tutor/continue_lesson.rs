//! ContinueLessonHandler - Pick the lesson back up after a quiz

use std::sync::Arc;

use crate::domain::tutor::Subject;
use crate::ports::{ChainError, ChainProvider, SessionStore, SessionStoreError};

/// Command to produce the post-quiz continuation message
#[derive(Debug, Clone)]
pub struct ContinueLessonCommand {
    pub subject: Subject,
}

/// Result of the continuation operation
#[derive(Debug, Clone)]
pub struct ContinueLessonResult {
    pub message: String,
}

/// Error type for the continuation operation
#[derive(Debug, thiserror::Error)]
pub enum ContinueLessonError {
    #[error("{0}")]
    Chain(#[from] ChainError),

    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),
}

/// Handler for the continuation operation
pub struct ContinueLessonHandler<P: ?Sized + ChainProvider> {
    chains: Arc<P>,
    store: Arc<dyn SessionStore>,
}

impl<P: ?Sized + ChainProvider> ContinueLessonHandler<P> {
    pub fn new(chains: Arc<P>, store: Arc<dyn SessionStore>) -> Self {
        Self { chains, store }
    }

    pub async fn handle(
        &self,
        cmd: ContinueLessonCommand,
    ) -> Result<ContinueLessonResult, ContinueLessonError> {
        let mut session = self.store.load().await?;

        // Feedback and grade render as empty strings when no quiz was ever
        // submitted; the chain handles that case
        let message = self
            .chains
            .generate_continuation(
                &cmd.subject,
                session.quiz().feedback(),
                session.quiz().grade(),
                &session.transcript(),
            )
            .await?;

        session.record_tutor_message(message.clone());
        self.store.save(session).await?;

        Ok(ContinueLessonResult { message })
    }
}
