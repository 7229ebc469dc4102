//! GetIntroHandler - Produce the opening tutor message for a subject

use std::sync::Arc;

use crate::domain::tutor::Subject;
use crate::ports::{ChainError, ChainProvider, SessionStore, SessionStoreError};

/// Command to fetch the introductory message
#[derive(Debug, Clone)]
pub struct GetIntroCommand {
    pub subject: Subject,
}

/// Result of the intro operation
#[derive(Debug, Clone)]
pub struct GetIntroResult {
    pub message: String,
}

/// Error type for the intro operation
#[derive(Debug, thiserror::Error)]
pub enum GetIntroError {
    #[error("{0}")]
    Chain(#[from] ChainError),

    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),
}

/// Handler for the intro operation
pub struct GetIntroHandler<P: ?Sized + ChainProvider> {
    chains: Arc<P>,
    store: Arc<dyn SessionStore>,
}

impl<P: ?Sized + ChainProvider> GetIntroHandler<P> {
    pub fn new(chains: Arc<P>, store: Arc<dyn SessionStore>) -> Self {
        Self { chains, store }
    }

    pub async fn handle(&self, cmd: GetIntroCommand) -> Result<GetIntroResult, GetIntroError> {
        let mut session = self.store.load().await?;

        let message = self.chains.generate_intro(&cmd.subject).await?;

        // The intro opens the conversation, so the learner side of the turn
        // is empty
        session.record_tutor_message(message.clone());
        self.store.save(session).await?;

        Ok(GetIntroResult { message })
    }
}
