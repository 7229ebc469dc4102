//! ClearMemoryHandler - Reset the tutor session to a blank state

use std::sync::Arc;

use crate::domain::tutor::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to clear the session
#[derive(Debug, Clone)]
pub struct ClearMemoryCommand;

/// Result of clearing the session
#[derive(Debug, Clone)]
pub struct ClearMemoryResult {
    pub session_id: SessionId,
}

/// Error type for clearing the session
#[derive(Debug, thiserror::Error)]
pub enum ClearMemoryError {
    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),
}

/// Handler for clearing the session
pub struct ClearMemoryHandler {
    store: Arc<dyn SessionStore>,
}

impl ClearMemoryHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        _cmd: ClearMemoryCommand,
    ) -> Result<ClearMemoryResult, ClearMemoryError> {
        let fresh = self.store.clear().await?;
        Ok(ClearMemoryResult {
            session_id: *fresh.id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::tutor::TutorSession;

    #[tokio::test]
    async fn clear_resets_history_and_quiz() {
        let mut session = TutorSession::new();
        session.record_exchange("hi", "hello");
        session.issue_quiz("Q1..Q5");
        let store = Arc::new(InMemorySessionStore::with_session(session));
        let handler = ClearMemoryHandler::new(store.clone());

        handler.handle(ClearMemoryCommand).await.unwrap();

        let reloaded = store.load().await.unwrap();
        assert!(reloaded.history().is_empty());
        assert!(!reloaded.quiz().has_quiz());
    }

    #[tokio::test]
    async fn clear_returns_the_fresh_session_id() {
        let store = Arc::new(InMemorySessionStore::new());
        let old_id = *store.load().await.unwrap().id();
        let handler = ClearMemoryHandler::new(store.clone());

        let result = handler.handle(ClearMemoryCommand).await.unwrap();

        assert_ne!(result.session_id, old_id);
        assert_eq!(*store.load().await.unwrap().id(), result.session_id);
    }
}
