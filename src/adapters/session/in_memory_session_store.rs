//! In-Memory Session Store Adapter
//!
//! Holds the single process-wide tutor session behind an async `RwLock`.
//! Handlers load a snapshot, mutate it, and save it back; concurrent writers
//! are serialized by the lock, with last write winning.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::tutor::TutorSession;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for the tutor session
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    session: Arc<RwLock<TutorSession>>,
}

impl InMemorySessionStore {
    /// Create a store holding a fresh session
    pub fn new() -> Self {
        Self {
            session: Arc::new(RwLock::new(TutorSession::new())),
        }
    }

    /// Create a store seeded with an existing session (useful for tests)
    pub fn with_session(session: TutorSession) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<TutorSession, SessionStoreError> {
        let session = self.session.read().await;
        Ok(session.clone())
    }

    async fn save(&self, session: TutorSession) -> Result<(), SessionStoreError> {
        let mut stored = self.session.write().await;
        *stored = session;
        Ok(())
    }

    async fn clear(&self) -> Result<TutorSession, SessionStoreError> {
        let fresh = TutorSession::new();
        let mut stored = self.session.write().await;
        *stored = fresh.clone();
        Ok(fresh)
    }
}
