//! Session Store Port - Interface for owning the tutor session.
//!
//! The server keeps one logical session per process. This port owns its
//! lifecycle and concurrency control so handlers follow a plain
//! load / mutate / save sequence and never touch shared state directly.

use async_trait::async_trait;

use crate::domain::tutor::TutorSession;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Port for loading, saving, and resetting the tutor session
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the current session
    ///
    /// # Returns
    /// A snapshot of the session; mutations only take effect through [`save`](Self::save)
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the backend fails
    async fn load(&self) -> Result<TutorSession, SessionStoreError>;

    /// Save the session, replacing the stored one
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the backend fails
    async fn save(&self, session: TutorSession) -> Result<(), SessionStoreError>;

    /// Reset to a fresh session and return it
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the backend fails
    async fn clear(&self) -> Result<TutorSession, SessionStoreError>;
}
