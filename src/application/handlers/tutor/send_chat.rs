//! SendChatHandler - Produce a conversational reply to a learner message

use std::sync::Arc;

use crate::domain::tutor::Subject;
use crate::ports::{ChainError, ChainProvider, SessionStore, SessionStoreError};

/// Command to send a chat message
#[derive(Debug, Clone)]
pub struct SendChatCommand {
    pub subject: Subject,
    pub message: String,
}

/// Result of a chat exchange
#[derive(Debug, Clone)]
pub struct SendChatResult {
    pub reply: String,
}

/// Error type for chat exchanges
#[derive(Debug, thiserror::Error)]
pub enum SendChatError {
    #[error("{0}")]
    Chain(#[from] ChainError),

    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),
}

/// Handler for chat exchanges
pub struct SendChatHandler<P: ?Sized + ChainProvider> {
    chains: Arc<P>,
    store: Arc<dyn SessionStore>,
}

impl<P: ?Sized + ChainProvider> SendChatHandler<P> {
    pub fn new(chains: Arc<P>, store: Arc<dyn SessionStore>) -> Self {
        Self { chains, store }
    }

    pub async fn handle(&self, cmd: SendChatCommand) -> Result<SendChatResult, SendChatError> {
        let mut session = self.store.load().await?;

        let reply = self
            .chains
            .generate_chat_reply(&cmd.subject, &cmd.message)
            .await?;

        // Chat turns land in the history like every other tutor reply, so
        // later quizzes and continuations see them
        session.record_exchange(cmd.message, reply.clone());
        self.store.save(session).await?;

        Ok(SendChatResult { reply })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::chains::{ChainCall, MockChainError, MockChainProvider};
    use crate::adapters::session::InMemorySessionStore;

    fn subject() -> Subject {
        Subject::new("Astronomy").unwrap()
    }

    #[tokio::test]
    async fn chat_returns_the_chain_reply() {
        let chains = Arc::new(MockChainProvider::new().with_response("A nebula is a gas cloud."));
        let store = Arc::new(InMemorySessionStore::new());
        let handler = SendChatHandler::new(chains.clone(), store);

        let result = handler
            .handle(SendChatCommand {
                subject: subject(),
                message: "what is a nebula?".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.reply, "A nebula is a gas cloud.");
        assert_eq!(
            chains.get_calls()[0],
            ChainCall::ChatReply {
                subject: "Astronomy".to_string(),
                user_message: "what is a nebula?".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn chat_records_the_exchange() {
        let chains = Arc::new(MockChainProvider::new().with_response("A gas cloud."));
        let store = Arc::new(InMemorySessionStore::new());
        let handler = SendChatHandler::new(chains, store.clone());

        handler
            .handle(SendChatCommand {
                subject: subject(),
                message: "what is a nebula?".to_string(),
            })
            .await
            .unwrap();

        let session = store.load().await.unwrap();
        assert_eq!(
            session.transcript(),
            "Human: what is a nebula?\nAI: A gas cloud."
        );
    }

    #[tokio::test]
    async fn chat_failure_records_nothing() {
        let chains = Arc::new(MockChainProvider::new().with_error(MockChainError::Network {
            message: "connection reset".to_string(),
        }));
        let store = Arc::new(InMemorySessionStore::new());
        let handler = SendChatHandler::new(chains, store.clone());

        let result = handler
            .handle(SendChatCommand {
                subject: subject(),
                message: "hello".to_string(),
            })
            .await;

        assert!(matches!(result, Err(SendChatError::Chain(_))));
        let session = store.load().await.unwrap();
        assert!(session.history().is_empty());
    }
}
