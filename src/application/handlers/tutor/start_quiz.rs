//! StartQuizHandler - Generate a five-question quiz from the conversation

use std::sync::Arc;

use crate::domain::tutor::Subject;
use crate::ports::{ChainError, ChainProvider, SessionStore, SessionStoreError};

/// Command to generate a quiz
#[derive(Debug, Clone)]
pub struct StartQuizCommand {
    pub subject: Subject,
}

/// Result of quiz generation
#[derive(Debug, Clone)]
pub struct StartQuizResult {
    pub quiz: String,
}

/// Error type for quiz generation
#[derive(Debug, thiserror::Error)]
pub enum StartQuizError {
    #[error("{0}")]
    Chain(#[from] ChainError),

    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),
}

/// Handler for quiz generation
pub struct StartQuizHandler<P: ?Sized + ChainProvider> {
    chains: Arc<P>,
    store: Arc<dyn SessionStore>,
}

impl<P: ?Sized + ChainProvider> StartQuizHandler<P> {
    pub fn new(chains: Arc<P>, store: Arc<dyn SessionStore>) -> Self {
        Self { chains, store }
    }

    pub async fn handle(&self, cmd: StartQuizCommand) -> Result<StartQuizResult, StartQuizError> {
        let mut session = self.store.load().await?;

        let quiz = self
            .chains
            .generate_quiz(&cmd.subject, &session.transcript())
            .await?;

        // Unconditional overwrite: a prior ungraded quiz is discarded
        session.issue_quiz(quiz.clone());
        self.store.save(session).await?;

        Ok(StartQuizResult { quiz })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::chains::{ChainCall, MockChainProvider};
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::tutor::TutorSession;

    fn subject() -> Subject {
        Subject::new("Astronomy").unwrap()
    }

    #[tokio::test]
    async fn start_quiz_stores_the_generated_quiz() {
        let chains = Arc::new(MockChainProvider::new().with_response("1. What is a star?"));
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartQuizHandler::new(chains, store.clone());

        let result = handler
            .handle(StartQuizCommand { subject: subject() })
            .await
            .unwrap();

        assert_eq!(result.quiz, "1. What is a star?");
        let session = store.load().await.unwrap();
        assert_eq!(session.quiz().quiz_text(), "1. What is a star?");
    }

    #[tokio::test]
    async fn start_quiz_passes_the_transcript_to_the_chain() {
        let chains = Arc::new(MockChainProvider::new().with_response("quiz"));
        let mut session = TutorSession::new();
        session.record_exchange("what is a star?", "A ball of plasma.");
        let store = Arc::new(InMemorySessionStore::with_session(session));
        let handler = StartQuizHandler::new(chains.clone(), store);

        handler
            .handle(StartQuizCommand { subject: subject() })
            .await
            .unwrap();

        assert_eq!(
            chains.get_calls()[0],
            ChainCall::Quiz {
                subject: "Astronomy".to_string(),
                prior_history: "Human: what is a star?\nAI: A ball of plasma.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn second_start_overwrites_the_first_quiz() {
        let chains = Arc::new(
            MockChainProvider::new()
                .with_response("first quiz")
                .with_response("second quiz"),
        );
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartQuizHandler::new(chains, store.clone());

        handler
            .handle(StartQuizCommand { subject: subject() })
            .await
            .unwrap();
        handler
            .handle(StartQuizCommand { subject: subject() })
            .await
            .unwrap();

        let session = store.load().await.unwrap();
        assert_eq!(session.quiz().quiz_text(), "second quiz");
    }

    #[tokio::test]
    async fn quiz_generation_does_not_grow_history() {
        let chains = Arc::new(MockChainProvider::new().with_response("quiz"));
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartQuizHandler::new(chains, store.clone());

        handler
            .handle(StartQuizCommand { subject: subject() })
            .await
            .unwrap();

        let session = store.load().await.unwrap();
        assert!(session.history().is_empty());
    }
}
