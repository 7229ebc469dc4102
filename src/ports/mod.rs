//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ChainProvider` - Prompt-chain text generation backing every tutoring operation
//! - `SessionStore` - Ownership and lifecycle of the process-wide tutor session

mod chain_provider;
mod session_store;

pub use chain_provider::{ChainError, ChainProvider};
pub use session_store::{SessionStore, SessionStoreError};
