//! Chain Provider Adapters.
//!
//! Implementations of the ChainProvider port.
//!
//! ## Available Adapters
//!
//! - `MockChainProvider` - Configurable canned responses for testing
//! - `OpenAiChainProvider` - OpenAI chat completions backend

mod mock_chains;
mod openai_chains;
mod prompts;

pub use mock_chains::{ChainCall, MockChainError, MockChainProvider, MockChainResponse};
pub use openai_chains::{OpenAiChainConfig, OpenAiChainProvider};
