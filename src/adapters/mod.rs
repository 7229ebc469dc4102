//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `chains` - Chain provider implementations (OpenAI, mock)
//! - `session` - Session store implementations (in-memory)
//! - `http` - HTTP API surface

pub mod chains;
pub mod http;
pub mod session;
