//! OpenAI chain provider adapter.
//!
//! Runs every tutoring chain as a single OpenAI chat completion: the shared
//! tutor persona as the system message plus the operation's prompt as the
//! user message. Failures map onto the `ChainError` taxonomy; nothing is
//! retried here.
//!
//! # Example
//!
//! ```ignore
//! let config = OpenAiChainConfig::new("sk-...")
//!     .with_model("gpt-4-turbo")
//!     .with_base_url("https://api.openai.com/v1");
//! let provider = OpenAiChainProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::prompts;
use crate::domain::tutor::{QuizAnswers, Subject};
use crate::ports::{ChainError, ChainProvider};

/// Configuration for the OpenAI chain backend.
#[derive(Debug, Clone)]
pub struct OpenAiChainConfig {
    /// API key for authentication.
    api_key: Secret<String>,

    /// Model to use (e.g., "gpt-4-turbo", "gpt-3.5-turbo").
    pub model: String,

    /// Base URL for the API.
    pub base_url: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Completion token cap per chain call.
    pub max_tokens: u32,

    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAiChainConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the completion token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI-backed chain provider.
pub struct OpenAiChainProvider {
    config: OpenAiChainConfig,
    client: Client,
}

impl OpenAiChainProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: OpenAiChainConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Runs one chain prompt as a chat completion and returns the text.
    async fn run_chain(&self, chain: &'static str, prompt: String) -> Result<String, ChainError> {
        debug!(chain, model = %self.config.model, "running chain completion");

        let request = OpenAiRequest {
            model: self.config.model.clone(),
            messages: vec![
                OpenAiMessage {
                    role: "system".to_string(),
                    content: prompts::SYSTEM_PROMPT.to_string(),
                },
                OpenAiMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChainError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ChainError::network(format!("Connection failed: {}", e))
                } else {
                    ChainError::network(e.to_string())
                }
            })?;

        self.parse_response(response).await
    }

    /// Parses the API response status and body.
    async fn parse_response(&self, response: Response) -> Result<String, ChainError> {
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();

            return match status.as_u16() {
                401 => Err(ChainError::AuthenticationFailed),
                429 => Err(ChainError::rate_limited(Self::parse_retry_after(
                    &error_body,
                ))),
                400 => Err(ChainError::invalid_request(error_body)),
                500..=599 => Err(ChainError::unavailable(format!(
                    "Server error {}: {}",
                    status, error_body
                ))),
                _ => Err(ChainError::network(format!(
                    "Unexpected status {}: {}",
                    status, error_body
                ))),
            };
        }

        let completion: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| ChainError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChainError::parse("No choices in response"))?;

        Ok(choice.message.content)
    }

    /// Parses retry-after from error response.
    fn parse_retry_after(error_body: &str) -> u32 {
        // OpenAI includes retry-after in the error message sometimes
        // Default to 30 seconds if we can't parse
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(msg) = parsed.get("error").and_then(|e| e.get("message")) {
                if let Some(s) = msg.as_str() {
                    // Try to find "try again in Xs" pattern
                    if let Some(idx) = s.find("try again in ") {
                        let rest = &s[idx + 13..];
                        if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                            if let Ok(secs) = rest[..num_end].parse::<u32>() {
                                return secs;
                            }
                        }
                    }
                }
            }
        }
        30 // Default retry after
    }
}

#[async_trait]
impl ChainProvider for OpenAiChainProvider {
    async fn generate_intro(&self, subject: &Subject) -> Result<String, ChainError> {
        self.run_chain("intro", prompts::intro_prompt(subject)).await
    }

    async fn generate_quiz(
        &self,
        subject: &Subject,
        prior_history: &str,
    ) -> Result<String, ChainError> {
        self.run_chain("quiz", prompts::quiz_prompt(subject, prior_history))
            .await
    }

    async fn generate_chat_reply(
        &self,
        subject: &Subject,
        user_message: &str,
    ) -> Result<String, ChainError> {
        self.run_chain(
            "chat_reply",
            prompts::chat_reply_prompt(subject, user_message),
        )
        .await
    }

    async fn generate_quiz_feedback(
        &self,
        subject: &Subject,
        prior_history: &str,
        quiz: &str,
        answers: &QuizAnswers,
    ) -> Result<String, ChainError> {
        self.run_chain(
            "quiz_feedback",
            prompts::quiz_feedback_prompt(subject, prior_history, quiz, answers),
        )
        .await
    }

    async fn generate_quiz_grade(
        &self,
        subject: &Subject,
        feedback: &str,
    ) -> Result<String, ChainError> {
        self.run_chain(
            "quiz_grade",
            prompts::quiz_grade_prompt(subject, feedback),
        )
        .await
    }

    async fn generate_continuation(
        &self,
        subject: &Subject,
        feedback: &str,
        grade: &str,
        prior_history: &str,
    ) -> Result<String, ChainError> {
        self.run_chain(
            "continuation",
            prompts::continuation_prompt(subject, feedback, grade, prior_history),
        )
        .await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = OpenAiChainConfig::new("test-key")
            .with_model("gpt-4o")
            .with_base_url("https://custom.api.com")
            .with_temperature(0.2)
            .with_max_tokens(256)
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn config_defaults_are_sensible() {
        let config = OpenAiChainConfig::new("test-key");
        assert_eq!(config.model, "gpt-4-turbo");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn completions_url_joins_base() {
        let provider = OpenAiChainProvider::new(
            OpenAiChainConfig::new("test-key").with_base_url("https://api.openai.com/v1"),
        );
        assert_eq!(
            provider.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn request_serializes_expected_shape() {
        let request = OpenAiRequest {
            model: "gpt-4-turbo".to_string(),
            messages: vec![OpenAiMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            max_tokens: 512,
            temperature: 0.7,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4-turbo");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["max_tokens"], 512);
    }

    #[test]
    fn response_parses_first_choice() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Welcome to Astronomy!"}}
            ]
        }"#;
        let parsed: OpenAiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.choices[0].message.content,
            "Welcome to Astronomy!"
        );
    }

    #[test]
    fn parse_retry_after_reads_seconds() {
        let body = r#"{"error": {"message": "Rate limit reached, please try again in 7s."}}"#;
        assert_eq!(OpenAiChainProvider::parse_retry_after(body), 7);
    }

    #[test]
    fn parse_retry_after_defaults_to_thirty() {
        assert_eq!(OpenAiChainProvider::parse_retry_after("not json"), 30);
        assert_eq!(
            OpenAiChainProvider::parse_retry_after(r#"{"error": {"message": "nope"}}"#),
            30
        );
    }
}
