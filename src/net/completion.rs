//! Remote completion client: one prompt in, one reply text out.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and non-JSON bodies all surface as
//! [`CompletionError`]. The client never retries; the conversation state
//! machine decides what a failed turn looks like to the user.

#[cfg(test)]
#[path = "completion_test.rs"]
mod completion_test;

use super::types::{CompletionRequest, parse_completion_body};
use crate::config::ChatConfig;
use crate::error::ErrorCode;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by a completion call. All of them are remote failures
/// from the conversation's point of view.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The request never produced a response (DNS, connect, CORS, reset).
    #[error("completion request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("completion endpoint returned status {status}")]
    Status { status: u16 },

    /// The response body could not be parsed as JSON.
    #[error("completion response malformed: {0}")]
    Malformed(String),
}

impl ErrorCode for CompletionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_COMPLETION_TRANSPORT",
            Self::Status { .. } => "E_COMPLETION_STATUS",
            Self::Malformed(_) => "E_COMPLETION_MALFORMED",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { status: 429 | 500..=599 })
    }
}

// =============================================================================
// CLIENT TRAIT
// =============================================================================

/// Async seam over the completion endpoint. Enables mocking in tests.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded executor behind `spawn_local`.
#[async_trait::async_trait(?Send)]
pub trait CompletionClient {
    /// Send `prompt` and return the reply text, or the fallback text when
    /// the reply carried none.
    ///
    /// # Errors
    ///
    /// Returns a [`CompletionError`] on transport failure, non-success status,
    /// or a body that is not JSON.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// [`CompletionClient`] backed by `reqwest` (fetch in the browser).
pub struct HttpCompletionClient {
    http: reqwest::Client,
    endpoint: String,
    fallback_reply: String,
}

impl HttpCompletionClient {
    pub fn new(endpoint: impl Into<String>, fallback_reply: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), endpoint: endpoint.into(), fallback_reply: fallback_reply.into() }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.endpoint.clone(), config.fallback_reply.clone())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&CompletionRequest { prompt })
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status { status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;
        let reply = parse_completion_body(&body).map_err(|e| CompletionError::Malformed(e.to_string()))?;
        Ok(reply.into_text(&self.fallback_reply))
    }
}
