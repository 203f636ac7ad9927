//! Chat panel configuration: endpoint address, canned copy, and storage keys.
//!
//! Values come from environment variables when present. Natively they are read
//! at runtime; the browser bundle has no process environment, so the same
//! names are captured at build time with `option_env!`.
//!
//! - `FREEGPT_ENDPOINT`: completion endpoint, absolute http(s) URL
//! - `FREEGPT_GREETING`: first assistant message of a fresh transcript
//! - `FREEGPT_FALLBACK_REPLY`: shown when a reply carries no usable text
//! - `FREEGPT_ERROR_REPLY`: shown when the completion call fails

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ErrorCode;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate";
pub const DEFAULT_GREETING: &str = "Hello! How can I help you today?";
pub const DEFAULT_FALLBACK_REPLY: &str = "Sorry, I couldn't come up with a response.";
pub const DEFAULT_ERROR_REPLY: &str = "Sorry, something went wrong while reaching the assistant. Please try again.";
pub const DEFAULT_MESSAGES_KEY: &str = "freegpt_chat_messages";
pub const DEFAULT_PANEL_KEY: &str = "freegpt_chat_panel";

/// Errors produced while building a [`ChatConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The endpoint is not an absolute `http` or `https` URL.
    #[error("invalid endpoint '{0}': expected an absolute http(s) URL")]
    InvalidEndpoint(String),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint(_) => "E_CONFIG_ENDPOINT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub endpoint: String,
    pub greeting: String,
    pub fallback_reply: String,
    pub error_reply: String,
    pub messages_key: String,
    pub panel_key: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            greeting: DEFAULT_GREETING.to_owned(),
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_owned(),
            error_reply: DEFAULT_ERROR_REPLY.to_owned(),
            messages_key: DEFAULT_MESSAGES_KEY.to_owned(),
            panel_key: DEFAULT_PANEL_KEY.to_owned(),
        }
    }
}

impl ChatConfig {
    /// Build config from the process environment, falling back to values
    /// captured at build time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if `FREEGPT_ENDPOINT` is set
    /// to something other than an absolute http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| build_env(key)))
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] for a malformed endpoint.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let endpoint = match get("FREEGPT_ENDPOINT") {
            Some(raw) => parse_endpoint(&raw)?,
            None => defaults.endpoint,
        };

        Ok(Self {
            endpoint,
            greeting: get("FREEGPT_GREETING").unwrap_or(defaults.greeting),
            fallback_reply: get("FREEGPT_FALLBACK_REPLY").unwrap_or(defaults.fallback_reply),
            error_reply: get("FREEGPT_ERROR_REPLY").unwrap_or(defaults.error_reply),
            ..defaults
        })
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

fn parse_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    match reqwest::Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidEndpoint(trimmed.to_owned())),
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "FREEGPT_ENDPOINT" => option_env!("FREEGPT_ENDPOINT"),
        "FREEGPT_GREETING" => option_env!("FREEGPT_GREETING"),
        "FREEGPT_FALLBACK_REPLY" => option_env!("FREEGPT_FALLBACK_REPLY"),
        "FREEGPT_ERROR_REPLY" => option_env!("FREEGPT_ERROR_REPLY"),
        _ => None,
    };
    value.map(str::to_owned)
}
