//! Wire DTOs for the completion endpoint.
//!
//! DESIGN
//! ======
//! `{"prompt": ...}` out, `{"response": ...}` back. The body must parse as
//! JSON; a missing, non-string, or blank `response` yields
//! [`CompletionReply::Empty`] and the turn shows the fallback text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

/// Outbound request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionRequest<'a> {
    pub prompt: &'a str,
}

/// What a successfully parsed reply body carried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompletionReply {
    /// The `response` field held non-blank text.
    Text(String),
    /// The body was JSON but had no usable `response` text.
    Empty,
}

impl CompletionReply {
    /// Resolve to display text, substituting `fallback` for an empty reply.
    #[must_use]
    pub fn into_text(self, fallback: &str) -> String {
        match self {
            Self::Text(text) => text,
            Self::Empty => fallback.to_owned(),
        }
    }
}

/// Parse a reply body.
///
/// # Errors
///
/// Returns the `serde_json` error if `body` is not JSON at all.
pub fn parse_completion_body(body: &str) -> Result<CompletionReply, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let reply = value
        .get("response")
        .and_then(serde_json::Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map_or(CompletionReply::Empty, |text| CompletionReply::Text(text.to_owned()));
    Ok(reply)
}
