//! Conversation state machine: submit, await, resolve.
//!
//! DESIGN
//! ======
//! Two phases, `Idle` and `AwaitingReply`. An accepted submit appends the user
//! message and hands back a [`PendingTurn`]; running it produces a
//! [`TurnResolution`]; resolving appends exactly one assistant message. Both
//! handles are consumed by value, so a turn can settle at most once, and a
//! resolution for a turn that is no longer outstanding is dropped.
//!
//! While a turn is outstanding every submit is rejected: the depth-1 gate is
//! the only backpressure in the panel.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use super::transcript::{Message, Transcript};
use crate::error::ErrorCode;
use crate::net::completion::{CompletionClient, CompletionError};

/// Why a submit was ignored. Never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("message is empty")]
    Empty,
    #[error("a reply is still pending")]
    Busy,
}

impl ErrorCode for SubmitRejected {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "E_SUBMIT_EMPTY",
            Self::Busy => "E_SUBMIT_BUSY",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingReply {
        turn: u64,
    },
}

/// An accepted submission whose reply has not been requested yet.
#[derive(Debug)]
#[must_use = "a pending turn keeps the conversation busy until it is run and resolved"]
pub struct PendingTurn {
    turn: u64,
    prompt: String,
}

impl PendingTurn {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Issue the completion call for this turn.
    pub async fn run<C: CompletionClient + ?Sized>(self, client: &C) -> TurnResolution {
        let outcome = client.complete(&self.prompt).await;
        self.settle(outcome)
    }

    /// Attach an outcome obtained elsewhere.
    pub fn settle(self, outcome: Result<String, CompletionError>) -> TurnResolution {
        TurnResolution { turn: self.turn, outcome }
    }
}

/// The outcome of one turn, ready to be folded into the transcript.
#[derive(Debug)]
#[must_use = "the conversation stays busy until the resolution is applied"]
pub struct TurnResolution {
    turn: u64,
    outcome: Result<String, CompletionError>,
}

/// Messages plus the turn phase and the unsent input.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    transcript: Transcript,
    phase: Phase,
    draft: String,
    next_turn: u64,
}

impl ConversationState {
    #[must_use]
    pub fn new(transcript: Transcript) -> Self {
        Self { transcript, ..Self::default() }
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        self.transcript.all()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `true` while a turn's reply is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::AwaitingReply { .. })
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Reseed the greeting if the transcript is empty. See [`Transcript::reseed_if_empty`].
    pub fn reseed_if_empty(&mut self, greeting: &str) -> bool {
        self.transcript.reseed_if_empty(greeting)
    }

    /// Accept `text` as the next user turn.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::Empty`] for blank text and
    /// [`SubmitRejected::Busy`] while a reply is outstanding. A rejected
    /// submit leaves the state untouched.
    pub fn submit(&mut self, text: &str) -> Result<PendingTurn, SubmitRejected> {
        if text.trim().is_empty() {
            return Err(SubmitRejected::Empty);
        }
        if self.is_pending() {
            return Err(SubmitRejected::Busy);
        }

        let turn = self.next_turn;
        self.next_turn += 1;
        self.transcript.append(Message::user(text));
        self.draft.clear();
        self.phase = Phase::AwaitingReply { turn };
        Ok(PendingTurn { turn, prompt: text.to_owned() })
    }

    /// Fold a turn outcome into the transcript and return to `Idle`.
    ///
    /// Failures become `error_reply`; the raw error only goes to the log.
    /// Returns `false` (and changes nothing) when `resolution` does not belong
    /// to the outstanding turn.
    pub fn resolve(&mut self, resolution: TurnResolution, error_reply: &str) -> bool {
        if self.phase != (Phase::AwaitingReply { turn: resolution.turn }) {
            leptos::logging::warn!("discarding reply for turn {} that is no longer outstanding", resolution.turn);
            return false;
        }

        let content = match resolution.outcome {
            Ok(text) => text,
            Err(e) => {
                leptos::logging::warn!(
                    "completion failed: code={} retryable={} {e}",
                    e.error_code(),
                    e.retryable()
                );
                error_reply.to_owned()
            }
        };
        self.transcript.append(Message::assistant(content));
        self.phase = Phase::Idle;
        true
    }
}
