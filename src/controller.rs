//! Chat controller: the one object the rendering layer talks to.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the conversation state machine and panel flags, hydrates both from
//! storage at mount, and writes the affected record back after every
//! mutation. The completion call itself stays outside: `submit` hands back a
//! [`PendingTurn`] for the caller to run, and `resolve` folds the result in.
//! That keeps the controller free of borrows across the await, so a second
//! submit during the call is observed (and rejected) instead of deadlocking.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ChatConfig;
use crate::error::ErrorCode;
use crate::state::conversation::{ConversationState, PendingTurn, TurnResolution};
use crate::state::panel::PanelState;
use crate::state::transcript::{Message, Transcript};
use crate::util::persistence::ChatPersistence;
use crate::util::storage::KeyValueStore;

pub struct ChatController<S> {
    config: ChatConfig,
    conversation: ConversationState,
    panel: PanelState,
    persistence: ChatPersistence<S>,
}

impl<S: KeyValueStore> ChatController<S> {
    /// Build the controller from whatever `store` holds.
    ///
    /// Missing or corrupt records fall back to defaults; an empty transcript
    /// is reseeded with the greeting (and that reseed is written back).
    pub fn mount(config: ChatConfig, store: S) -> Self {
        let persistence = ChatPersistence::new(store, &config);
        let loaded = persistence.load();

        let transcript = Transcript::from_messages(loaded.messages.unwrap_or_default());
        let mut conversation = ConversationState::new(transcript);
        if conversation.reseed_if_empty(&config.greeting) {
            persistence.save_messages(conversation.messages());
        }

        Self { panel: loaded.panel.unwrap_or_default(), config, conversation, persistence }
    }

    // =========================================================================
    // READ SIDE
    // =========================================================================

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    #[must_use]
    pub fn pending(&self) -> bool {
        self.conversation.is_pending()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        self.conversation.draft()
    }

    #[must_use]
    pub fn panel(&self) -> PanelState {
        self.panel
    }

    #[must_use]
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Whether history survives a reload (false when storage fell back to memory).
    #[must_use]
    pub fn is_durable(&self) -> bool {
        self.persistence.store().is_durable()
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.conversation.set_draft(text);
    }

    /// Start a turn with `text`. `None` when the submit was rejected (blank
    /// text or a reply still pending); rejections change nothing.
    pub fn submit(&mut self, text: &str) -> Option<PendingTurn> {
        match self.conversation.submit(text) {
            Ok(turn) => {
                self.persistence.save_messages(self.conversation.messages());
                Some(turn)
            }
            Err(rejected) => {
                leptos::logging::log!("submit ignored: code={}", rejected.error_code());
                None
            }
        }
    }

    /// Apply a finished turn. Returns `false` if it was not the outstanding one.
    pub fn resolve(&mut self, resolution: TurnResolution) -> bool {
        let applied = self.conversation.resolve(resolution, &self.config.error_reply);
        if applied {
            self.persistence.save_messages(self.conversation.messages());
        }
        applied
    }

    pub fn toggle_visible(&mut self) {
        self.panel.toggle_visible();
        self.persistence.save_panel(&self.panel);
    }

    pub fn toggle_expanded(&mut self) {
        self.panel.toggle_expanded();
        self.persistence.save_panel(&self.panel);
    }

    /// Force the layout mode, e.g. after the browser left fullscreen on its
    /// own. Writes only when the value changes.
    pub fn set_expanded(&mut self, expanded: bool) {
        if self.panel.expanded == expanded {
            return;
        }
        self.panel.expanded = expanded;
        self.persistence.save_panel(&self.panel);
    }
}
