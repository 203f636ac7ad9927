//! JSON persistence of the transcript and panel records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two independent keys: the message sequence and the panel flags. Each save
//! writes a full snapshot, so the last completed write for a key wins.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here reaches the user. Read failures and corrupt records load as
//! "absent" so the caller uses defaults; write failures are logged and dropped.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::storage::KeyValueStore;
use crate::config::ChatConfig;
use crate::error::ErrorCode;
use crate::state::panel::PanelState;
use crate::state::transcript::Message;

/// Whatever was recovered from storage at mount. Each field is independent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersistedChat {
    pub messages: Option<Vec<Message>>,
    pub panel: Option<PanelState>,
}

/// Reads and writes the two panel records in a [`KeyValueStore`].
pub struct ChatPersistence<S> {
    store: S,
    messages_key: String,
    panel_key: String,
}

impl<S: KeyValueStore> ChatPersistence<S> {
    pub fn new(store: S, config: &ChatConfig) -> Self {
        Self { store, messages_key: config.messages_key.clone(), panel_key: config.panel_key.clone() }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load both records. Missing, unreadable, or corrupt records are `None`.
    pub fn load(&self) -> PersistedChat {
        PersistedChat { messages: self.load_json(&self.messages_key), panel: self.load_json(&self.panel_key) }
    }

    pub fn save_messages(&self, messages: &[Message]) {
        self.save_json(&self.messages_key, messages);
    }

    pub fn save_panel(&self, panel: &PanelState) {
        self.save_json(&self.panel_key, panel);
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get_item(key) {
            Ok(raw) => raw?,
            Err(e) => {
                leptos::logging::warn!("persistence load skipped: code={} {e}", e.error_code());
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                leptos::logging::warn!("persistence record '{key}' is corrupt, using defaults: {e}");
                None
            }
        }
    }

    fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::warn!("persistence record '{key}' not serializable: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set_item(key, &raw) {
            leptos::logging::warn!("persistence save dropped: code={} {e}", e.error_code());
        }
    }
}
