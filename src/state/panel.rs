//! Local panel chrome state (visibility and layout mode).
//!
//! DESIGN
//! ======
//! Kept apart from `conversation` so toggling the panel never touches message
//! history, and so both records can be persisted independently.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use serde::{Deserialize, Serialize};

/// Whether the panel is shown and whether it fills the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    pub visible: bool,
    pub expanded: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self { visible: true, expanded: false }
    }
}

impl PanelState {
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}
