//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render whatever the chat controller exposes and forward user
//! actions back to it. They hold no conversation state of their own.

pub mod chat_panel;
pub mod typing_indicator;
