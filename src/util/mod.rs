//! Utility helpers shared across the panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, fullscreen)
//! from state and component logic to keep the state machine testable natively.

#[cfg(feature = "csr")]
pub mod fullscreen;
pub mod persistence;
pub mod storage;
