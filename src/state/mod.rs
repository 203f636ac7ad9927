//! Client-side chat state.
//!
//! DESIGN
//! ======
//! State is split by concern (`transcript`, `conversation`, `panel`) so the
//! turn state machine and the panel chrome can be persisted and tested apart.

pub mod conversation;
pub mod panel;
pub mod transcript;
