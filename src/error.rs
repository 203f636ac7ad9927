//! Error codes shared by every fallible layer of the chat panel.
//!
//! ERROR HANDLING
//! ==============
//! No error in this crate is fatal. Each module owns a `thiserror` enum and
//! the boundary that absorbs it logs `error_code()` next to the message so
//! console output stays grepable.

/// Grepable error code and retryable flag for log lines.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    /// Whether repeating the same operation could succeed. Informational only:
    /// the panel never retries on its own.
    fn retryable(&self) -> bool {
        false
    }
}
