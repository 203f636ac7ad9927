//! Networking for the completion endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `completion` owns the HTTP call and its error type; `types` defines the
//! wire schema and the tolerant reply parser.

pub mod completion;
pub mod types;
