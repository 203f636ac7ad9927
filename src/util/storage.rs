//! Key-value storage backends for persisted panel records.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persistence adapter only needs string get/set. In the browser that is
//! `window.localStorage`; natively (tests, SSR-less tooling) it is an in-process
//! map. `BrowserStore::open` picks the durable backend when the browser offers
//! one and says so when it does not.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ErrorCode;

/// Errors produced by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading a key failed.
    #[error("storage read failed for '{key}': {reason}")]
    Read { key: String, reason: String },

    /// Writing a key failed (quota exceeded, private mode).
    #[error("storage write failed for '{key}': {reason}")]
    Write { key: String, reason: String },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "E_STORAGE_READ",
            Self::Write { .. } => "E_STORAGE_WRITE",
        }
    }
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Read the raw value for `key`, `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Whether values outlive the page.
    fn is_durable(&self) -> bool {
        false
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process store. Clones share the same map, so a second instance built
/// from a clone sees everything the first one wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// LOCAL STORAGE
// =============================================================================

/// `window.localStorage`, scoped to the page origin.
#[cfg(feature = "csr")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "csr")]
impl LocalStorage {
    /// Look up `localStorage`, `None` when the browser does not expose it.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read { key: key.to_owned(), reason: format!("{e:?}") })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
    }

    fn is_durable(&self) -> bool {
        true
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// The store the panel actually uses: durable when possible, memory otherwise.
pub enum BrowserStore {
    #[cfg(feature = "csr")]
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Prefer `localStorage`; fall back to memory and log the downgrade.
    pub fn open() -> Self {
        #[cfg(feature = "csr")]
        {
            if let Some(local) = LocalStorage::open() {
                return Self::Local(local);
            }
        }
        leptos::logging::warn!("localStorage unavailable; chat history will not survive a reload");
        Self::Memory(MemoryStore::default())
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            #[cfg(feature = "csr")]
            Self::Local(store) => store.get_item(key),
            Self::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            #[cfg(feature = "csr")]
            Self::Local(store) => store.set_item(key, value),
            Self::Memory(store) => store.set_item(key, value),
        }
    }

    fn is_durable(&self) -> bool {
        match self {
            #[cfg(feature = "csr")]
            Self::Local(store) => store.is_durable(),
            Self::Memory(store) => store.is_durable(),
        }
    }
}
