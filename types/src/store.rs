//! Key-value storage port.
//!
//! The settings modal talks to persisted storage only through
//! [`KeyValueStore`]. The browser front-end backs it with `localStorage`;
//! [`MemoryStore`] backs it everywhere else (tests, non-browser hosts).

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No storage object is reachable (no window, storage disabled).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend rejected a write (quota exceeded, private mode).
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Flat string-to-string storage, scoped to the current origin.
pub trait KeyValueStore {
    /// Read an entry. Missing entries and read failures both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write an entry, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store backed by a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `(key, value)` pairs.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("anything"), None);
        assert_eq!(store, MemoryStore::default());
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::with_entries([("k", "old")]);
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("new"));
        assert_eq!(store, MemoryStore::with_entries([("k", "new")]));
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Write {
            key: "pollo_api_key".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write 'pollo_api_key': QuotaExceededError"
        );
        assert_eq!(StoreError::Unavailable.to_string(), "storage is unavailable");
    }
}
