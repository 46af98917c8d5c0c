//! Key-value store abstraction and the in-memory backend.

use std::collections::HashMap;

use crate::error::StoreError;

/// Entry holding the full subject collection.
pub const SUBJECTS_KEY: &str = "acad_subjects";

/// Entry holding the full exam paper collection.
pub const PAPERS_KEY: &str = "acad_papers";

/// Entry holding the pending paper draft, if any.
pub const DRAFT_KEY: &str = "acad_draft";

/// A string-to-string store written wholesale, one value per key.
pub trait KvStore {
    /// Read the value under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Check that a key is usable as a file stem on every platform.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// In-process backend, used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
}

impl MemoryKvStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, bypassing the store (e.g. with a corrupt snapshot).
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_remove() {
        let mut kv = MemoryKvStore::new();
        assert_eq!(kv.get("a").unwrap(), None);
        kv.put("a", "1").unwrap();
        kv.put("a", "2").unwrap();
        assert_eq!(kv.get("a").unwrap().as_deref(), Some("2"));
        kv.remove("a").unwrap();
        kv.remove("a").unwrap();
        assert_eq!(kv.get("a").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let mut kv = MemoryKvStore::new();
        assert!(matches!(
            kv.put("../escape", "x"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(kv.get(""), Err(StoreError::InvalidKey(_))));
    }
}
