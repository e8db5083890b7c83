//! Key-value storage collaborator.
//!
//! The engine persists JSON strings under string keys. Hosts provide a
//! durable [`KeyValueStorage`]; [`MemoryStorage`] is the in-process
//! implementation used in tests and for ephemeral sessions.

use crate::error::StorageError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Result type for storage backends.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Asynchronous string key-value store.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> StorageResult<()>;

    /// Delete `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> StorageResult<()>;

    /// Delete every key.
    async fn clear(&self) -> StorageResult<()>;

    /// All keys, sorted.
    async fn list_keys(&self) -> StorageResult<Vec<String>>;
}

/// In-memory storage with switchable failure injection.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    yield_on_access: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `get` and `list_keys` fail until switched off.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every `set`, `remove` and `clear` fail until switched off.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Yield to the executor before each access, so concurrent callers
    /// interleave the way they would over real I/O.
    pub fn yield_on_access(&self, enabled: bool) {
        self.yield_on_access.store(enabled, Ordering::SeqCst);
    }

    /// Store a raw value without going through the async interface.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock().insert(key.into(), value.into());
    }

    /// Read a raw value without going through the async interface.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn before_read(&self) -> StorageResult<()> {
        self.pause().await;
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("injected read failure".into()));
        }
        Ok(())
    }

    async fn before_write(&self) -> StorageResult<()> {
        self.pause().await;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("injected write failure".into()));
        }
        Ok(())
    }

    async fn pause(&self) {
        if self.yield_on_access.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.before_read().await?;
        Ok(self.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        self.before_write().await?;
        self.lock().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.before_write().await?;
        self.lock().remove(key);
        Ok(())
    }

    async fn clear(&self) -> StorageResult<()> {
        self.before_write().await?;
        self.lock().clear();
        Ok(())
    }

    async fn list_keys(&self) -> StorageResult<Vec<String>> {
        self.before_read().await?;
        Ok(self.lock().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").await.unwrap(), None);

        storage.set("k", "v".into()).await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), Some("v".into()));

        storage.remove("k").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), None);
        storage.remove("k").await.unwrap();
    }

    #[tokio::test]
    async fn list_keys_sorted_and_clear() {
        let storage = MemoryStorage::new();
        storage.set("b", "2".into()).await.unwrap();
        storage.set("a", "1".into()).await.unwrap();
        assert_eq!(storage.list_keys().await.unwrap(), vec!["a", "b"]);

        storage.clear().await.unwrap();
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn injected_failures() {
        let storage = MemoryStorage::new();
        storage.insert_raw("k", "v");

        storage.fail_reads(true);
        assert!(matches!(
            storage.get("k").await,
            Err(StorageError::Unavailable(_))
        ));
        assert!(storage.list_keys().await.is_err());
        storage.fail_reads(false);

        storage.fail_writes(true);
        assert!(storage.set("k", "w".into()).await.is_err());
        assert!(storage.remove("k").await.is_err());
        assert!(storage.clear().await.is_err());
        assert_eq!(storage.raw("k"), Some("v".into()));
    }
}
