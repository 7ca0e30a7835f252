use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use medico_core::model::{LeaderboardEntry, Reminder};
use thiserror::Error;

use crate::codec::{decode_list_or_empty, encode_list};

/// Storage key holding the reminder list.
pub const REMINDERS_KEY: &str = "reminders";
/// Storage key holding the leaderboard list.
pub const LEADERBOARD_KEY: &str = "leaderboard";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Local string-to-string store. Every write replaces the whole value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the backend cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Load all reminders in stored order. Unreadable data loads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn load_reminders(&self) -> Result<Vec<Reminder>, StorageError>;

    /// Replace the stored reminder list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails.
    async fn save_reminders(&self, reminders: &[Reminder]) -> Result<(), StorageError>;
}

#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Load all entries in stored order. Unreadable data loads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn load_entries(&self) -> Result<Vec<LeaderboardEntry>, StorageError>;

    /// Replace the stored leaderboard.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails.
    async fn save_entries(&self, entries: &[LeaderboardEntry]) -> Result<(), StorageError>;
}

/// In-memory key-value store for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed lists on top of any key-value backend.
#[derive(Clone)]
pub struct LocalStorage {
    kv: Arc<dyn KeyValueStore>,
}

impl LocalStorage {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl ReminderRepository for LocalStorage {
    async fn load_reminders(&self) -> Result<Vec<Reminder>, StorageError> {
        let raw = self.kv.get(REMINDERS_KEY).await?;
        Ok(decode_list_or_empty(REMINDERS_KEY, raw.as_deref()))
    }

    async fn save_reminders(&self, reminders: &[Reminder]) -> Result<(), StorageError> {
        let raw = encode_list(reminders)?;
        self.kv.set(REMINDERS_KEY, &raw).await?;
        tracing::debug!(count = reminders.len(), "reminders saved");
        Ok(())
    }
}

#[async_trait]
impl LeaderboardRepository for LocalStorage {
    async fn load_entries(&self) -> Result<Vec<LeaderboardEntry>, StorageError> {
        let raw = self.kv.get(LEADERBOARD_KEY).await?;
        Ok(decode_list_or_empty(LEADERBOARD_KEY, raw.as_deref()))
    }

    async fn save_entries(&self, entries: &[LeaderboardEntry]) -> Result<(), StorageError> {
        let raw = encode_list(entries)?;
        self.kv.set(LEADERBOARD_KEY, &raw).await?;
        tracing::debug!(count = entries.len(), "leaderboard saved");
        Ok(())
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
    pub reminders: Arc<dyn ReminderRepository>,
    pub leaderboard: Arc<dyn LeaderboardRepository>,
}

impl Storage {
    #[must_use]
    pub fn from_kv(kv: Arc<dyn KeyValueStore>) -> Self {
        let local = LocalStorage::new(Arc::clone(&kv));
        let reminders: Arc<dyn ReminderRepository> = Arc::new(local.clone());
        let leaderboard: Arc<dyn LeaderboardRepository> = Arc::new(local);
        Self {
            kv,
            reminders,
            leaderboard,
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_kv(Arc::new(InMemoryKeyValueStore::new()))
    }
}
