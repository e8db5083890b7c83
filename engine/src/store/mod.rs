//! NutritionStore - the persistence facade over injected collaborators.
//!
//! One store instance owns the daily logs, saved recipes, history archive and
//! settings of a single user. All state lives in the [`KeyValueStorage`]; the
//! store itself only holds the collaborators and a write lock.
//!
//! ## Persisted layout
//!
//! | key | value |
//! |---|---|
//! | `daily_log_<YYYY-MM-DD>` | [`DailyLog`] |
//! | `user_settings` | [`UserSettings`](crate::UserSettings) |
//! | `saved_recipes` | list of [`SavedRecipe`](crate::SavedRecipe) |
//! | `history_entries` | list of [`HistoryEntry`](crate::HistoryEntry) |
//!
//! ## Failure policy
//!
//! Reads never fail: an absent key yields a default, and a failed or
//! malformed read yields the same default plus the error, reported through
//! [`Loaded`] and logged. Writes return [`Error::StorageWrite`] and the
//! caller must assume nothing changed.
//!
//! Mutations of the recipe list and the history archive read strictly: a
//! recovered read aborts them with the read error, so a default is never
//! written back over a list that exists but cannot be read. Daily-log
//! mutations start from an empty log in that case.
//!
//! ## Concurrency
//!
//! Every read-modify-write runs under an async mutex, so concurrent
//! mutations through the same instance are applied one after another
//! instead of overwriting each other. Writers in other processes sharing
//! the same storage are not coordinated.

mod daily;
mod history;
mod recipes;
mod settings;

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::log::DailyLog;
use crate::snapshot::DataSnapshot;
use crate::storage::KeyValueStorage;
use crate::{LogDate, Timestamp};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const DAILY_LOG_PREFIX: &str = "daily_log_";
pub const USER_SETTINGS_KEY: &str = "user_settings";
pub const SAVED_RECIPES_KEY: &str = "saved_recipes";
pub const HISTORY_KEY: &str = "history_entries";

/// Storage key of the log for `date`.
pub fn daily_log_key(date: LogDate) -> String {
    format!("{}{}", DAILY_LOG_PREFIX, date.format("%Y-%m-%d"))
}

/// The date encoded in a daily-log key, if `key` is one.
pub fn parse_daily_log_key(key: &str) -> Option<LogDate> {
    let date = key.strip_prefix(DAILY_LOG_PREFIX)?;
    LogDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Outcome of a read that cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    /// Decoded from storage
    Stored(T),
    /// Nothing stored; default value
    Missing(T),
    /// The read failed or the stored value was malformed; default value
    Recovered { value: T, error: Error },
}

impl<T> Loaded<T> {
    pub fn value(&self) -> &T {
        match self {
            Loaded::Stored(v) | Loaded::Missing(v) => v,
            Loaded::Recovered { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Loaded::Stored(v) | Loaded::Missing(v) => v,
            Loaded::Recovered { value, .. } => value,
        }
    }

    /// The read error, when the value is a fallback for a failed read.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Loaded::Recovered { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, Loaded::Stored(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Loaded::Missing(_))
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self, Loaded::Recovered { .. })
    }

    /// Convert into a `Result`, turning a recovered read into its error.
    pub fn strict(self) -> Result<T> {
        match self {
            Loaded::Stored(v) | Loaded::Missing(v) => Ok(v),
            Loaded::Recovered { error, .. } => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        match self {
            Loaded::Stored(v) => Loaded::Stored(f(v)),
            Loaded::Missing(v) => Loaded::Missing(f(v)),
            Loaded::Recovered { value, error } => Loaded::Recovered {
                value: f(value),
                error,
            },
        }
    }
}

/// The main store over a key-value backend and a clock.
pub struct NutritionStore {
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for NutritionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NutritionStore").finish_non_exhaustive()
    }
}

impl NutritionStore {
    /// Create a store over `storage`, reading dates and instants from `clock`.
    pub fn new(storage: Arc<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    /// Today's date according to the injected clock.
    pub fn today(&self) -> LogDate {
        self.clock.today()
    }

    /// The current instant according to the injected clock.
    pub fn now_millis(&self) -> Timestamp {
        self.clock.now_millis()
    }

    /// Export everything into a single document.
    ///
    /// Unlike the `get_*` operations this refuses to paper over read
    /// failures: exporting defaults in place of unreadable data would
    /// produce a misleading backup.
    pub async fn export_snapshot(&self) -> Result<DataSnapshot> {
        let mut snapshot = DataSnapshot::new(self.now_millis());
        snapshot.settings = self.load_settings().await.strict()?;
        snapshot.recipes = self.load_recipes().await.strict()?;
        snapshot.history = self.load_history().await.strict()?;
        for log in self.load_all_logs().await.strict()? {
            snapshot.add_log(log);
        }
        Ok(snapshot)
    }

    /// Restore `snapshot` into the current state.
    ///
    /// Settings, recipes and the daily logs in the snapshot replace what is
    /// stored; daily logs for dates the snapshot does not mention are left
    /// alone. The history archive is merged: snapshot entries not already
    /// archived (same date and vault instant) are appended after the
    /// existing ones. An unreadable archive is replaced by the snapshot's.
    pub async fn import_snapshot(&self, snapshot: &DataSnapshot) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.save_json(USER_SETTINGS_KEY, &snapshot.settings).await?;
        self.save_json(SAVED_RECIPES_KEY, &snapshot.recipes).await?;

        let mut history = self.load_history().await.into_value();
        let before = history.len();
        for entry in &snapshot.history {
            let known = history
                .iter()
                .any(|h| h.date == entry.date && h.vaulted_at == entry.vaulted_at);
            if !known {
                history.push(entry.clone());
            }
        }
        if history.len() != before {
            self.save_json(HISTORY_KEY, &history).await?;
        }
        for log in snapshot.logs.values() {
            self.save_json(&daily_log_key(log.date()), log).await?;
        }
        tracing::info!(
            logs = snapshot.logs.len(),
            recipes = snapshot.recipes.len(),
            history_added = history.len() - before,
            "snapshot imported"
        );
        Ok(())
    }

    /// Delete all persisted data.
    pub async fn clear_all(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.storage
            .clear()
            .await
            .map_err(|e| Error::write("*", e))?;
        tracing::info!("all data cleared");
        Ok(())
    }

    async fn load_with<T>(
        &self,
        key: &str,
        decode: impl FnOnce(&str) -> serde_json::Result<T>,
        default: impl FnOnce() -> T,
    ) -> Loaded<T> {
        let error = match self.storage.get(key).await {
            Ok(None) => return Loaded::Missing(default()),
            Ok(Some(raw)) => match decode(&raw) {
                Ok(value) => return Loaded::Stored(value),
                Err(e) => Error::Malformed {
                    key: key.to_string(),
                    reason: e.to_string(),
                },
            },
            Err(e) => Error::read(key, e),
        };

        tracing::warn!(key, error = %error, "read failed, falling back to default");
        Loaded::Recovered {
            value: default(),
            error,
        }
    }

    async fn load_json<T: DeserializeOwned>(
        &self,
        key: &str,
        default: impl FnOnce() -> T,
    ) -> Loaded<T> {
        self.load_with(key, |raw| serde_json::from_str(raw), default)
            .await
    }

    async fn load_log_at(&self, key: &str, date: LogDate) -> Loaded<DailyLog> {
        self.load_with(key, DailyLog::from_json, || DailyLog::empty(date))
            .await
    }

    async fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|e| Error::Encode(e.to_string()))?;
        self.storage
            .set(key, raw)
            .await
            .map_err(|e| Error::write(key, e))
    }

    async fn remove_key(&self, key: &str) -> Result<()> {
        self.storage
            .remove(key)
            .await
            .map_err(|e| Error::write(key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;

    #[test]
    fn daily_log_keys() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(daily_log_key(date), "daily_log_2024-01-09");
        assert_eq!(parse_daily_log_key("daily_log_2024-01-09"), Some(date));
        assert_eq!(parse_daily_log_key("daily_log_garbage"), None);
        assert_eq!(parse_daily_log_key("user_settings"), None);
    }

    #[test]
    fn loaded_accessors() {
        let stored = Loaded::Stored(3);
        assert!(stored.is_stored());
        assert_eq!(stored.clone().strict(), Ok(3));

        let recovered = Loaded::Recovered {
            value: 0,
            error: Error::Encode("x".into()),
        };
        assert!(recovered.is_recovered());
        assert_eq!(*recovered.value(), 0);
        assert!(recovered.error().is_some());
        assert_eq!(recovered.map(|v| v + 1).into_value(), 1);

        assert!(Loaded::Missing(()).is_missing());
    }

    #[tokio::test]
    async fn clear_all_removes_everything() {
        let storage = Arc::new(MemoryStorage::new());
        storage.insert_raw("user_settings", r#"{"dailyCalorieGoal":1500}"#);
        storage.insert_raw("daily_log_2024-01-01", "{}");
        let store = NutritionStore::new(storage.clone(), Arc::new(FixedClock::at("2024-01-01", 0)));

        store.clear_all().await.unwrap();
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn clear_all_surfaces_write_failure() {
        let storage = Arc::new(MemoryStorage::new());
        storage.fail_writes(true);
        let store = NutritionStore::new(storage, Arc::new(FixedClock::at("2024-01-01", 0)));

        let err = store.clear_all().await.unwrap_err();
        assert!(err.is_write_failure());
    }
}
