//! History archive operations.

use super::{Loaded, NutritionStore, HISTORY_KEY};
use crate::error::Result;
use crate::history::{sort_for_display, HistoryEntry};

impl NutritionStore {
    /// History entries in storage (append) order, reporting how the list
    /// was obtained.
    pub async fn load_history(&self) -> Loaded<Vec<HistoryEntry>> {
        self.load_json(HISTORY_KEY, Vec::new).await
    }

    /// History entries newest date first; entries sharing a date keep their
    /// append order. Empty if unreadable.
    pub async fn get_history(&self) -> Vec<HistoryEntry> {
        let mut entries = self.load_history().await.into_value();
        sort_for_display(&mut entries);
        entries
    }

    /// Append `entry`. Existing entries are never replaced, even for the
    /// same date.
    ///
    /// If the archive cannot be read the append is refused with the read
    /// error and nothing is written.
    pub async fn append_history(&self, entry: HistoryEntry) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.append_history_unlocked(entry).await
    }

    pub(super) async fn append_history_unlocked(&self, entry: HistoryEntry) -> Result<()> {
        let mut entries = self.load_history().await.strict()?;
        let date = entry.date;
        entries.push(entry);
        self.save_json(HISTORY_KEY, &entries).await?;

        tracing::debug!(%date, total = entries.len(), "history entry appended");
        Ok(())
    }
}
