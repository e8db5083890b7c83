//! Export documents for backing up and restoring all user data.
//!
//! Logs are keyed by date in a `BTreeMap` so the same data always
//! serializes to the same JSON.

use crate::{
    error::Result, DailyLog, Error, HistoryEntry, SavedRecipe, Timestamp, UserSettings,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version of the export format for future compatibility.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Everything the store persists, in one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSnapshot {
    /// Export format version
    pub format_version: u32,
    /// When the export was taken (milliseconds since epoch)
    pub exported_at: Timestamp,
    pub settings: UserSettings,
    /// Recipes in insertion order
    pub recipes: Vec<SavedRecipe>,
    /// History in append order
    pub history: Vec<HistoryEntry>,
    /// Daily logs keyed by `YYYY-MM-DD`
    pub logs: BTreeMap<String, DailyLog>,
}

impl DataSnapshot {
    /// An empty snapshot with default settings.
    pub fn new(exported_at: Timestamp) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            exported_at,
            settings: UserSettings::default(),
            recipes: Vec::new(),
            history: Vec::new(),
            logs: BTreeMap::new(),
        }
    }

    /// Add or replace the log for its date.
    pub fn add_log(&mut self, log: DailyLog) {
        self.logs
            .insert(log.date().format("%Y-%m-%d").to_string(), log);
    }

    /// Meals across all daily logs (history excluded).
    pub fn logged_meal_count(&self) -> usize {
        self.logs.values().map(DailyLog::len).sum()
    }

    /// Serialize to JSON with deterministic ordering.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Serialize to pretty JSON with deterministic ordering.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidSnapshot(e.to_string()))?;
        snapshot.validated()
    }

    /// Check the format version and date keys, and recompute log totals.
    pub fn validated(mut self) -> Result<Self> {
        if self.format_version > SNAPSHOT_FORMAT_VERSION {
            return Err(Error::InvalidSnapshot(format!(
                "unsupported snapshot format version: {} (max supported: {})",
                self.format_version, SNAPSHOT_FORMAT_VERSION
            )));
        }

        for (key, log) in self.logs.iter_mut() {
            let date = log.date().format("%Y-%m-%d").to_string();
            if *key != date {
                return Err(Error::InvalidSnapshot(format!(
                    "log keyed '{}' is dated {}",
                    key, date
                )));
            }
            log.recompute_totals();
        }

        Ok(self)
    }
}

/// Counts describing a snapshot, without the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    pub format_version: u32,
    pub exported_at: Timestamp,
    pub log_count: usize,
    pub logged_meal_count: usize,
    pub recipe_count: usize,
    pub history_count: usize,
}

impl From<&DataSnapshot> for SnapshotSummary {
    fn from(snapshot: &DataSnapshot) -> Self {
        Self {
            format_version: snapshot.format_version,
            exported_at: snapshot.exported_at,
            log_count: snapshot.logs.len(),
            logged_meal_count: snapshot.logged_meal_count(),
            recipe_count: snapshot.recipes.len(),
            history_count: snapshot.history.len(),
        }
    }
}
