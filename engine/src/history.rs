//! Archived (vaulted) days.

use crate::log::DailyLog;
use crate::meal::Meal;
use crate::nutrition::Nutrition;
use crate::{LogDate, Timestamp};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a day's log taken when it was vaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: LogDate,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub meals: Vec<Meal>,
    /// Archive instant (milliseconds since epoch)
    pub vaulted_at: Timestamp,
}

impl HistoryEntry {
    /// Snapshot `log` at `vaulted_at`.
    pub fn from_log(log: DailyLog, vaulted_at: Timestamp) -> Self {
        let totals = log.totals();
        let date = log.date();
        Self {
            date,
            total_calories: totals.calories,
            total_protein: totals.protein,
            total_carbs: totals.carbs,
            total_fat: totals.fat,
            meals: log.into_meals(),
            vaulted_at,
        }
    }

    pub fn totals(&self) -> Nutrition {
        Nutrition::new(
            self.total_calories,
            self.total_protein,
            self.total_carbs,
            self.total_fat,
        )
    }
}

/// Order entries for display: newest `date` first. The sort is stable, so
/// entries sharing a date keep their storage order.
pub fn sort_for_display(entries: &mut [HistoryEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
