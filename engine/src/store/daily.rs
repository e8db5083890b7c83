//! Daily log operations.

use super::{daily_log_key, parse_daily_log_key, Loaded, NutritionStore, DAILY_LOG_PREFIX};
use crate::error::{Error, Result};
use crate::history::HistoryEntry;
use crate::log::DailyLog;
use crate::meal::Meal;
use crate::LogDate;

impl NutritionStore {
    /// Read the log for `date`, reporting how the value was obtained.
    ///
    /// A date with no stored record yields an empty log; nothing is written.
    pub async fn load_log(&self, date: LogDate) -> Loaded<DailyLog> {
        self.load_log_at(&daily_log_key(date), date).await
    }

    /// The log for `date`, or an empty log if none is stored or it cannot be
    /// read.
    pub async fn get_log(&self, date: LogDate) -> DailyLog {
        self.load_log(date).await.into_value()
    }

    /// The log for the clock's current date.
    pub async fn today_log(&self) -> DailyLog {
        self.get_log(self.today()).await
    }

    /// Append `meal` to today's log and persist it.
    ///
    /// The target date always comes from the clock, never from the caller.
    /// Returns the updated log.
    pub async fn add_meal(&self, meal: Meal) -> Result<DailyLog> {
        let _guard = self.write_lock.lock().await;
        let today = self.today();
        let key = daily_log_key(today);

        let mut log = self.load_log_at(&key, today).await.into_value();
        let meal_id = meal.id.clone();
        log.push(meal);
        self.save_json(&key, &log).await?;

        tracing::debug!(%today, %meal_id, meals = log.len(), "meal added");
        Ok(log)
    }

    /// Remove the first meal with `meal_id` from the log for `date`.
    ///
    /// An unknown id is a no-op: nothing is written and the current log is
    /// returned unchanged.
    pub async fn remove_meal(&self, date: LogDate, meal_id: &str) -> Result<DailyLog> {
        let _guard = self.write_lock.lock().await;
        let key = daily_log_key(date);

        let mut log = self.load_log_at(&key, date).await.into_value();
        if log.remove(meal_id).is_none() {
            tracing::debug!(%date, meal_id, "meal not found, nothing removed");
            return Ok(log);
        }
        self.save_json(&key, &log).await?;

        tracing::debug!(%date, meal_id, meals = log.len(), "meal removed");
        Ok(log)
    }

    /// Archive today's log into history and delete it.
    ///
    /// An empty log is left alone and `None` is returned. Otherwise the new
    /// [`HistoryEntry`] is appended, then the daily-log key is removed so the
    /// next read starts from a fresh empty log. If the archive cannot be read
    /// the vault fails before anything is written and today's log is kept.
    ///
    /// The two writes are not atomic. If removing the log fails after the
    /// history append succeeded, the error is returned and the day remains
    /// in both places; vaulting again would archive it a second time.
    pub async fn vault_and_reset(&self) -> Result<Option<HistoryEntry>> {
        let _guard = self.write_lock.lock().await;
        let today = self.today();
        let key = daily_log_key(today);

        let log = self.load_log_at(&key, today).await.into_value();
        if log.is_empty() {
            tracing::debug!(%today, "nothing to vault");
            return Ok(None);
        }

        let entry = HistoryEntry::from_log(log, self.now_millis());
        self.append_history_unlocked(entry.clone()).await?;

        if let Err(e) = self.remove_key(&key).await {
            tracing::error!(%today, error = %e, "day archived but its log could not be removed");
            return Err(e);
        }

        tracing::info!(
            %today,
            meals = entry.meals.len(),
            calories = entry.total_calories,
            "day vaulted"
        );
        Ok(Some(entry))
    }

    /// Every stored daily log, newest date first.
    ///
    /// Logs that cannot be read are skipped; the first such error is
    /// reported through [`Loaded::Recovered`] alongside the readable logs.
    pub async fn load_all_logs(&self) -> Loaded<Vec<DailyLog>> {
        let keys = match self.storage.list_keys().await {
            Ok(keys) => keys,
            Err(e) => {
                let error = Error::read(DAILY_LOG_PREFIX, e);
                tracing::warn!(error = %error, "could not enumerate daily logs");
                return Loaded::Recovered {
                    value: Vec::new(),
                    error,
                };
            }
        };

        let mut logs = Vec::new();
        let mut first_error = None;
        for (key, date) in keys
            .iter()
            .filter_map(|k| parse_daily_log_key(k).map(|d| (k, d)))
        {
            match self.load_log_at(key, date).await {
                Loaded::Stored(log) => logs.push(log),
                Loaded::Missing(_) => {}
                Loaded::Recovered { error, .. } => {
                    first_error.get_or_insert(error);
                }
            }
        }
        logs.sort_by(|a, b| b.date().cmp(&a.date()));

        match first_error {
            Some(error) => Loaded::Recovered { value: logs, error },
            None if logs.is_empty() => Loaded::Missing(logs),
            None => Loaded::Stored(logs),
        }
    }

    /// Every readable daily log, newest date first.
    pub async fn all_logs(&self) -> Vec<DailyLog> {
        self.load_all_logs().await.into_value()
    }
}
