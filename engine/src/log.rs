//! The per-date daily log aggregate.

use crate::meal::Meal;
use crate::nutrition::Nutrition;
use crate::LogDate;
use serde::{Deserialize, Serialize};

/// All meals logged on one calendar date, plus their totals.
///
/// The totals are a pure function of `meals`: every mutation goes through a
/// method that recomputes them, and decoding a stored log recomputes them
/// as well, so a stale total is never observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    date: LogDate,
    meals: Vec<Meal>,
    total_calories: f64,
    total_protein: f64,
    total_carbs: f64,
    total_fat: f64,
}

impl DailyLog {
    /// An empty log for `date`.
    pub fn empty(date: LogDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
        }
    }

    /// Build a log from an existing meal sequence.
    pub fn with_meals(date: LogDate, meals: Vec<Meal>) -> Self {
        let mut log = Self::empty(date);
        log.meals = meals;
        log.recompute_totals();
        log
    }

    pub fn date(&self) -> LogDate {
        self.date
    }

    /// Meals in logging order.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn total_calories(&self) -> f64 {
        self.total_calories
    }

    pub fn total_protein(&self) -> f64 {
        self.total_protein
    }

    pub fn total_carbs(&self) -> f64 {
        self.total_carbs
    }

    pub fn total_fat(&self) -> f64 {
        self.total_fat
    }

    pub fn totals(&self) -> Nutrition {
        Nutrition::new(
            self.total_calories,
            self.total_protein,
            self.total_carbs,
            self.total_fat,
        )
    }

    /// Append a meal and recompute totals.
    pub fn push(&mut self, meal: Meal) {
        self.meals.push(meal);
        self.recompute_totals();
    }

    /// Remove the first meal with `meal_id`. Returns the removed meal, or
    /// `None` (log untouched) if no meal matches.
    pub fn remove(&mut self, meal_id: &str) -> Option<Meal> {
        let index = self.meals.iter().position(|m| m.id == meal_id)?;
        let removed = self.meals.remove(index);
        self.recompute_totals();
        Some(removed)
    }

    /// Consume the log, yielding its meals.
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals
    }

    pub(crate) fn recompute_totals(&mut self) {
        let totals: Nutrition = self.meals.iter().map(Meal::nutrition).sum();
        let totals = totals.rounded_for_log();
        self.total_calories = totals.calories;
        self.total_protein = totals.protein;
        self.total_carbs = totals.carbs;
        self.total_fat = totals.fat;
    }

    /// Decode a stored log, discarding whatever totals were stored.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut log: Self = serde_json::from_str(json)?;
        log.recompute_totals();
        Ok(log)
    }
}
