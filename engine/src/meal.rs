//! Logged meals.

use crate::nutrition::Nutrition;
use crate::scale;
use crate::{MealId, Timestamp};
use serde::{Deserialize, Serialize};

/// How a meal was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealKind {
    /// Built from raw ingredients or a food-database entry
    Custom,
    /// Portioned from a batch recipe
    Prepped,
}

/// One logged intake event. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Opaque unique identifier
    pub id: MealId,
    /// Display name
    pub name: String,
    /// Whole kcal
    pub calories: f64,
    /// Grams, one decimal
    pub protein: f64,
    /// Grams, one decimal
    pub carbs: f64,
    /// Grams, one decimal
    pub fat: f64,
    /// Recipe servings represented (1 for ad-hoc foods)
    pub servings: f64,
    /// Creation instant (milliseconds since epoch)
    pub timestamp: Timestamp,
    #[serde(rename = "type")]
    pub kind: MealKind,
}

/// Generate a fresh meal, recipe or ingredient identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Meal {
    /// Create a meal. Nutrition is clamped non-negative and rounded for the
    /// log (integer calories, one-decimal macros).
    pub fn new(
        name: impl Into<String>,
        nutrition: Nutrition,
        servings: f64,
        kind: MealKind,
        timestamp: Timestamp,
    ) -> Self {
        let nutrition = nutrition.non_negative().rounded_for_log();
        Self {
            id: new_id(),
            name: name.into(),
            calories: nutrition.calories,
            protein: nutrition.protein,
            carbs: nutrition.carbs,
            fat: nutrition.fat,
            servings: scale::guard_divisor(servings),
            timestamp,
            kind,
        }
    }

    /// An ad-hoc food, one serving.
    pub fn custom(name: impl Into<String>, nutrition: Nutrition, timestamp: Timestamp) -> Self {
        Self::new(name, nutrition, 1.0, MealKind::Custom, timestamp)
    }

    /// A portion of a batch recipe: `servings_to_log` servings of
    /// `per_serving`, named `"<name> (<n> serving[s])"`.
    pub fn prepped_portion(
        recipe_name: &str,
        per_serving: Nutrition,
        servings_to_log: f64,
        timestamp: Timestamp,
    ) -> Self {
        let servings = scale::guard_divisor(servings_to_log);
        let logged = scale::logged_amount(per_serving, servings);
        let suffix = if servings == 1.0 { "" } else { "s" };
        Self::new(
            format!("{} ({} serving{})", recipe_name, servings, suffix),
            logged,
            servings,
            MealKind::Prepped,
            timestamp,
        )
    }

    /// Replace the generated identifier.
    pub fn with_id(mut self, id: impl Into<MealId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn nutrition(&self) -> Nutrition {
        Nutrition::new(self.calories, self.protein, self.carbs, self.fat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_meal_rounds_for_log() {
        let meal = Meal::custom("Toast", Nutrition::new(120.6, 4.44, 20.05, 1.0), 1000);
        assert_eq!(meal.calories, 121.0);
        assert_eq!(meal.protein, 4.4);
        assert_eq!(meal.carbs, 20.1);
        assert_eq!(meal.servings, 1.0);
        assert_eq!(meal.kind, MealKind::Custom);
        assert!(!meal.id.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let a = Meal::custom("A", Nutrition::ZERO, 1);
        let b = Meal::custom("A", Nutrition::ZERO, 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn prepped_portion_names_and_scales() {
        let per = Nutrition::new(200.0, 15.0, 20.0, 5.0);
        let meal = Meal::prepped_portion("Chili", per, 2.0, 5000);
        assert_eq!(meal.name, "Chili (2 servings)");
        assert_eq!(meal.nutrition(), Nutrition::new(400.0, 30.0, 40.0, 10.0));
        assert_eq!(meal.servings, 2.0);
        assert_eq!(meal.kind, MealKind::Prepped);

        let single = Meal::prepped_portion("Chili", per, 1.0, 5000);
        assert_eq!(single.name, "Chili (1 serving)");

        let half = Meal::prepped_portion("Chili", per, 0.5, 5000);
        assert_eq!(half.name, "Chili (0.5 servings)");
        assert_eq!(half.calories, 100.0);
    }

    #[test]
    fn prepped_portion_rounds_calories_to_integer() {
        let per = Nutrition::new(333.3, 10.0, 10.0, 10.0);
        let meal = Meal::prepped_portion("Soup", per, 1.0, 0);
        assert_eq!(meal.calories, 333.0);
    }

    #[test]
    fn serialization_format() {
        let meal = Meal::custom("Apple", Nutrition::new(95.0, 0.5, 25.0, 0.3), 42).with_id("m-1");
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["id"], "m-1");
        assert_eq!(json["type"], "custom");
        assert_eq!(json["timestamp"], 42);
        assert!(json.get("kind").is_none());
    }
}
