//! Saved batch recipes and the ingredient records they are built from.

use crate::meal::new_id;
use crate::nutrition::Nutrition;
use crate::scale;
use crate::{RecipeId, Timestamp};
use serde::{Deserialize, Serialize};

/// One ingredient of a recipe, already scaled to the amount used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Amount used, in `unit`
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    /// Scale a label (`label` per `label_weight`) to `amount` used.
    pub fn from_label(
        name: impl Into<String>,
        label: Nutrition,
        label_weight: f64,
        amount: f64,
        unit: impl Into<String>,
    ) -> Self {
        let scaled = scale::scale_ingredient(label, label_weight, amount);
        Self {
            id: new_id(),
            name: name.into(),
            calories: scaled.calories,
            protein: scaled.protein,
            carbs: scaled.carbs,
            fat: scaled.fat,
            amount: scale::quantity_or_zero(amount),
            unit: unit.into(),
        }
    }

    pub fn nutrition(&self) -> Nutrition {
        Nutrition::new(self.calories, self.protein, self.carbs, self.fat)
    }
}

/// A reusable batch definition. Nutrition covers the entire batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    pub id: RecipeId,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Informational; totals are not re-aggregated from it after saving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
    pub created_at: Timestamp,
}

impl SavedRecipe {
    /// A recipe with explicit batch totals.
    pub fn new(name: impl Into<String>, batch: Nutrition, created_at: Timestamp) -> Self {
        let batch = batch.non_negative().rounded_for_log();
        Self {
            id: new_id(),
            name: name.into(),
            calories: batch.calories,
            protein: batch.protein,
            carbs: batch.carbs,
            fat: batch.fat,
            ingredients: None,
            created_at,
        }
    }

    /// A recipe whose batch totals are the sum of `ingredients`.
    pub fn from_ingredients(
        name: impl Into<String>,
        ingredients: Vec<Ingredient>,
        created_at: Timestamp,
    ) -> Self {
        let batch = scale::sum_ingredients(&ingredients);
        Self {
            ingredients: Some(ingredients),
            ..Self::new(name, batch, created_at)
        }
    }

    /// Batch totals.
    pub fn nutrition(&self) -> Nutrition {
        Nutrition::new(self.calories, self.protein, self.carbs, self.fat)
    }

    /// Per-serving nutrition when the batch is split `serving_count` ways.
    pub fn per_serving(&self, serving_count: f64) -> Nutrition {
        scale::per_serving(self.nutrition(), serving_count)
    }
}
