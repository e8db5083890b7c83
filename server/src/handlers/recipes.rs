//! Recipe builder and saved-recipe handlers.

use super::lenient;
use crate::error::{AppError, Result};
use nutrilog_engine::scale::scale_ingredient;
use nutrilog_engine::{Ingredient, Nutrition, NutritionStore, SavedRecipe};
use serde::Deserialize;

/// Label values for one ingredient and how much of it went into the batch.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientInput {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub fat: f64,
    /// Weight the label values refer to
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub label_weight: f64,
    /// Amount used in the batch
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub amount: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "g".to_string()
}

impl IngredientInput {
    fn label(&self) -> Nutrition {
        Nutrition::new(self.calories, self.protein, self.carbs, self.fat)
    }

    fn into_ingredient(self) -> Ingredient {
        let label = self.label();
        Ingredient::from_label(self.name, label, self.label_weight, self.amount, self.unit)
    }
}

/// Request body for saving a recipe.
///
/// With `ingredients` the batch totals are computed from them; otherwise
/// the totals are taken as given.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientInput>,
    #[serde(default, deserialize_with = "lenient::optional_quantity")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub fat: f64,
}

/// Request body for previewing a scaled ingredient.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleIngredientRequest {
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub fat: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub label_weight: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub amount: f64,
}

pub async fn handle_list_recipes(store: &NutritionStore) -> Result<Vec<SavedRecipe>> {
    Ok(store.get_recipes().await)
}

pub async fn handle_create_recipe(
    store: &NutritionStore,
    request: CreateRecipeRequest,
) -> Result<SavedRecipe> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("recipe name is required".to_string()));
    }
    if request.ingredients.iter().any(|i| i.name.trim().is_empty()) {
        return Err(AppError::BadRequest("every ingredient needs a name".to_string()));
    }

    let created_at = store.now_millis();
    let recipe = if !request.ingredients.is_empty() {
        let ingredients = request
            .ingredients
            .into_iter()
            .map(IngredientInput::into_ingredient)
            .collect();
        SavedRecipe::from_ingredients(name, ingredients, created_at)
    } else if let Some(calories) = request.calories {
        let batch = Nutrition::new(calories, request.protein, request.carbs, request.fat);
        SavedRecipe::new(name, batch, created_at)
    } else {
        return Err(AppError::BadRequest(
            "add at least one ingredient or give the batch totals".to_string(),
        ));
    };

    store.save_recipe(recipe.clone()).await?;
    Ok(recipe)
}

pub async fn handle_delete_recipe(store: &NutritionStore, id: &str) -> Result<()> {
    if store.delete_recipe(id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("recipe '{}'", id)))
    }
}

pub fn handle_scale_ingredient(request: ScaleIngredientRequest) -> Nutrition {
    let label = Nutrition::new(request.calories, request.protein, request.carbs, request.fat);
    scale_ingredient(label, request.label_weight, request.amount)
}
