//! Daily log, meal and history handlers.

use super::lenient;
use crate::error::{AppError, Result};
use nutrilog_engine::{
    DailyLog, GoalProgress, HistoryEntry, LogDate, Meal, MealKind, Nutrition, NutritionStore,
};
use serde::{Deserialize, Serialize};

/// Today's log with progress against the calorie goal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    pub log: DailyLog,
    pub progress: GoalProgress,
}

/// Request body for logging a meal directly.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMealRequest {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub fat: f64,
    #[serde(default, deserialize_with = "lenient::optional_quantity")]
    pub servings: Option<f64>,
    #[serde(default, rename = "type")]
    pub kind: Option<MealKind>,
}

/// Request body for logging servings of a batch recipe.
///
/// Either `recipeId` names a saved recipe, or `name` and the batch totals
/// are given inline.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepMealRequest {
    pub recipe_id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_quantity")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub fat: f64,
    #[serde(default, deserialize_with = "lenient::optional_quantity")]
    pub total_servings: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_quantity")]
    pub servings_to_log: Option<f64>,
}

/// The logged prepped meal and the per-serving figures it was built from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepMealResponse {
    pub per_serving: Nutrition,
    pub meal: Meal,
    pub log: DailyLog,
}

/// Result of vaulting the current day.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultResponse {
    /// False when today's log was empty and nothing was archived
    pub vaulted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<HistoryEntry>,
}

/// Parse a `YYYY-MM-DD` path segment.
pub fn parse_date(raw: &str) -> Result<LogDate> {
    LogDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date '{}', expected YYYY-MM-DD", raw)))
}

fn required_name(name: Option<&str>) -> Result<String> {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(AppError::BadRequest("meal name is required".to_string())),
    }
}

pub async fn handle_today(store: &NutritionStore) -> Result<TodayResponse> {
    let log = store.today_log().await;
    let goal = store.get_settings().await.daily_calorie_goal;
    let progress = GoalProgress::compute(log.total_calories(), goal);
    Ok(TodayResponse { log, progress })
}

pub async fn handle_get_log(store: &NutritionStore, date: &str) -> Result<DailyLog> {
    let date = parse_date(date)?;
    Ok(store.get_log(date).await)
}

pub async fn handle_all_logs(store: &NutritionStore) -> Result<Vec<DailyLog>> {
    Ok(store.all_logs().await)
}

pub async fn handle_add_meal(store: &NutritionStore, request: AddMealRequest) -> Result<DailyLog> {
    let name = required_name(Some(request.name.as_str()))?;
    let nutrition = Nutrition::new(request.calories, request.protein, request.carbs, request.fat);
    let meal = Meal::new(
        name,
        nutrition,
        request.servings.unwrap_or(1.0),
        request.kind.unwrap_or(MealKind::Custom),
        store.now_millis(),
    );
    Ok(store.add_meal(meal).await?)
}

pub async fn handle_prep_meal(
    store: &NutritionStore,
    request: PrepMealRequest,
) -> Result<PrepMealResponse> {
    let servings_to_log = request.servings_to_log.unwrap_or(1.0);

    let (name, per_serving) = match &request.recipe_id {
        Some(id) => {
            let recipe = store
                .find_recipe(id)
                .await
                .ok_or_else(|| AppError::NotFound(format!("recipe '{}'", id)))?;
            let total_servings = request.total_servings.unwrap_or(1.0);
            (recipe.name.clone(), recipe.per_serving(total_servings))
        }
        None => {
            let name = required_name(request.name.as_deref())?;
            let (calories, total_servings) = match (request.calories, request.total_servings) {
                (Some(calories), Some(servings)) if servings > 0.0 => (calories, servings),
                _ => {
                    return Err(AppError::BadRequest(
                        "calories and total servings are required".to_string(),
                    ))
                }
            };
            let batch = Nutrition::new(calories, request.protein, request.carbs, request.fat);
            (name, nutrilog_engine::scale::per_serving(batch, total_servings))
        }
    };

    let meal = Meal::prepped_portion(&name, per_serving, servings_to_log, store.now_millis());
    let log = store.add_meal(meal.clone()).await?;
    Ok(PrepMealResponse {
        per_serving,
        meal,
        log,
    })
}

pub async fn handle_remove_meal(
    store: &NutritionStore,
    date: &str,
    meal_id: &str,
) -> Result<DailyLog> {
    let date = parse_date(date)?;
    Ok(store.remove_meal(date, meal_id).await?)
}

pub async fn handle_vault(store: &NutritionStore) -> Result<VaultResponse> {
    let entry = store.vault_and_reset().await?;
    Ok(VaultResponse {
        vaulted: entry.is_some(),
        entry,
    })
}

pub async fn handle_history(store: &NutritionStore) -> Result<Vec<HistoryEntry>> {
    Ok(store.get_history().await)
}
