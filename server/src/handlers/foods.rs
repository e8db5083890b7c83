//! Food catalogue handlers.

use super::lenient;
use crate::error::{AppError, Result};
use nutrilog_engine::food::{self, FoodCategory, FoodItem};
use nutrilog_engine::{DailyLog, NutritionStore};
use serde::Deserialize;

/// Query string for catalogue search.
#[derive(Debug, Default, Deserialize)]
pub struct FoodQuery {
    /// Case-insensitive name fragment
    pub q: Option<String>,
    /// Category name, e.g. `protein`
    pub category: Option<String>,
}

/// Request body for quick-adding a catalogue food.
#[derive(Debug, Deserialize)]
pub struct LogFoodRequest {
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub grams: f64,
}

pub fn handle_search_foods(query: FoodQuery) -> Result<Vec<&'static FoodItem>> {
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            FoodCategory::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown food category '{}'", raw)))?,
        ),
    };
    Ok(food::search(query.q.as_deref().unwrap_or(""), category))
}

pub async fn handle_log_food(
    store: &NutritionStore,
    id: &str,
    request: LogFoodRequest,
) -> Result<DailyLog> {
    let item = food::find(id).ok_or_else(|| AppError::NotFound(format!("food '{}'", id)))?;
    if request.grams <= 0.0 {
        return Err(AppError::BadRequest("amount must be greater than zero".to_string()));
    }

    let meal = item.quick_add(request.grams, store.now_millis());
    Ok(store.add_meal(meal).await?)
}
