//! Recipe and scaling routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use nutrilog_engine::{Nutrition, SavedRecipe};

use crate::error::Result;
use crate::handlers::{
    handle_create_recipe, handle_delete_recipe, handle_list_recipes, handle_scale_ingredient,
    CreateRecipeRequest, ScaleIngredientRequest,
};
use crate::AppState;

/// Create recipe routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_handler).post(create_handler))
        .route("/recipes/{id}", delete(delete_handler))
        .route("/scale/ingredient", post(scale_handler))
}

/// GET /recipes - Saved recipes in insertion order.
async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<SavedRecipe>>> {
    Ok(Json(handle_list_recipes(&state.store).await?))
}

/// POST /recipes - Build and save a recipe.
async fn create_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<SavedRecipe>)> {
    let recipe = handle_create_recipe(&state.store, request).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// DELETE /recipes/{id} - Delete a saved recipe.
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    handle_delete_recipe(&state.store, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /scale/ingredient - Scale label values to the amount used.
async fn scale_handler(Json(request): Json<ScaleIngredientRequest>) -> Json<Nutrition> {
    Json(handle_scale_ingredient(request))
}
