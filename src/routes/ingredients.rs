use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mealprep_recipe::{Ingredient, IngredientUsage};

use super::AppState;
use crate::error::{ApiError, ApiResult};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Ingredient>>> {
    Ok(Json(state.recipe_command.list_ingredients().await?))
}

pub async fn load(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Ingredient>> {
    state
        .recipe_command
        .load_ingredient(id)
        .await?
        .map(Json)
        .ok_or(ApiError(mealprep_shared::Error::NotFound("ingredient")))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.recipe_command.delete_ingredient(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn recipes(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<IngredientUsage>> {
    state
        .recipe_command
        .recipes_for_ingredient(id)
        .await?
        .map(Json)
        .ok_or(ApiError(mealprep_shared::Error::NotFound("ingredient")))
}
