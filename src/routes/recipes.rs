use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mealprep_recipe::{CreateInput, ImportReport, IngredientInput, UpdateIngredientInput, UpdateInput};
use mealprep_shared::recipe::{Recipe, RecipeIngredient};

use super::AppState;
use crate::error::ApiResult;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Recipe>>> {
    Ok(Json(state.recipe_command.all().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInput>,
) -> ApiResult<(StatusCode, Json<Recipe>)> {
    let id = state.recipe_command.create(input).await?;

    Ok((StatusCode::CREATED, Json(load_recipe(&state, id).await?)))
}

pub async fn import(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<CreateInput>>,
) -> ApiResult<Json<ImportReport>> {
    Ok(Json(state.recipe_command.import(inputs).await?))
}

/// Body is CSV text with the `Name,Ingredients,Main Ingredient,Meal,Can batch` header.
pub async fn import_csv(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<Json<ImportReport>> {
    let inputs = mealprep_recipe::parse_csv(body.as_bytes())?;

    Ok(Json(state.recipe_command.import(inputs).await?))
}

/// Same payload as the list, meant to be fed back into the import.
pub async fn export(State(state): State<AppState>) -> ApiResult<Json<Vec<Recipe>>> {
    let recipes = state.recipe_command.all().await?;
    tracing::info!(recipes = recipes.len(), "recipes exported");

    Ok(Json(recipes))
}

pub async fn load(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Recipe>> {
    Ok(Json(load_recipe(&state, id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateInput>,
) -> ApiResult<Json<Recipe>> {
    state.recipe_command.update(id, input).await?;

    Ok(Json(load_recipe(&state, id).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.recipe_command.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_ingredient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<IngredientInput>,
) -> ApiResult<(StatusCode, Json<RecipeIngredient>)> {
    let ingredient = state.recipe_command.add_ingredient(id, input).await?;

    Ok((StatusCode::CREATED, Json(ingredient)))
}

pub async fn update_ingredient(
    State(state): State<AppState>,
    Path((id, ingredient_id)): Path<(i64, i64)>,
    Json(input): Json<UpdateIngredientInput>,
) -> ApiResult<Json<RecipeIngredient>> {
    Ok(Json(
        state
            .recipe_command
            .update_ingredient(id, ingredient_id, input)
            .await?,
    ))
}

pub async fn remove_ingredient(
    State(state): State<AppState>,
    Path((id, ingredient_id)): Path<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state
        .recipe_command
        .remove_ingredient(id, ingredient_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn load_recipe(state: &AppState, id: i64) -> mealprep_shared::Result<Recipe> {
    match state.recipe_command.load(id).await? {
        Some(recipe) => Ok(recipe),
        None => mealprep_shared::not_found!("recipe"),
    }
}
