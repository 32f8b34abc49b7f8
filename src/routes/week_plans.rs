use axum::{Json, extract::State};
use mealprep_mealplan::Rand;
use mealprep_shared::{mealplan::WeekPlan, recipe::Recipe};
use mealprep_shopping::ShoppingList;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiResult;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShuffleRequest {
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceRequest {
    pub index: usize,
    pub week_plan: WeekPlan,
    /// Candidates to draw from; the whole catalog when absent.
    pub pool: Option<Vec<Recipe>>,
    pub seed: Option<u64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceResponse {
    pub week_plan: WeekPlan,
    pub shopping_list: ShoppingList,
}

/// Unsaved preview plan drawn from the catalog.
pub async fn shuffle(
    State(state): State<AppState>,
    request: Option<Json<ShuffleRequest>>,
) -> ApiResult<Json<WeekPlan>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let recipes = state.recipe_command.all().await?;
    let mut rng = Rand::new(request.seed);

    Ok(Json(mealprep_mealplan::shuffle_week(&recipes, &mut rng)))
}

pub async fn replace(
    State(state): State<AppState>,
    Json(request): Json<ReplaceRequest>,
) -> ApiResult<Json<ReplaceResponse>> {
    let pool = match request.pool {
        Some(pool) => pool,
        None => state.recipe_command.all().await?,
    };

    let mut rng = Rand::new(request.seed);
    let week_plan =
        mealprep_mealplan::get_replacement_meal(request.index, request.week_plan, &pool, &mut rng);
    let shopping_list = mealprep_shopping::generate_shopping_list(&week_plan);

    Ok(Json(ReplaceResponse {
        week_plan,
        shopping_list,
    }))
}

pub async fn shopping_list(Json(week_plan): Json<WeekPlan>) -> Json<ShoppingList> {
    Json(mealprep_shopping::generate_shopping_list(&week_plan))
}
