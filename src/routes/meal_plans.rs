use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use mealprep_mealplan::{
    AssignInput, Assignment, CreateInput, GenerateInput, MealPlanDetail, MealPlanInfo,
    RegenerateDayInput, Slot, UpdateAssignmentInput, UpdateInput,
};
use mealprep_shared::{Error, mealplan::Day};
use mealprep_shopping::ShoppingList;
use serde::Deserialize;
use time::OffsetDateTime;

use super::AppState;
use crate::error::{ApiError, ApiResult};

/// Generation options; missing ones come from the `generation` config section.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    pub days: Option<Vec<Day>>,
    pub meals_per_day: Option<usize>,
    pub filter_by_meal_type: Option<bool>,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateRequest {
    pub meals_per_day: Option<usize>,
    pub filter_by_meal_type: Option<bool>,
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveQuery {
    pub recipe_id: i64,
    pub day: Day,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<MealPlanInfo>>> {
    Ok(Json(state.meal_plan_command.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInput>,
) -> ApiResult<(StatusCode, Json<MealPlanDetail>)> {
    let id = state.meal_plan_command.create_meal_plan(input).await?;

    Ok((StatusCode::CREATED, Json(load_plan(&state, id).await?)))
}

pub async fn current(State(state): State<AppState>) -> ApiResult<Json<MealPlanDetail>> {
    state
        .meal_plan_command
        .current(OffsetDateTime::now_utc())
        .await?
        .map(Json)
        .ok_or(ApiError(Error::NotFound("meal plan")))
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<(StatusCode, Json<MealPlanDetail>)> {
    let input = GenerateInput {
        name: request.name,
        start_date: request.start_date,
        end_date: request.end_date,
        days: request.days.unwrap_or_else(Day::week),
        meals_per_day: request
            .meals_per_day
            .unwrap_or(state.generation.meals_per_day),
        filter_by_meal_type: request
            .filter_by_meal_type
            .unwrap_or(state.generation.filter_by_meal_type),
        seed: request.seed,
    };

    let plan = state.generator().generate(input).await?;

    Ok((StatusCode::CREATED, Json(plan)))
}

pub async fn load(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MealPlanDetail>> {
    Ok(Json(load_plan(&state, id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateInput>,
) -> ApiResult<Json<MealPlanInfo>> {
    Ok(Json(state.meal_plan_command.update(id, input).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.meal_plan_command.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<AssignInput>,
) -> ApiResult<(StatusCode, Json<Assignment>)> {
    let assignment = state.meal_plan_command.add_recipe(id, input).await?;

    Ok((StatusCode::CREATED, Json(assignment)))
}

pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateAssignmentInput>,
) -> ApiResult<Json<Vec<Assignment>>> {
    Ok(Json(state.meal_plan_command.update_recipe(id, input).await?))
}

pub async fn remove_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<RemoveQuery>,
) -> ApiResult<StatusCode> {
    state
        .meal_plan_command
        .remove_recipe(id, query.recipe_id, query.day)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn day(
    State(state): State<AppState>,
    Path((id, day)): Path<(i64, Day)>,
) -> ApiResult<Json<Vec<Assignment>>> {
    ensure_plan(&state, id).await?;

    Ok(Json(state.meal_plan_command.recipes_for_day(id, day).await?))
}

pub async fn update_day(
    State(state): State<AppState>,
    Path((id, day)): Path<(i64, Day)>,
    Json(slots): Json<Vec<Slot>>,
) -> ApiResult<Json<Vec<Assignment>>> {
    ensure_plan(&state, id).await?;

    Ok(Json(state.meal_plan_command.update_day(id, day, slots).await?))
}

pub async fn clear_day(
    State(state): State<AppState>,
    Path((id, day)): Path<(i64, Day)>,
) -> ApiResult<StatusCode> {
    ensure_plan(&state, id).await?;
    state.meal_plan_command.clear_day(id, day).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn regenerate_day(
    State(state): State<AppState>,
    Path((id, day)): Path<(i64, Day)>,
    request: Option<Json<RegenerateRequest>>,
) -> ApiResult<Json<Vec<Assignment>>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let input = RegenerateDayInput {
        meals_per_day: request
            .meals_per_day
            .unwrap_or(state.generation.meals_per_day),
        filter_by_meal_type: request
            .filter_by_meal_type
            .unwrap_or(state.generation.filter_by_meal_type),
        seed: request.seed,
    };

    Ok(Json(state.generator().regenerate_day(id, day, input).await?))
}

pub async fn shopping_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ShoppingList>> {
    let Some(week_plan) = state.meal_plan_command.week_plan(id).await? else {
        return Err(ApiError(Error::NotFound("meal plan")));
    };

    Ok(Json(mealprep_shopping::generate_shopping_list(&week_plan)))
}

async fn load_plan(state: &AppState, id: i64) -> mealprep_shared::Result<MealPlanDetail> {
    match state.meal_plan_command.load(id).await? {
        Some(plan) => Ok(plan),
        None => mealprep_shared::not_found!("meal plan"),
    }
}

async fn ensure_plan(state: &AppState, id: i64) -> mealprep_shared::Result<()> {
    if state.meal_plan_command.load_info(id).await?.is_none() {
        mealprep_shared::not_found!("meal plan");
    }

    Ok(())
}
