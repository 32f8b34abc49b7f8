use axum::{
    Router,
    routing::{get, post, put},
};
use sqlx::SqlitePool;

use crate::config::GenerationConfig;

mod health;
mod ingredients;
mod meal_plans;
mod recipes;
mod week_plans;

pub use health::{health, ready};

#[derive(Clone)]
pub struct AppState {
    pub recipe_command: mealprep_recipe::Command,
    pub meal_plan_command: mealprep_mealplan::Command,
    pub generation: GenerationConfig,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(state: mealprep_shared::State, generation: GenerationConfig) -> Self {
        Self {
            recipe_command: mealprep_recipe::Command::new(state.clone()),
            meal_plan_command: mealprep_mealplan::Command::new(state.clone()),
            generation,
            pool: state.read_db,
        }
    }

    pub fn generator(
        &self,
    ) -> mealprep_mealplan::Generator<mealprep_recipe::Command, mealprep_mealplan::Command> {
        mealprep_mealplan::Generator::new(
            self.recipe_command.clone(),
            self.meal_plan_command.clone(),
        )
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route(
            "/api/recipes",
            get(recipes::list).post(recipes::create),
        )
        .route("/api/recipes/import", post(recipes::import))
        .route("/api/recipes/import/csv", post(recipes::import_csv))
        .route("/api/recipes/export", get(recipes::export))
        .route(
            "/api/recipes/{id}",
            get(recipes::load)
                .put(recipes::update)
                .delete(recipes::delete),
        )
        .route(
            "/api/recipes/{id}/ingredients",
            post(recipes::add_ingredient),
        )
        .route(
            "/api/recipes/{id}/ingredients/{ingredient_id}",
            put(recipes::update_ingredient).delete(recipes::remove_ingredient),
        )
        .route("/api/ingredients", get(ingredients::list))
        .route(
            "/api/ingredients/{id}",
            get(ingredients::load).delete(ingredients::delete),
        )
        .route("/api/ingredients/{id}/recipes", get(ingredients::recipes))
        .route(
            "/api/meal-plans",
            get(meal_plans::list).post(meal_plans::create),
        )
        .route("/api/meal-plans/current", get(meal_plans::current))
        .route("/api/meal-plans/generate", post(meal_plans::generate))
        .route(
            "/api/meal-plans/{id}",
            get(meal_plans::load)
                .put(meal_plans::update)
                .delete(meal_plans::delete),
        )
        .route(
            "/api/meal-plans/{id}/recipes",
            post(meal_plans::add_recipe)
                .put(meal_plans::update_recipe)
                .delete(meal_plans::remove_recipe),
        )
        .route(
            "/api/meal-plans/{id}/days/{day}",
            get(meal_plans::day)
                .put(meal_plans::update_day)
                .delete(meal_plans::clear_day),
        )
        .route(
            "/api/meal-plans/{id}/days/{day}/regenerate",
            post(meal_plans::regenerate_day),
        )
        .route(
            "/api/meal-plans/{id}/shopping-list",
            get(meal_plans::shopping_list),
        )
        .route("/api/week-plans/shuffle", post(week_plans::shuffle))
        .route("/api/week-plans/replace", post(week_plans::replace))
        .route(
            "/api/week-plans/shopping-list",
            post(week_plans::shopping_list),
        )
        .with_state(app_state)
}
