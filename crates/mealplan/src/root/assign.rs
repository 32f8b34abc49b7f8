use mealprep_db::table::MealPlanRecipe;
use mealprep_shared::{mealplan::Day, recipe::MealType};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;

use crate::Assignment;

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignInput {
    pub recipe_id: i64,
    pub day: Day,
    #[serde(default)]
    pub meal_type: Option<MealType>,
}

/// Targets every assignment of `recipe_id` on `day`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssignmentInput {
    pub recipe_id: i64,
    pub day: Day,
    #[serde(default)]
    pub new_recipe_id: Option<i64>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
}

impl super::Command {
    pub async fn add_recipe(
        &self,
        plan_id: i64,
        input: AssignInput,
    ) -> mealprep_shared::Result<Assignment> {
        if self.load_info(plan_id).await?.is_none() {
            mealprep_shared::not_found!("meal plan");
        }

        let statement = Query::insert()
            .into_table(MealPlanRecipe::Table)
            .columns([
                MealPlanRecipe::PlanId,
                MealPlanRecipe::RecipeId,
                MealPlanRecipe::Day,
                MealPlanRecipe::MealType,
            ])
            .values_panic([
                plan_id.into(),
                input.recipe_id.into(),
                input.day.to_string().into(),
                input.meal_type.map(|m| m.to_string()).into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        match self.load_assignment(id).await? {
            Some(assignment) => Ok(assignment),
            None => mealprep_shared::not_found!("assignment"),
        }
    }

    pub async fn remove_recipe(
        &self,
        plan_id: i64,
        recipe_id: i64,
        day: Day,
    ) -> mealprep_shared::Result<()> {
        let statement = Query::delete()
            .from_table(MealPlanRecipe::Table)
            .and_where(Expr::col(MealPlanRecipe::PlanId).eq(plan_id))
            .and_where(Expr::col(MealPlanRecipe::RecipeId).eq(recipe_id))
            .and_where(Expr::col(MealPlanRecipe::Day).eq(day.to_string()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealprep_shared::not_found!("assignment");
        }

        Ok(())
    }

    /// Swaps the recipe and/or the meal type of matching assignments.
    pub async fn update_recipe(
        &self,
        plan_id: i64,
        input: UpdateAssignmentInput,
    ) -> mealprep_shared::Result<Vec<Assignment>> {
        if input.new_recipe_id.is_none() && input.meal_type.is_none() {
            mealprep_shared::user!("newRecipeId or mealType is required");
        }

        let mut statement = Query::update()
            .table(MealPlanRecipe::Table)
            .and_where(Expr::col(MealPlanRecipe::PlanId).eq(plan_id))
            .and_where(Expr::col(MealPlanRecipe::RecipeId).eq(input.recipe_id))
            .and_where(Expr::col(MealPlanRecipe::Day).eq(input.day.to_string()))
            .to_owned();

        if let Some(recipe_id) = input.new_recipe_id {
            statement.value(MealPlanRecipe::RecipeId, recipe_id);
        }

        if let Some(meal_type) = input.meal_type {
            statement.value(MealPlanRecipe::MealType, meal_type.to_string());
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealprep_shared::not_found!("assignment");
        }

        let recipe_id = input.new_recipe_id.unwrap_or(input.recipe_id);

        Ok(self
            .recipes_for_day(plan_id, input.day)
            .await?
            .into_iter()
            .filter(|a| a.recipe_id == recipe_id)
            .collect())
    }
}
