use mealprep_db::table::MealPlanRecipe;
use mealprep_shared::{mealplan::Day, recipe::MealType};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;

use crate::Assignment;

/// One recipe to place on a day.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub recipe_id: i64,
    #[serde(default)]
    pub meal_type: Option<MealType>,
}

impl super::Command {
    pub async fn clear_day(&self, plan_id: i64, day: Day) -> mealprep_shared::Result<()> {
        let mut conn = self.write_db.acquire().await?;
        clear(&mut conn, plan_id, day).await
    }

    /// Replaces the whole content of a day. The delete and the inserts share
    /// one transaction: readers see either the old day or the new one.
    pub async fn update_day(
        &self,
        plan_id: i64,
        day: Day,
        slots: Vec<Slot>,
    ) -> mealprep_shared::Result<Vec<Assignment>> {
        let mut tx = self.write_db.begin().await?;

        clear(&mut tx, plan_id, day).await?;

        if !slots.is_empty() {
            let mut statement = Query::insert()
                .into_table(MealPlanRecipe::Table)
                .columns([
                    MealPlanRecipe::PlanId,
                    MealPlanRecipe::RecipeId,
                    MealPlanRecipe::Day,
                    MealPlanRecipe::MealType,
                ])
                .to_owned();

            for slot in &slots {
                statement.values_panic([
                    plan_id.into(),
                    slot.recipe_id.into(),
                    day.to_string().into(),
                    slot.meal_type.map(|m| m.to_string()).into(),
                ]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::debug!(plan.id = plan_id, %day, slots = slots.len(), "day updated");

        self.recipes_for_day(plan_id, day).await
    }
}

async fn clear(conn: &mut SqliteConnection, plan_id: i64, day: Day) -> mealprep_shared::Result<()> {
    let statement = Query::delete()
        .from_table(MealPlanRecipe::Table)
        .and_where(Expr::col(MealPlanRecipe::PlanId).eq(plan_id))
        .and_where(Expr::col(MealPlanRecipe::Day).eq(day.to_string()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}
