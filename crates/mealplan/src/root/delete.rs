use mealprep_db::table::MealPlan;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Removes the plan along with every assignment it holds.
    pub async fn delete(&self, id: i64) -> mealprep_shared::Result<()> {
        let statement = Query::delete()
            .from_table(MealPlan::Table)
            .and_where(Expr::col(MealPlan::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealprep_shared::not_found!("meal plan");
        }

        tracing::info!(plan.id = id, "meal plan deleted");

        Ok(())
    }
}
