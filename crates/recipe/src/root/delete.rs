use mealprep_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Deletes a recipe with its tags, ingredient links and plan assignments.
    /// Ingredient rows survive for other recipes.
    pub async fn delete(&self, id: i64) -> mealprep_shared::Result<()> {
        let statement = Query::delete()
            .from_table(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealprep_shared::not_found!("recipe");
        }

        tracing::info!(recipe.id = id, "recipe deleted");

        Ok(())
    }
}
