use mealprep_db::table::Recipe;
use mealprep_shared::recipe::{MealType, Protein};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

#[derive(Validate, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInput {
    #[validate(length(min = 1, max = 150), custom(function = "mealprep_shared::not_blank"))]
    pub name: String,
    #[serde(default)]
    pub main_protein: Option<Protein>,
    #[serde(default)]
    pub meal_types: Vec<MealType>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub can_batch: Option<bool>,
}

impl super::Command {
    /// Replaces the basic information and meal-type tags of a recipe. Ingredients are left as is.
    pub async fn update(&self, id: i64, input: UpdateInput) -> mealprep_shared::Result<()> {
        input.validate()?;

        let mut tx = self.write_db.begin().await?;

        let statement = Query::update()
            .table(Recipe::Table)
            .value(Recipe::Name, &input.name)
            .value(Recipe::MainProtein, input.main_protein.map(|p| p.to_string()))
            .value(Recipe::Instructions, input.instructions.to_owned())
            .value(Recipe::CanBatch, input.can_batch)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            mealprep_shared::not_found!("recipe");
        }

        super::replace_meal_types(&mut tx, id, &input.meal_types).await?;

        tx.commit().await?;

        Ok(())
    }
}
