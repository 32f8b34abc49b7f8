use mealprep_db::table::{Ingredient, RecipeIngredient};
use mealprep_shared::recipe::{self, Unit};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use super::IngredientInput;

#[derive(Validate, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngredientInput {
    #[validate(range(min = 0))]
    pub amount: Option<i64>,
    #[serde(default)]
    pub unit: Option<Unit>,
}

impl super::Command {
    /// Attaches an ingredient by name, creating the ingredient row on first use.
    pub async fn add_ingredient(
        &self,
        recipe_id: i64,
        input: IngredientInput,
    ) -> mealprep_shared::Result<recipe::RecipeIngredient> {
        input.validate()?;

        if !self.exists(recipe_id).await? {
            mealprep_shared::not_found!("recipe");
        }

        let mut tx = self.write_db.begin().await?;

        let position = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM recipe_ingredient WHERE recipe_id = ?",
        )
        .bind(recipe_id)
        .fetch_one(&mut *tx)
        .await?;

        let id = match super::link_ingredient(&mut tx, recipe_id, position, &input).await {
            Err(mealprep_shared::Error::Conflict(_)) => {
                return Err(mealprep_shared::Error::Conflict(format!(
                    "{} is already in this recipe",
                    input.name
                )));
            }
            res => res?,
        };

        tx.commit().await?;

        Ok(recipe::RecipeIngredient {
            id,
            name: input.name,
            amount: input.amount,
            unit: input.unit,
        })
    }

    pub async fn update_ingredient(
        &self,
        recipe_id: i64,
        ingredient_id: i64,
        input: UpdateIngredientInput,
    ) -> mealprep_shared::Result<recipe::RecipeIngredient> {
        input.validate()?;

        if input.amount.is_none() && input.unit.is_none() {
            mealprep_shared::user!("amount or unit is required");
        }

        let mut statement = Query::update()
            .table(RecipeIngredient::Table)
            .and_where(Expr::col(RecipeIngredient::RecipeId).eq(recipe_id))
            .and_where(Expr::col(RecipeIngredient::IngredientId).eq(ingredient_id))
            .to_owned();

        if let Some(amount) = input.amount {
            statement.value(RecipeIngredient::Amount, amount);
        }

        if let Some(unit) = input.unit {
            statement.value(RecipeIngredient::Unit, unit.to_string());
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealprep_shared::not_found!("recipe ingredient");
        }

        let Some(recipe) = self.load(recipe_id).await? else {
            mealprep_shared::not_found!("recipe");
        };

        match recipe.ingredients.into_iter().find(|i| i.id == ingredient_id) {
            Some(ingredient) => Ok(ingredient),
            None => mealprep_shared::not_found!("recipe ingredient"),
        }
    }

    pub async fn remove_ingredient(
        &self,
        recipe_id: i64,
        ingredient_id: i64,
    ) -> mealprep_shared::Result<()> {
        let statement = Query::delete()
            .from_table(RecipeIngredient::Table)
            .and_where(Expr::col(RecipeIngredient::RecipeId).eq(recipe_id))
            .and_where(Expr::col(RecipeIngredient::IngredientId).eq(ingredient_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealprep_shared::not_found!("recipe ingredient");
        }

        Ok(())
    }

    /// Deletes an ingredient and detaches it from every recipe using it.
    pub async fn delete_ingredient(&self, id: i64) -> mealprep_shared::Result<()> {
        let statement = Query::delete()
            .from_table(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealprep_shared::not_found!("ingredient");
        }

        Ok(())
    }
}
