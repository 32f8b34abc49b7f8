use mealprep_db::table::{Ingredient as IngredientTable, Recipe, RecipeIngredient};
use sea_query::{Expr, ExprTrait, JoinType, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Serialize, FromRow, Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, FromRow, Clone, Debug, PartialEq)]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct IngredientUsage {
    pub id: i64,
    pub name: String,
    pub recipes: Vec<RecipeSummary>,
}

impl crate::Command {
    pub async fn list_ingredients(&self) -> mealprep_shared::Result<Vec<Ingredient>> {
        let statement = Query::select()
            .columns([IngredientTable::Id, IngredientTable::Name])
            .from(IngredientTable::Table)
            .order_by(IngredientTable::Name, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Ingredient, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn load_ingredient(&self, id: i64) -> mealprep_shared::Result<Option<Ingredient>> {
        let statement = Query::select()
            .columns([IngredientTable::Id, IngredientTable::Name])
            .from(IngredientTable::Table)
            .and_where(Expr::col(IngredientTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Ingredient, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    /// Exact, case-sensitive name lookup.
    pub async fn find_ingredient(&self, name: &str) -> mealprep_shared::Result<Option<Ingredient>> {
        let statement = Query::select()
            .columns([IngredientTable::Id, IngredientTable::Name])
            .from(IngredientTable::Table)
            .and_where(Expr::col(IngredientTable::Name).eq(name))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Ingredient, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn recipes_for_ingredient(
        &self,
        id: i64,
    ) -> mealprep_shared::Result<Option<IngredientUsage>> {
        let Some(ingredient) = self.load_ingredient(id).await? else {
            return Ok(None);
        };

        let statement = Query::select()
            .columns([(Recipe::Table, Recipe::Id), (Recipe::Table, Recipe::Name)])
            .from(RecipeIngredient::Table)
            .join(
                JoinType::InnerJoin,
                Recipe::Table,
                Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId))
                    .equals((Recipe::Table, Recipe::Id)),
            )
            .and_where(Expr::col((RecipeIngredient::Table, RecipeIngredient::IngredientId)).eq(id))
            .order_by((Recipe::Table, Recipe::Name), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let recipes = sqlx::query_as_with::<_, RecipeSummary, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(Some(IngredientUsage {
            id: ingredient.id,
            name: ingredient.name,
            recipes,
        }))
    }
}
