use std::collections::HashMap;

use mealprep_db::table::{Ingredient, Recipe, RecipeIngredient, RecipeMealType};
use mealprep_shared::recipe::{self, MealType, Protein, Unit};
use sea_query::{Expr, ExprTrait, JoinType, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{prelude::FromRow, types::Text};

#[derive(FromRow)]
struct RecipeRow {
    id: i64,
    name: String,
    main_protein: Option<Text<Protein>>,
    instructions: Option<String>,
    can_batch: Option<bool>,
    last_used: Option<i64>,
}

#[derive(FromRow)]
struct MealTypeRow {
    recipe_id: i64,
    meal_type: Text<MealType>,
}

#[derive(FromRow)]
struct IngredientRow {
    recipe_id: i64,
    id: i64,
    name: String,
    amount: i64,
    unit: Option<Text<Unit>>,
}

impl crate::Command {
    pub async fn load(&self, id: i64) -> mealprep_shared::Result<Option<recipe::Recipe>> {
        Ok(self.fetch(Some(id)).await?.into_iter().next())
    }

    /// Every recipe of the catalog with tags and ingredients, ordered by id.
    pub async fn all(&self) -> mealprep_shared::Result<Vec<recipe::Recipe>> {
        self.fetch(None).await
    }

    pub async fn exists(&self, id: i64) -> mealprep_shared::Result<bool> {
        let statement = Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.is_some())
    }

    /// Id of the recipe named exactly `name`.
    pub async fn find_by_name(&self, name: &str) -> mealprep_shared::Result<Option<i64>> {
        let statement = Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Name).eq(name))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(id)
    }

    async fn fetch(&self, id: Option<i64>) -> mealprep_shared::Result<Vec<recipe::Recipe>> {
        let mut statement = Query::select()
            .columns([
                Recipe::Id,
                Recipe::Name,
                Recipe::MainProtein,
                Recipe::Instructions,
                Recipe::CanBatch,
                Recipe::LastUsed,
            ])
            .from(Recipe::Table)
            .order_by(Recipe::Id, Order::Asc)
            .to_owned();

        if let Some(id) = id {
            statement.and_where(Expr::col(Recipe::Id).eq(id));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        let mut meal_types = self.fetch_meal_types(id).await?;
        let mut ingredients = self.fetch_ingredients(id).await?;

        rows.into_iter()
            .map(|row| {
                Ok(recipe::Recipe {
                    meal_types: meal_types.remove(&row.id).unwrap_or_default(),
                    ingredients: ingredients.remove(&row.id).unwrap_or_default(),
                    id: row.id,
                    name: row.name,
                    main_protein: row.main_protein.map(|p| p.0),
                    instructions: row.instructions,
                    can_batch: row.can_batch,
                    last_used: mealprep_shared::from_opt_timestamp(row.last_used)?,
                })
            })
            .collect()
    }

    async fn fetch_meal_types(
        &self,
        id: Option<i64>,
    ) -> mealprep_shared::Result<HashMap<i64, Vec<MealType>>> {
        let mut statement = Query::select()
            .columns([RecipeMealType::RecipeId, RecipeMealType::MealType])
            .from(RecipeMealType::Table)
            .to_owned();

        if let Some(id) = id {
            statement.and_where(Expr::col(RecipeMealType::RecipeId).eq(id));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealTypeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut meal_types: HashMap<i64, Vec<MealType>> = HashMap::new();
        for row in rows {
            meal_types.entry(row.recipe_id).or_default().push(row.meal_type.0);
        }

        for tags in meal_types.values_mut() {
            tags.sort();
        }

        Ok(meal_types)
    }

    async fn fetch_ingredients(
        &self,
        id: Option<i64>,
    ) -> mealprep_shared::Result<HashMap<i64, Vec<recipe::RecipeIngredient>>> {
        let mut statement = ingredients_statement();

        if let Some(id) = id {
            statement.and_where(Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId)).eq(id));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut ingredients: HashMap<i64, Vec<recipe::RecipeIngredient>> = HashMap::new();
        for row in rows {
            ingredients
                .entry(row.recipe_id)
                .or_default()
                .push(recipe::RecipeIngredient {
                    id: row.id,
                    name: row.name,
                    amount: row.amount,
                    unit: row.unit.map(|u| u.0),
                });
        }

        Ok(ingredients)
    }
}

fn ingredients_statement() -> SelectStatement {
    Query::select()
        .columns([
            (RecipeIngredient::Table, RecipeIngredient::RecipeId),
            (RecipeIngredient::Table, RecipeIngredient::Amount),
            (RecipeIngredient::Table, RecipeIngredient::Unit),
        ])
        .columns([(Ingredient::Table, Ingredient::Id), (Ingredient::Table, Ingredient::Name)])
        .from(RecipeIngredient::Table)
        .join(
            JoinType::InnerJoin,
            Ingredient::Table,
            Expr::col((RecipeIngredient::Table, RecipeIngredient::IngredientId))
                .equals((Ingredient::Table, Ingredient::Id)),
        )
        .order_by((RecipeIngredient::Table, RecipeIngredient::RecipeId), Order::Asc)
        .order_by((RecipeIngredient::Table, RecipeIngredient::Position), Order::Asc)
        .to_owned()
}
