mod create;
mod csv_import;
mod delete;
mod import;
mod ingredient;
mod update;

use mealprep_db::table::{Ingredient, RecipeIngredient, RecipeMealType};
use mealprep_shared::recipe::MealType;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqliteConnection;
use std::ops::Deref;

pub use create::{CreateInput, IngredientInput};
pub use csv_import::parse_csv;
pub use import::ImportReport;
pub use ingredient::UpdateIngredientInput;
pub use update::UpdateInput;

#[derive(Clone)]
pub struct Command {
    state: mealprep_shared::State,
}

impl Deref for Command {
    type Target = mealprep_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: mealprep_shared::State) -> Self {
        Self { state }
    }
}

/// Returns the id of the ingredient named exactly `name`, creating it first if needed.
pub(crate) async fn ensure_ingredient(
    conn: &mut SqliteConnection,
    name: &str,
) -> mealprep_shared::Result<i64> {
    let statement = Query::insert()
        .into_table(Ingredient::Table)
        .columns([Ingredient::Name])
        .values_panic([name.into()])
        .on_conflict(OnConflict::column(Ingredient::Name).do_nothing().to_owned())
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    let statement = Query::select()
        .column(Ingredient::Id)
        .from(Ingredient::Table)
        .and_where(Expr::col(Ingredient::Name).eq(name))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let id = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
        .fetch_one(&mut *conn)
        .await?;

    Ok(id)
}

pub(crate) async fn link_ingredient(
    conn: &mut SqliteConnection,
    recipe_id: i64,
    position: i64,
    input: &IngredientInput,
) -> mealprep_shared::Result<i64> {
    let ingredient_id = ensure_ingredient(conn, &input.name).await?;

    let statement = Query::insert()
        .into_table(RecipeIngredient::Table)
        .columns([
            RecipeIngredient::RecipeId,
            RecipeIngredient::IngredientId,
            RecipeIngredient::Amount,
            RecipeIngredient::Unit,
            RecipeIngredient::Position,
        ])
        .values_panic([
            recipe_id.into(),
            ingredient_id.into(),
            input.amount.into(),
            input.unit.map(|u| u.to_string()).into(),
            position.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(ingredient_id)
}

pub(crate) async fn replace_meal_types(
    conn: &mut SqliteConnection,
    recipe_id: i64,
    meal_types: &[MealType],
) -> mealprep_shared::Result<()> {
    let statement = Query::delete()
        .from_table(RecipeMealType::Table)
        .and_where(Expr::col(RecipeMealType::RecipeId).eq(recipe_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    let mut meal_types = meal_types.to_vec();
    meal_types.sort();
    meal_types.dedup();

    if meal_types.is_empty() {
        return Ok(());
    }

    let mut statement = Query::insert()
        .into_table(RecipeMealType::Table)
        .columns([RecipeMealType::RecipeId, RecipeMealType::MealType])
        .to_owned();

    for meal_type in meal_types {
        statement.values_panic([recipe_id.into(), meal_type.to_string().into()]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}
