#![allow(dead_code)]

use mealprep_recipe::{CreateInput, IngredientInput};
use mealprep_shared::{State, recipe::MealType};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    mealprep_db::migrate(&pool).await?;

    Ok(State::single(pool))
}

pub async fn create_recipe(
    state: &State,
    name: &str,
    meal_types: &[MealType],
    ingredients: &[&str],
) -> anyhow::Result<i64> {
    let id = mealprep_recipe::Command::new(state.clone())
        .create(CreateInput {
            meal_types: meal_types.to_vec(),
            ingredients: ingredients
                .iter()
                .map(|name| IngredientInput {
                    name: name.to_string(),
                    amount: 1,
                    unit: None,
                })
                .collect(),
            ..CreateInput::named(name)
        })
        .await?;

    Ok(id)
}
