mod ingredient;
mod meal_plan;
mod meal_plan_recipe;
mod recipe;
mod recipe_ingredient;
mod recipe_meal_type;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealprep",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateIdx1,
        ingredient::CreateTable,
        ingredient::CreateIdx1,
        recipe_ingredient::CreateTable,
        recipe_meal_type::CreateTable,
        meal_plan::CreateTable,
        meal_plan_recipe::CreateTable,
        meal_plan_recipe::CreateIdx1,
        meal_plan_recipe::CreateIdx2,
        meal_plan_recipe::CreateIdx3,
    ]
);
