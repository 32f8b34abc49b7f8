mod ingredient;
mod recipe;

pub use ingredient::{Ingredient, IngredientUsage, RecipeSummary};
