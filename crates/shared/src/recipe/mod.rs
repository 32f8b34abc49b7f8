use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Protein {
    Chicken,
    Beef,
    Pork,
    Bean,
    Egg,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Slots filled by the generator for each day, in order.
    pub const SLOTS: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    G,
    Ml,
    Pieces,
    Cup,
    Tbsp,
    Tsp,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub id: i64,
    pub name: String,
    pub amount: i64,
    pub unit: Option<Unit>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub main_protein: Option<Protein>,
    #[serde(default)]
    pub meal_types: Vec<MealType>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub can_batch: Option<bool>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_used: Option<OffsetDateTime>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn is_tagged(&self, meal_type: MealType) -> bool {
        self.meal_types.contains(&meal_type)
    }

    pub fn is_untagged(&self) -> bool {
        self.meal_types.is_empty()
    }

    /// Eligible for a slot when tagged with its meal type or carrying no tag at all.
    pub fn fits(&self, meal_type: MealType) -> bool {
        self.is_tagged(meal_type) || self.is_untagged()
    }

    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parses_lowercase() {
        assert_eq!("pieces".parse::<Unit>().unwrap(), Unit::Pieces);
        assert_eq!(Unit::Ml.to_string(), "ml");
        assert_eq!(serde_json::to_string(&Unit::Cup).unwrap(), "\"cup\"");
    }

    #[test]
    fn recipe_fits_slot() {
        let mut recipe: Recipe = serde_json::from_str(r#"{"id": 1, "name": "Oats"}"#).unwrap();
        assert!(recipe.is_untagged());
        assert!(recipe.fits(MealType::Dinner));

        recipe.meal_types = vec![MealType::Breakfast];
        assert!(recipe.fits(MealType::Breakfast));
        assert!(!recipe.fits(MealType::Dinner));
    }
}
