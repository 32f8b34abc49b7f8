use mealprep_db::table::Recipe;
use mealprep_shared::recipe::{MealType, Protein, Unit};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use time::OffsetDateTime;
use validator::{Validate, ValidationError};

#[derive(Validate, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IngredientInput {
    #[validate(length(min = 1, max = 100), custom(function = "mealprep_shared::not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub amount: i64,
    #[serde(default)]
    pub unit: Option<Unit>,
}

#[derive(Validate, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_ingredients"))]
pub struct CreateInput {
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
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_used: Option<OffsetDateTime>,
    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Vec<IngredientInput>,
}

fn validate_ingredients(input: &CreateInput) -> Result<(), ValidationError> {
    for (i, ingredient) in input.ingredients.iter().enumerate() {
        if input.ingredients[..i].iter().any(|o| o.name == ingredient.name) {
            return Err(ValidationError::new("duplicate_ingredient")
                .with_message(format!("{} is listed twice", ingredient.name).into()));
        }
    }

    Ok(())
}

impl CreateInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            main_protein: None,
            meal_types: vec![],
            instructions: None,
            can_batch: None,
            last_used: None,
            ingredients: vec![],
        }
    }
}

impl super::Command {
    pub async fn create(&self, input: CreateInput) -> mealprep_shared::Result<i64> {
        input.validate()?;

        let mut tx = self.write_db.begin().await?;

        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Name,
                Recipe::MainProtein,
                Recipe::Instructions,
                Recipe::CanBatch,
                Recipe::LastUsed,
            ])
            .values_panic([
                input.name.to_owned().into(),
                input.main_protein.map(|p| p.to_string()).into(),
                input.instructions.to_owned().into(),
                input.can_batch.into(),
                input.last_used.map(mealprep_shared::to_timestamp).into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        super::replace_meal_types(&mut tx, id, &input.meal_types).await?;

        for (position, ingredient) in input.ingredients.iter().enumerate() {
            super::link_ingredient(&mut tx, id, position as i64, ingredient).await?;
        }

        tx.commit().await?;

        tracing::info!(recipe.id = id, recipe.name = %input.name, "recipe created");

        Ok(id)
    }
}
