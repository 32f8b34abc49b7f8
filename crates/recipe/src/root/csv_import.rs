use mealprep_shared::recipe::{MealType, Protein};
use serde::Deserialize;
use strum::VariantArray;

use super::{CreateInput, IngredientInput};

#[derive(Deserialize)]
struct CsvRow {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Ingredients", default)]
    ingredients: String,
    #[serde(rename = "Main Ingredient", default)]
    main_protein: String,
    #[serde(rename = "Meal", default)]
    meal: String,
    #[serde(rename = "Can batch", default)]
    can_batch: String,
}

fn variant<T: VariantArray + AsRef<str> + Copy>(
    column: &str,
    value: &str,
) -> mealprep_shared::Result<Option<T>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    match T::VARIANTS
        .iter()
        .find(|v| AsRef::<str>::as_ref(*v).eq_ignore_ascii_case(value))
    {
        Some(v) => Ok(Some(*v)),
        None => mealprep_shared::user!("unknown {column}: {value}"),
    }
}

/// Reads a recipe spreadsheet export with the columns `Name`, `Ingredients`
/// (comma separated), `Main Ingredient`, `Meal` and `Can batch`.
///
/// Ingredients come in with no amount and no unit; a name repeated within a
/// row is kept once.
pub fn parse_csv(reader: impl std::io::Read) -> mealprep_shared::Result<Vec<CreateInput>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut inputs = vec![];

    for row in reader.deserialize::<CsvRow>() {
        let row = row.map_err(|e| mealprep_shared::Error::User(format!("invalid csv: {e}")))?;

        if row.name.is_empty() && row.ingredients.is_empty() {
            continue;
        }

        let mut ingredients: Vec<IngredientInput> = vec![];
        for name in row.ingredients.split(',').map(str::trim) {
            if name.is_empty() || ingredients.iter().any(|i| i.name == name) {
                continue;
            }

            ingredients.push(IngredientInput {
                name: name.to_owned(),
                amount: 0,
                unit: None,
            });
        }

        let can_batch = row.can_batch.to_lowercase();

        inputs.push(CreateInput {
            main_protein: variant::<Protein>("Main Ingredient", &row.main_protein)?,
            meal_types: variant::<MealType>("Meal", &row.meal)?.into_iter().collect(),
            can_batch: Some(matches!(can_batch.as_str(), "yes" | "true" | "1")),
            ingredients,
            ..CreateInput::named(row.name)
        });
    }

    Ok(inputs)
}
