use mealprep_shared::{
    Error,
    mealplan::Day,
    recipe::{MealType, Recipe},
};
use serde::Deserialize;
use time::OffsetDateTime;
use validator::{Validate, ValidationError};

use crate::{
    Assignment, CreateInput, MealPlanDetail, MealPlanStore, Rand, RandomSource, RecipeSource, Slot,
};

fn default_meals_per_day() -> usize {
    MealType::SLOTS.len()
}

#[derive(Validate, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_dates"))]
pub struct GenerateInput {
    #[validate(length(min = 1, max = 150), custom(function = "mealprep_shared::not_blank"))]
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    #[serde(default = "Day::week")]
    pub days: Vec<Day>,
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: usize,
    #[serde(default)]
    pub filter_by_meal_type: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GenerateInput {
    pub fn new(name: impl Into<String>, start_date: OffsetDateTime) -> Self {
        Self {
            name: name.into(),
            start_date,
            end_date: None,
            days: Day::week(),
            meals_per_day: default_meals_per_day(),
            filter_by_meal_type: false,
            seed: None,
        }
    }
}

fn validate_dates(input: &GenerateInput) -> Result<(), ValidationError> {
    crate::root::check_dates(input.start_date, input.end_date)
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateDayInput {
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: usize,
    #[serde(default)]
    pub filter_by_meal_type: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RegenerateDayInput {
    fn default() -> Self {
        Self {
            meals_per_day: default_meals_per_day(),
            filter_by_meal_type: false,
            seed: None,
        }
    }
}

/// Builds meal plans by drawing recipes from a catalog at random.
pub struct Generator<R, S> {
    recipes: R,
    store: S,
}

impl<R: RecipeSource, S: MealPlanStore> Generator<R, S> {
    pub fn new(recipes: R, store: S) -> Self {
        Self { recipes, store }
    }

    pub async fn generate(&self, input: GenerateInput) -> mealprep_shared::Result<MealPlanDetail> {
        let mut rng = Rand::new(input.seed);
        self.generate_with(input, &mut rng).await
    }

    /// Creates the plan, then fills each requested day one after the other.
    ///
    /// Days are written independently: if writing a day fails, the plan and
    /// the days before it stay persisted and the error is returned.
    pub async fn generate_with(
        &self,
        input: GenerateInput,
        rng: &mut dyn RandomSource,
    ) -> mealprep_shared::Result<MealPlanDetail> {
        input.validate()?;

        let recipes = self.recipes.all_recipes().await?;
        if recipes.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let snacks = recipes
            .iter()
            .filter(|r| r.is_tagged(MealType::Snack))
            .collect::<Vec<_>>();

        let snack = match snacks.len() {
            0 => None,
            len => Some(snacks[rng.pick(len)].id),
        };

        let plan_id = self
            .store
            .create_meal_plan(CreateInput {
                name: input.name,
                start_date: input.start_date,
                end_date: input.end_date,
                snack,
            })
            .await?;

        for day in input.days {
            let slots = day_slots(&recipes, input.meals_per_day, input.filter_by_meal_type, rng);
            tracing::debug!(plan.id = plan_id, %day, ?slots, "day generated");

            self.store.update_day(plan_id, day, slots).await?;
        }

        match self.store.load(plan_id).await? {
            Some(plan) => Ok(plan),
            None => mealprep_shared::not_found!("meal plan"),
        }
    }

    pub async fn regenerate_day(
        &self,
        plan_id: i64,
        day: Day,
        input: RegenerateDayInput,
    ) -> mealprep_shared::Result<Vec<Assignment>> {
        let mut rng = Rand::new(input.seed);
        self.regenerate_day_with(plan_id, day, input, &mut rng).await
    }

    /// Redraws one day of an existing plan, replacing its whole content.
    pub async fn regenerate_day_with(
        &self,
        plan_id: i64,
        day: Day,
        input: RegenerateDayInput,
        rng: &mut dyn RandomSource,
    ) -> mealprep_shared::Result<Vec<Assignment>> {
        if self.store.load(plan_id).await?.is_none() {
            mealprep_shared::not_found!("meal plan");
        }

        let recipes = self.recipes.all_recipes().await?;
        if recipes.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let slots = day_slots(&recipes, input.meals_per_day, input.filter_by_meal_type, rng);
        tracing::debug!(plan.id = plan_id, %day, ?slots, "day regenerated");

        self.store.update_day(plan_id, day, slots).await
    }
}

/// Picks one recipe for each of the first `meals_per_day` slots of a day.
/// `recipes` must not be empty.
pub fn day_slots(
    recipes: &[Recipe],
    meals_per_day: usize,
    filter_by_meal_type: bool,
    rng: &mut dyn RandomSource,
) -> Vec<Slot> {
    MealType::SLOTS
        .iter()
        .take(meals_per_day)
        .map(|meal_type| {
            let mut pool = recipes.iter().collect::<Vec<_>>();

            if filter_by_meal_type {
                pool.retain(|r| r.fits(*meal_type));
            }

            if pool.is_empty() {
                pool = recipes.iter().collect();
            }

            Slot {
                recipe_id: pool[rng.pick(pool.len())].id,
                meal_type: Some(*meal_type),
            }
        })
        .collect()
}
