use mealprep_shared::{mealplan::Day, recipe::Recipe};

use crate::{Assignment, CreateInput, MealPlanDetail, Slot};

/// Read access to the recipe catalog used by the generator.
#[async_trait::async_trait]
pub trait RecipeSource: Send + Sync {
    async fn all_recipes(&self) -> mealprep_shared::Result<Vec<Recipe>>;
}

/// Writes the generator needs from a meal plan store.
#[async_trait::async_trait]
pub trait MealPlanStore: Send + Sync {
    async fn create_meal_plan(&self, input: CreateInput) -> mealprep_shared::Result<i64>;

    async fn load(&self, id: i64) -> mealprep_shared::Result<Option<MealPlanDetail>>;

    async fn update_day(
        &self,
        plan_id: i64,
        day: Day,
        slots: Vec<Slot>,
    ) -> mealprep_shared::Result<Vec<Assignment>>;
}

#[async_trait::async_trait]
impl RecipeSource for mealprep_recipe::Command {
    async fn all_recipes(&self) -> mealprep_shared::Result<Vec<Recipe>> {
        self.all().await
    }
}

#[async_trait::async_trait]
impl MealPlanStore for crate::Command {
    async fn create_meal_plan(&self, input: CreateInput) -> mealprep_shared::Result<i64> {
        crate::Command::create_meal_plan(self, input).await
    }

    async fn load(&self, id: i64) -> mealprep_shared::Result<Option<MealPlanDetail>> {
        crate::Command::load(self, id).await
    }

    async fn update_day(
        &self,
        plan_id: i64,
        day: Day,
        slots: Vec<Slot>,
    ) -> mealprep_shared::Result<Vec<Assignment>> {
        crate::Command::update_day(self, plan_id, day, slots).await
    }
}
