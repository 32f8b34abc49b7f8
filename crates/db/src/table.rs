use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum Recipe {
    Table,
    Id,
    Name,
    MainProtein,
    Instructions,
    CanBatch,
    LastUsed,
}

#[derive(Iden, Clone, Copy)]
pub enum Ingredient {
    Table,
    Id,
    Name,
}

#[derive(Iden, Clone, Copy)]
pub enum RecipeIngredient {
    Table,
    RecipeId,
    IngredientId,
    Amount,
    Unit,
    Position,
}

#[derive(Iden, Clone, Copy)]
pub enum RecipeMealType {
    Table,
    RecipeId,
    MealType,
}

#[derive(Iden, Clone, Copy)]
pub enum MealPlan {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    Snack,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum MealPlanRecipe {
    Table,
    Id,
    PlanId,
    RecipeId,
    Day,
    MealType,
}
