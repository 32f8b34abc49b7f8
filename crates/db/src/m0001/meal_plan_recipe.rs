use sea_query::{
    ColumnDef, ConditionalStatement, Expr, ExprTrait, ForeignKey, ForeignKeyAction, Index,
    IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{MealPlan, MealPlanRecipe, Recipe};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MealPlanRecipe::Table)
        .col(
            ColumnDef::new(MealPlanRecipe::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(MealPlanRecipe::PlanId).integer().not_null())
        .col(ColumnDef::new(MealPlanRecipe::RecipeId).integer().not_null())
        .col(
            ColumnDef::new(MealPlanRecipe::Day)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(MealPlanRecipe::MealType)
                .string()
                .null()
                .string_len(10),
        )
        .foreign_key(
            ForeignKey::create()
                .from(MealPlanRecipe::Table, MealPlanRecipe::PlanId)
                .to(MealPlan::Table, MealPlan::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(MealPlanRecipe::Table, MealPlanRecipe::RecipeId)
                .to(Recipe::Table, Recipe::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MealPlanRecipe::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

// A recipe fills a given slot of a day at most once; the same recipe may
// still cover two different slots of the same day.
fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_meal_plan_recipe_slot_unique")
        .table(MealPlanRecipe::Table)
        .col(MealPlanRecipe::PlanId)
        .col(MealPlanRecipe::RecipeId)
        .col(MealPlanRecipe::Day)
        .col(MealPlanRecipe::MealType)
        .unique()
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_meal_plan_recipe_slot_unique")
        .table(MealPlanRecipe::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx2;

fn create_idx_2() -> IndexCreateStatement {
    Index::create()
        .name("idx_meal_plan_recipe_plan_day")
        .table(MealPlanRecipe::Table)
        .col(MealPlanRecipe::PlanId)
        .col(MealPlanRecipe::Day)
        .to_owned()
}

fn drop_idx_2() -> IndexDropStatement {
    Index::drop()
        .name("idx_meal_plan_recipe_plan_day")
        .table(MealPlanRecipe::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx2 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_2().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_2().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx3;

// Without a meal type, a recipe appears at most once per day.
fn create_idx_3() -> IndexCreateStatement {
    Index::create()
        .name("idx_meal_plan_recipe_untyped_unique")
        .table(MealPlanRecipe::Table)
        .col(MealPlanRecipe::PlanId)
        .col(MealPlanRecipe::RecipeId)
        .col(MealPlanRecipe::Day)
        .unique()
        .and_where(Expr::col(MealPlanRecipe::MealType).is_null())
        .to_owned()
}

fn drop_idx_3() -> IndexDropStatement {
    Index::drop()
        .name("idx_meal_plan_recipe_untyped_unique")
        .table(MealPlanRecipe::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx3 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_3().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_3().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
