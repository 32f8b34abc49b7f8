use std::collections::HashMap;

use mealprep_db::table::{MealPlan, MealPlanRecipe, Recipe};
use mealprep_shared::{
    mealplan::{Day, DayPlan, WeekPlan},
    recipe::MealType,
};
use sea_query::{Expr, ExprTrait, JoinType, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{prelude::FromRow, types::Text};
use time::{Duration, OffsetDateTime};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanInfo {
    pub id: i64,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    pub snack: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl MealPlanInfo {
    /// A plan without an end date covers the seven days from its start.
    pub fn covers(&self, at: OffsetDateTime) -> bool {
        let end = match self.end_date {
            Some(end_date) => end_date + Duration::days(1),
            None => self.start_date + Duration::days(7),
        };

        self.start_date <= at && at < end
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i64,
    pub recipe_id: i64,
    pub recipe_name: String,
    pub day: Day,
    pub meal_type: Option<MealType>,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanDetail {
    #[serde(flatten)]
    pub info: MealPlanInfo,
    pub recipes: Vec<Assignment>,
}

#[derive(FromRow)]
struct MealPlanRow {
    id: i64,
    name: String,
    start_date: i64,
    end_date: Option<i64>,
    snack: Option<i64>,
    created_at: i64,
}

impl TryFrom<MealPlanRow> for MealPlanInfo {
    type Error = mealprep_shared::Error;

    fn try_from(row: MealPlanRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            start_date: mealprep_shared::from_timestamp(row.start_date)?,
            end_date: mealprep_shared::from_opt_timestamp(row.end_date)?,
            snack: row.snack,
            created_at: mealprep_shared::from_timestamp(row.created_at)?,
        })
    }
}

#[derive(FromRow)]
struct AssignmentRow {
    id: i64,
    recipe_id: i64,
    #[sqlx(rename = "name")]
    recipe_name: String,
    day: Text<Day>,
    meal_type: Option<Text<MealType>>,
}

impl From<AssignmentRow> for Assignment {
    fn from(row: AssignmentRow) -> Self {
        Self {
            id: row.id,
            recipe_id: row.recipe_id,
            recipe_name: row.recipe_name,
            day: row.day.0,
            meal_type: row.meal_type.map(|m| m.0),
        }
    }
}

impl crate::Command {
    pub async fn load(&self, id: i64) -> mealprep_shared::Result<Option<MealPlanDetail>> {
        let Some(info) = self.load_info(id).await? else {
            return Ok(None);
        };

        let statement = assignments_statement()
            .and_where(Expr::col((MealPlanRecipe::Table, MealPlanRecipe::PlanId)).eq(id))
            .to_owned();

        let recipes = self.fetch_assignments(statement).await?;

        Ok(Some(MealPlanDetail { info, recipes }))
    }

    pub async fn load_info(&self, id: i64) -> mealprep_shared::Result<Option<MealPlanInfo>> {
        let statement = plans_statement()
            .and_where(Expr::col(MealPlan::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        row.map(MealPlanInfo::try_from).transpose()
    }

    /// Every plan, most recent start date first.
    pub async fn list(&self) -> mealprep_shared::Result<Vec<MealPlanInfo>> {
        let statement = plans_statement()
            .order_by(MealPlan::StartDate, Order::Desc)
            .order_by(MealPlan::Id, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        rows.into_iter().map(MealPlanInfo::try_from).collect()
    }

    /// The plan covering `at`, else the plan with the latest start date.
    pub async fn current(&self, at: OffsetDateTime) -> mealprep_shared::Result<Option<MealPlanDetail>> {
        let plans = self.list().await?;

        let Some(plan) = plans
            .iter()
            .find(|plan| plan.covers(at))
            .or_else(|| plans.first())
        else {
            return Ok(None);
        };

        self.load(plan.id).await
    }

    pub async fn recipes_for_day(
        &self,
        plan_id: i64,
        day: Day,
    ) -> mealprep_shared::Result<Vec<Assignment>> {
        let statement = assignments_statement()
            .and_where(Expr::col((MealPlanRecipe::Table, MealPlanRecipe::PlanId)).eq(plan_id))
            .and_where(Expr::col((MealPlanRecipe::Table, MealPlanRecipe::Day)).eq(day.to_string()))
            .to_owned();

        self.fetch_assignments(statement).await
    }

    pub(crate) async fn load_assignment(&self, id: i64) -> mealprep_shared::Result<Option<Assignment>> {
        let statement = assignments_statement()
            .and_where(Expr::col((MealPlanRecipe::Table, MealPlanRecipe::Id)).eq(id))
            .to_owned();

        Ok(self.fetch_assignments(statement).await?.into_iter().next())
    }

    /// Projects a persisted plan into a week plan, ordered by day then meal
    /// type, each entry carrying the full recipe with its ingredients.
    pub async fn week_plan(&self, plan_id: i64) -> mealprep_shared::Result<Option<WeekPlan>> {
        let Some(plan) = self.load(plan_id).await? else {
            return Ok(None);
        };

        let recipes = mealprep_recipe::Command::new(mealprep_shared::State::clone(self))
            .all()
            .await?
            .into_iter()
            .map(|recipe| (recipe.id, recipe))
            .collect::<HashMap<_, _>>();

        let mut assignments = plan.recipes;
        assignments.sort_by_key(|a| (a.day, a.meal_type, a.id));

        let mut week_plan = WeekPlan::with_capacity(assignments.len());
        for assignment in assignments {
            let Some(recipe) = recipes.get(&assignment.recipe_id).cloned() else {
                continue;
            };

            week_plan.push(DayPlan {
                day: assignment.day,
                meal_type: assignment.meal_type,
                recipe,
            });
        }

        Ok(Some(week_plan))
    }

    async fn fetch_assignments(
        &self,
        statement: SelectStatement,
    ) -> mealprep_shared::Result<Vec<Assignment>> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, AssignmentRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(Assignment::from).collect())
    }
}

fn plans_statement() -> SelectStatement {
    Query::select()
        .columns([
            MealPlan::Id,
            MealPlan::Name,
            MealPlan::StartDate,
            MealPlan::EndDate,
            MealPlan::Snack,
            MealPlan::CreatedAt,
        ])
        .from(MealPlan::Table)
        .to_owned()
}

fn assignments_statement() -> SelectStatement {
    Query::select()
        .columns([
            (MealPlanRecipe::Table, MealPlanRecipe::Id),
            (MealPlanRecipe::Table, MealPlanRecipe::RecipeId),
            (MealPlanRecipe::Table, MealPlanRecipe::Day),
            (MealPlanRecipe::Table, MealPlanRecipe::MealType),
        ])
        .column((Recipe::Table, Recipe::Name))
        .from(MealPlanRecipe::Table)
        .join(
            JoinType::InnerJoin,
            Recipe::Table,
            Expr::col((MealPlanRecipe::Table, MealPlanRecipe::RecipeId))
                .equals((Recipe::Table, Recipe::Id)),
        )
        .order_by((MealPlanRecipe::Table, MealPlanRecipe::Id), Order::Asc)
        .to_owned()
}
