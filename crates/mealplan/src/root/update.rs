use mealprep_db::table::MealPlan;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use time::OffsetDateTime;
use validator::Validate;

use crate::MealPlanInfo;

/// Fields left unset keep their current value.
#[derive(Validate, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInput {
    #[validate(length(min = 1, max = 150), custom(function = "mealprep_shared::not_blank"))]
    pub name: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub snack: Option<i64>,
}

impl super::Command {
    pub async fn update(&self, id: i64, input: UpdateInput) -> mealprep_shared::Result<MealPlanInfo> {
        input.validate()?;

        let Some(mut plan) = self.load_info(id).await? else {
            mealprep_shared::not_found!("meal plan");
        };

        if let Some(name) = input.name {
            plan.name = name;
        }

        if let Some(start_date) = input.start_date {
            plan.start_date = start_date;
        }

        if input.end_date.is_some() {
            plan.end_date = input.end_date;
        }

        if input.snack.is_some() {
            plan.snack = input.snack;
        }

        if let Err(err) = super::check_dates(plan.start_date, plan.end_date) {
            let mut errors = validator::ValidationErrors::new();
            errors.add("end_date", err);
            return Err(errors.into());
        }

        let statement = Query::update()
            .table(MealPlan::Table)
            .values([
                (MealPlan::Name, plan.name.to_owned().into()),
                (
                    MealPlan::StartDate,
                    mealprep_shared::to_timestamp(plan.start_date).into(),
                ),
                (
                    MealPlan::EndDate,
                    plan.end_date.map(mealprep_shared::to_timestamp).into(),
                ),
                (MealPlan::Snack, plan.snack.into()),
            ])
            .and_where(Expr::col(MealPlan::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(plan)
    }
}
