use mealprep_db::table::MealPlan;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use time::OffsetDateTime;
use validator::{Validate, ValidationError};

#[derive(Validate, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_dates"))]
pub struct CreateInput {
    #[validate(length(min = 1, max = 150), custom(function = "mealprep_shared::not_blank"))]
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub snack: Option<i64>,
}

fn validate_dates(input: &CreateInput) -> Result<(), ValidationError> {
    super::check_dates(input.start_date, input.end_date)
}

impl super::Command {
    pub async fn create_meal_plan(&self, input: CreateInput) -> mealprep_shared::Result<i64> {
        input.validate()?;

        let statement = Query::insert()
            .into_table(MealPlan::Table)
            .columns([
                MealPlan::Name,
                MealPlan::StartDate,
                MealPlan::EndDate,
                MealPlan::Snack,
                MealPlan::CreatedAt,
            ])
            .values_panic([
                input.name.to_owned().into(),
                mealprep_shared::to_timestamp(input.start_date).into(),
                input.end_date.map(mealprep_shared::to_timestamp).into(),
                input.snack.into(),
                mealprep_shared::to_timestamp(OffsetDateTime::now_utc()).into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(plan.id = id, plan.name = %input.name, "meal plan created");

        Ok(id)
    }
}
