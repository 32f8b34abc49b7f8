use anyhow::{Context, Result};
use mealprep_mealplan::{GenerateInput, Generator, MealPlanDetail};
use mealprep_shared::mealplan::Day;
use time::{Date, OffsetDateTime, format_description::well_known::Iso8601};

pub struct GenerateArgs {
    pub name: String,
    pub start: String,
    pub end: Option<String>,
    pub days: Vec<Day>,
    pub meals_per_day: Option<usize>,
    pub filter_by_meal_type: bool,
    pub seed: Option<u64>,
}

#[tracing::instrument(skip(config, args), fields(name = %args.name))]
pub async fn generate(config: crate::config::Config, args: GenerateArgs) -> Result<()> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    mealprep_db::migrate(&pool).await?;

    let input = GenerateInput {
        name: args.name,
        start_date: parse_date(&args.start)?,
        end_date: args.end.as_deref().map(parse_date).transpose()?,
        days: if args.days.is_empty() {
            Day::week()
        } else {
            args.days
        },
        meals_per_day: args.meals_per_day.unwrap_or(config.generation.meals_per_day),
        filter_by_meal_type: args.filter_by_meal_type || config.generation.filter_by_meal_type,
        seed: args.seed,
    };

    let plan = generate_plan(mealprep_shared::State::single(pool.clone()), input).await?;
    pool.close().await;

    tracing::info!(plan.id = plan.info.id, assignments = plan.recipes.len(), "meal plan generated");
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}

pub async fn generate_plan(
    state: mealprep_shared::State,
    input: GenerateInput,
) -> Result<MealPlanDetail> {
    let generator = Generator::new(
        mealprep_recipe::Command::new(state.clone()),
        mealprep_mealplan::Command::new(state),
    );

    Ok(generator.generate(input).await?)
}

/// Midnight UTC of a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<OffsetDateTime> {
    let date = Date::parse(value, &Iso8601::DATE)
        .with_context(|| format!("invalid date {value}, expected YYYY-MM-DD"))?;

    Ok(date.midnight().assume_utc())
}
