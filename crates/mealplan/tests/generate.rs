use mealprep_mealplan::{
    Assignment, CreateInput, GenerateInput, Generator, MealPlanDetail, MealPlanStore,
    RegenerateDayInput, Sequence, Slot,
};
use mealprep_shared::{Error, mealplan::Day, recipe::MealType};
use temp_dir::TempDir;
use time::macros::datetime;

mod helpers;

type SqliteGenerator = Generator<mealprep_recipe::Command, mealprep_mealplan::Command>;

fn generator(state: &mealprep_shared::State) -> SqliteGenerator {
    Generator::new(
        mealprep_recipe::Command::new(state.clone()),
        mealprep_mealplan::Command::new(state.clone()),
    )
}

#[tokio::test]
async fn test_coverage() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    for name in ["A", "B", "C", "D"] {
        helpers::create_recipe(&state, name, &[], &[]).await?;
    }

    let days = vec![Day::Monday, Day::Wednesday, Day::Saturday];

    for meals_per_day in 1..=3 {
        let plan = generator(&state)
            .generate(GenerateInput {
                days: days.to_vec(),
                meals_per_day,
                ..GenerateInput::new("Week", datetime!(2024-01-01 0:00 UTC))
            })
            .await?;

        assert_eq!(plan.recipes.len(), days.len() * meals_per_day);

        for day in &days {
            let slots = plan
                .recipes
                .iter()
                .filter(|a| a.day == *day)
                .map(|a| a.meal_type)
                .collect::<Vec<_>>();

            let expected = MealType::SLOTS
                .iter()
                .take(meals_per_day)
                .map(|m| Some(*m))
                .collect::<Vec<_>>();

            assert_eq!(slots, expected);
        }
    }

    let plan = generator(&state)
        .generate(GenerateInput::new("Full week", datetime!(2024-01-01 0:00 UTC)))
        .await?;
    assert_eq!(plan.recipes.len(), 21);

    Ok(())
}

#[tokio::test]
async fn test_example_scenario() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let r1 = helpers::create_recipe(&state, "R1", &[MealType::Breakfast], &[]).await?;
    let r2 = helpers::create_recipe(&state, "R2", &[MealType::Dinner], &[]).await?;
    let r3 = helpers::create_recipe(&state, "R3", &[MealType::Snack], &[]).await?;

    for value in [0.0, 0.4, 0.8] {
        let mut rng = Sequence::new([value]);
        let plan = generator(&state)
            .generate_with(
                GenerateInput {
                    days: vec![Day::Monday],
                    filter_by_meal_type: true,
                    ..GenerateInput::new("W1", datetime!(2024-01-01 0:00 UTC))
                },
                &mut rng,
            )
            .await?;

        assert_eq!(plan.info.snack, Some(r3));

        let slot = |meal_type| {
            plan.recipes
                .iter()
                .find(|a| a.meal_type == Some(meal_type))
                .map(|a| a.recipe_id)
        };

        assert_eq!(slot(MealType::Breakfast), Some(r1));
        assert!([r1, r2, r3].contains(&slot(MealType::Lunch).unwrap()));
        assert_eq!(slot(MealType::Dinner), Some(r2));
    }

    Ok(())
}

#[tokio::test]
async fn test_fallback_and_snack() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let a = helpers::create_recipe(&state, "A", &[MealType::Lunch], &[]).await?;
    let b = helpers::create_recipe(&state, "B", &[MealType::Lunch], &[]).await?;

    let plan = generator(&state)
        .generate(GenerateInput {
            filter_by_meal_type: true,
            ..GenerateInput::new("No snacks", datetime!(2024-01-01 0:00 UTC))
        })
        .await?;

    assert_eq!(plan.info.snack, None);
    assert_eq!(plan.recipes.len(), 21);
    assert!(plan.recipes.iter().all(|r| r.recipe_id == a || r.recipe_id == b));

    let snack = helpers::create_recipe(&state, "Nuts", &[MealType::Snack], &[]).await?;
    let plan = generator(&state)
        .generate(GenerateInput::new("Snacks", datetime!(2024-01-01 0:00 UTC)))
        .await?;
    assert_eq!(plan.info.snack, Some(snack));

    Ok(())
}

#[tokio::test]
async fn test_seed_is_reproducible() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    for i in 0..20 {
        helpers::create_recipe(&state, &format!("Recipe {i}"), &[], &[]).await?;
    }

    let slots = |plan: &MealPlanDetail| {
        plan.recipes
            .iter()
            .map(|a| (a.day, a.meal_type, a.recipe_id))
            .collect::<Vec<_>>()
    };

    let input = GenerateInput {
        seed: Some(7),
        ..GenerateInput::new("Seeded", datetime!(2024-01-01 0:00 UTC))
    };

    let first = generator(&state).generate(input.clone()).await?;
    let second = generator(&state).generate(input).await?;
    assert_ne!(first.info.id, second.info.id);
    assert_eq!(slots(&first), slots(&second));

    Ok(())
}

#[tokio::test]
async fn test_rejected_before_any_write() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let plans = mealprep_mealplan::Command::new(state.clone());

    let err = generator(&state)
        .generate(GenerateInput::new("Empty", datetime!(2024-01-01 0:00 UTC)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::EmptyCatalog));

    helpers::create_recipe(&state, "A", &[], &[]).await?;

    let err = generator(&state)
        .generate(GenerateInput::new("  ", datetime!(2024-01-01 0:00 UTC)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validate(_)));

    let err = generator(&state)
        .generate(GenerateInput {
            end_date: Some(datetime!(2023-12-25 0:00 UTC)),
            ..GenerateInput::new("Backwards", datetime!(2024-01-01 0:00 UTC))
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validate(_)));

    assert!(plans.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_regenerate_day() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let a = helpers::create_recipe(&state, "A", &[], &[]).await?;
    let b = helpers::create_recipe(&state, "B", &[], &[]).await?;

    let mut rng = Sequence::new([0.0]);
    let plan = generator(&state)
        .generate_with(
            GenerateInput {
                days: vec![Day::Monday, Day::Tuesday],
                ..GenerateInput::new("Week", datetime!(2024-01-01 0:00 UTC))
            },
            &mut rng,
        )
        .await?;
    assert!(plan.recipes.iter().all(|r| r.recipe_id == a));

    let mut rng = Sequence::new([0.9]);
    let monday = generator(&state)
        .regenerate_day_with(
            plan.info.id,
            Day::Monday,
            RegenerateDayInput {
                meals_per_day: 2,
                ..Default::default()
            },
            &mut rng,
        )
        .await?;
    assert_eq!(monday.len(), 2);
    assert!(monday.iter().all(|r| r.recipe_id == b));

    let tuesday = mealprep_mealplan::Command::new(state.clone())
        .recipes_for_day(plan.info.id, Day::Tuesday)
        .await?;
    assert_eq!(tuesday.len(), 3);
    assert!(tuesday.iter().all(|r| r.recipe_id == a));

    let err = generator(&state)
        .regenerate_day(plan.info.id + 1, Day::Monday, RegenerateDayInput::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound("meal plan")));

    Ok(())
}

#[tokio::test]
async fn test_regenerate_day_empty_catalog() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let plans = mealprep_mealplan::Command::new(state.clone());

    let id = plans
        .create_meal_plan(CreateInput {
            name: "Manual".to_owned(),
            start_date: datetime!(2024-01-01 0:00 UTC),
            end_date: None,
            snack: None,
        })
        .await?;

    let err = generator(&state)
        .regenerate_day(id, Day::Friday, RegenerateDayInput::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::EmptyCatalog));

    Ok(())
}

/// Delegates to the SQLite store but fails when asked to write `fail_on`.
struct FailingStore {
    inner: mealprep_mealplan::Command,
    fail_on: Day,
}

#[async_trait::async_trait]
impl MealPlanStore for FailingStore {
    async fn create_meal_plan(&self, input: CreateInput) -> mealprep_shared::Result<i64> {
        self.inner.create_meal_plan(input).await
    }

    async fn load(&self, id: i64) -> mealprep_shared::Result<Option<MealPlanDetail>> {
        self.inner.load(id).await
    }

    async fn update_day(
        &self,
        plan_id: i64,
        day: Day,
        slots: Vec<Slot>,
    ) -> mealprep_shared::Result<Vec<Assignment>> {
        if day == self.fail_on {
            return Err(Error::Unknown(anyhow::anyhow!("disk full")));
        }

        self.inner.update_day(plan_id, day, slots).await
    }
}

#[tokio::test]
async fn test_failing_day_keeps_earlier_days() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::create_recipe(&state, "A", &[], &[]).await?;

    let plans = mealprep_mealplan::Command::new(state.clone());
    let store = FailingStore {
        inner: plans.clone(),
        fail_on: Day::Wednesday,
    };
    let generator = Generator::new(mealprep_recipe::Command::new(state.clone()), store);

    let err = generator
        .generate(GenerateInput::new("Partial", datetime!(2024-01-01 0:00 UTC)))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "disk full");

    let plan = plans.list().await?;
    assert_eq!(plan.len(), 1);

    let detail = plans.load(plan[0].id).await?.unwrap();
    let mut days = detail.recipes.iter().map(|a| a.day).collect::<Vec<_>>();
    days.dedup();
    assert_eq!(days, vec![Day::Monday, Day::Tuesday]);

    Ok(())
}
