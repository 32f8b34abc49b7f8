use mealprep_mealplan::{AssignInput, CreateInput, Slot, UpdateAssignmentInput, UpdateInput};
use mealprep_shared::{Error, mealplan::Day, recipe::MealType};
use temp_dir::TempDir;
use time::macros::datetime;

mod helpers;

fn plan_input(name: &str) -> CreateInput {
    CreateInput {
        name: name.to_owned(),
        start_date: datetime!(2024-01-01 0:00 UTC),
        end_date: Some(datetime!(2024-01-07 0:00 UTC)),
        snack: None,
    }
}

#[tokio::test]
async fn test_create_and_load() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = mealprep_mealplan::Command::new(state);

    let id = cmd.create_meal_plan(plan_input("Week 1")).await?;
    let plan = cmd.load(id).await?.unwrap();
    assert_eq!(plan.info.name, "Week 1");
    assert_eq!(plan.info.start_date, datetime!(2024-01-01 0:00 UTC));
    assert!(plan.recipes.is_empty());

    assert!(cmd.load(id + 1).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_create_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = mealprep_mealplan::Command::new(state);

    let err = cmd.create_meal_plan(plan_input(" ")).await.unwrap_err();
    assert!(matches!(err, Error::Validate(_)));

    let err = cmd
        .create_meal_plan(CreateInput {
            end_date: Some(datetime!(2023-12-31 0:00 UTC)),
            ..plan_input("Backwards")
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validate(_)));

    assert!(cmd.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = mealprep_mealplan::Command::new(state.clone());
    let recipe = helpers::create_recipe(&state, "Soup", &[], &[]).await?;

    let id = cmd.create_meal_plan(plan_input("Week 1")).await?;

    let plan = cmd
        .update(
            id,
            UpdateInput {
                name: Some("Week one".to_owned()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(plan.name, "Week one");
    assert_eq!(plan.end_date, Some(datetime!(2024-01-07 0:00 UTC)));

    let err = cmd
        .update(
            id,
            UpdateInput {
                start_date: Some(datetime!(2024-02-01 0:00 UTC)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validate(_)));

    cmd.add_recipe(
        id,
        AssignInput {
            recipe_id: recipe,
            day: Day::Monday,
            meal_type: None,
        },
    )
    .await?;

    cmd.delete(id).await?;
    assert!(cmd.load(id).await?.is_none());
    assert!(cmd.recipes_for_day(id, Day::Monday).await?.is_empty());

    let err = cmd.delete(id).await.unwrap_err();
    assert_eq!(err.to_string(), "meal plan not found");

    let err = cmd.update(id, UpdateInput::default()).await.unwrap_err();
    assert!(matches!(err, Error::NotFound("meal plan")));

    Ok(())
}

#[tokio::test]
async fn test_assignments() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = mealprep_mealplan::Command::new(state.clone());
    let oats = helpers::create_recipe(&state, "Oats", &[MealType::Breakfast], &[]).await?;
    let stew = helpers::create_recipe(&state, "Stew", &[MealType::Dinner], &[]).await?;

    let id = cmd.create_meal_plan(plan_input("Week 1")).await?;

    let assignment = cmd
        .add_recipe(
            id,
            AssignInput {
                recipe_id: oats,
                day: Day::Tuesday,
                meal_type: Some(MealType::Breakfast),
            },
        )
        .await?;
    assert_eq!(assignment.recipe_name, "Oats");
    assert_eq!(assignment.day, Day::Tuesday);

    // the same recipe may cover another slot of the same day
    cmd.add_recipe(
        id,
        AssignInput {
            recipe_id: oats,
            day: Day::Tuesday,
            meal_type: Some(MealType::Lunch),
        },
    )
    .await?;

    let err = cmd
        .add_recipe(
            id,
            AssignInput {
                recipe_id: oats,
                day: Day::Tuesday,
                meal_type: Some(MealType::Lunch),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    let err = cmd
        .add_recipe(
            id + 10,
            AssignInput {
                recipe_id: oats,
                day: Day::Tuesday,
                meal_type: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound("meal plan")));

    // without a meal type a recipe fits a day only once
    let untyped = AssignInput {
        recipe_id: oats,
        day: Day::Wednesday,
        meal_type: None,
    };
    cmd.add_recipe(id, untyped.clone()).await?;
    let err = cmd.add_recipe(id, untyped).await.unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    let slot = Slot {
        recipe_id: oats,
        meal_type: None,
    };
    let err = cmd
        .update_day(id, Day::Wednesday, vec![slot, slot])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));
    assert_eq!(cmd.recipes_for_day(id, Day::Wednesday).await?.len(), 1);

    let updated = cmd
        .update_recipe(
            id,
            UpdateAssignmentInput {
                recipe_id: oats,
                day: Day::Tuesday,
                new_recipe_id: Some(stew),
                meal_type: None,
            },
        )
        .await?;
    assert_eq!(updated.len(), 2);
    assert!(updated.iter().all(|a| a.recipe_name == "Stew"));

    let err = cmd
        .update_recipe(
            id,
            UpdateAssignmentInput {
                recipe_id: stew,
                day: Day::Tuesday,
                new_recipe_id: None,
                meal_type: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::User(_)));

    cmd.remove_recipe(id, stew, Day::Tuesday).await?;
    assert!(cmd.recipes_for_day(id, Day::Tuesday).await?.is_empty());

    let err = cmd.remove_recipe(id, stew, Day::Tuesday).await.unwrap_err();
    assert!(matches!(err, Error::NotFound("assignment")));

    Ok(())
}

#[tokio::test]
async fn test_update_day_replaces_only_that_day() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = mealprep_mealplan::Command::new(state.clone());
    let a = helpers::create_recipe(&state, "A", &[], &[]).await?;
    let b = helpers::create_recipe(&state, "B", &[], &[]).await?;
    let c = helpers::create_recipe(&state, "C", &[], &[]).await?;

    let id = cmd.create_meal_plan(plan_input("Week 1")).await?;

    cmd.update_day(
        id,
        Day::Monday,
        vec![
            Slot {
                recipe_id: a,
                meal_type: Some(MealType::Breakfast),
            },
            Slot {
                recipe_id: b,
                meal_type: Some(MealType::Dinner),
            },
        ],
    )
    .await?;
    cmd.update_day(
        id,
        Day::Friday,
        vec![Slot {
            recipe_id: c,
            meal_type: None,
        }],
    )
    .await?;

    let monday = cmd
        .update_day(
            id,
            Day::Monday,
            vec![Slot {
                recipe_id: c,
                meal_type: Some(MealType::Lunch),
            }],
        )
        .await?;
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].recipe_id, c);

    let friday = cmd.recipes_for_day(id, Day::Friday).await?;
    assert_eq!(friday.len(), 1);
    assert_eq!(friday[0].meal_type, None);

    // a failing insert leaves the previous content in place
    let err = cmd
        .update_day(
            id,
            Day::Monday,
            vec![Slot {
                recipe_id: c + 100,
                meal_type: None,
            }],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::User(_)));
    assert_eq!(cmd.recipes_for_day(id, Day::Monday).await?, monday);

    cmd.clear_day(id, Day::Friday).await?;
    assert!(cmd.recipes_for_day(id, Day::Friday).await?.is_empty());
    assert_eq!(cmd.load(id).await?.unwrap().recipes.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_current() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = mealprep_mealplan::Command::new(state);

    assert!(cmd.current(datetime!(2024-01-03 12:00 UTC)).await?.is_none());

    let first = cmd.create_meal_plan(plan_input("Week 1")).await?;
    let second = cmd
        .create_meal_plan(CreateInput {
            name: "Week 2".to_owned(),
            start_date: datetime!(2024-01-08 0:00 UTC),
            end_date: None,
            snack: None,
        })
        .await?;

    let plan = cmd.current(datetime!(2024-01-03 12:00 UTC)).await?.unwrap();
    assert_eq!(plan.info.id, first);

    let plan = cmd.current(datetime!(2024-01-14 23:00 UTC)).await?.unwrap();
    assert_eq!(plan.info.id, second);

    // nothing covers March: latest start wins
    let plan = cmd.current(datetime!(2024-03-01 0:00 UTC)).await?.unwrap();
    assert_eq!(plan.info.id, second);

    assert_eq!(
        cmd.list().await?.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![second, first]
    );

    Ok(())
}

#[tokio::test]
async fn test_week_plan() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = mealprep_mealplan::Command::new(state.clone());
    let oats = helpers::create_recipe(&state, "Oats", &[], &["oats", "milk"]).await?;
    let stew = helpers::create_recipe(&state, "Stew", &[], &["beef", "carrot"]).await?;

    let id = cmd.create_meal_plan(plan_input("Week 1")).await?;
    cmd.update_day(
        id,
        Day::Wednesday,
        vec![
            Slot {
                recipe_id: stew,
                meal_type: Some(MealType::Dinner),
            },
            Slot {
                recipe_id: oats,
                meal_type: Some(MealType::Breakfast),
            },
        ],
    )
    .await?;
    cmd.update_day(
        id,
        Day::Monday,
        vec![Slot {
            recipe_id: stew,
            meal_type: Some(MealType::Lunch),
        }],
    )
    .await?;

    let week = cmd.week_plan(id).await?.unwrap();
    assert_eq!(
        week.iter()
            .map(|e| (e.day, e.meal_type, e.recipe.name.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (Day::Monday, Some(MealType::Lunch), "Stew"),
            (Day::Wednesday, Some(MealType::Breakfast), "Oats"),
            (Day::Wednesday, Some(MealType::Dinner), "Stew"),
        ]
    );
    assert_eq!(
        week[1].recipe.ingredient_names().collect::<Vec<_>>(),
        vec!["oats", "milk"]
    );

    assert!(cmd.week_plan(id + 1).await?.is_none());

    Ok(())
}
