use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::str::FromStr;
use temp_dir::TempDir;

async fn pool(dir: &TempDir) -> anyhow::Result<SqlitePool> {
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);

    Ok(SqlitePool::connect_with(opts).await?)
}

#[tokio::test]
async fn test_migrate_twice() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = pool(&dir).await?;

    mealprep_db::migrate(&pool).await?;
    mealprep_db::migrate(&pool).await?;

    let tables = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table'",
    )
    .fetch_all(&pool)
    .await?;

    for table in [
        "ingredient",
        "meal_plan",
        "meal_plan_recipe",
        "recipe",
        "recipe_ingredient",
        "recipe_meal_type",
    ] {
        assert!(tables.iter().any(|t| t == table), "missing table {table}");
    }

    Ok(())
}

#[tokio::test]
async fn test_unique_assignment() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = pool(&dir).await?;
    mealprep_db::migrate(&pool).await?;

    sqlx::query("INSERT INTO recipe (id, name) VALUES (1, 'Soup')")
        .execute(&pool)
        .await?;
    sqlx::query("INSERT INTO meal_plan (id, name, start_date, created_at) VALUES (1, 'Week', 0, 0)")
        .execute(&pool)
        .await?;

    let insert = "INSERT INTO meal_plan_recipe (plan_id, recipe_id, day, meal_type) VALUES (1, 1, 'Monday', ?)";

    sqlx::query(insert).bind("Lunch").execute(&pool).await?;
    assert!(sqlx::query(insert).bind("Lunch").execute(&pool).await.is_err());

    sqlx::query(insert).bind(None::<String>).execute(&pool).await?;
    assert!(
        sqlx::query(insert)
            .bind(None::<String>)
            .execute(&pool)
            .await
            .is_err()
    );

    Ok(())
}
