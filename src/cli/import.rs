use anyhow::{Context, Result};
use mealprep_recipe::{CreateInput, ImportReport};
use std::path::{Path, PathBuf};

#[tracing::instrument(skip(config))]
pub async fn import(config: crate::config::Config, file: PathBuf) -> Result<()> {
    let content = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let inputs = parse_file(&file, &content)?;

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    mealprep_db::migrate(&pool).await?;

    let report = import_recipes(mealprep_shared::State::single(pool.clone()), inputs).await?;
    pool.close().await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

pub async fn import_recipes(
    state: mealprep_shared::State,
    inputs: Vec<CreateInput>,
) -> Result<ImportReport> {
    Ok(mealprep_recipe::Command::new(state).import(inputs).await?)
}

/// `.csv` files follow the spreadsheet export layout, anything else is a JSON array.
pub fn parse_file(file: &Path, content: &str) -> Result<Vec<CreateInput>> {
    let is_csv = file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        return Ok(mealprep_recipe::parse_csv(content.as_bytes())?);
    }

    serde_json::from_str(content)
        .with_context(|| format!("{} is not a JSON array of recipes", file.display()))
}
