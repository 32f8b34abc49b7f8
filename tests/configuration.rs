//! Tests for configuration loading

use mealprep::Config;
use std::io::Write;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.generation.meals_per_day, 3);
    assert!(!config.generation.filter_by_meal_type);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("custom.toml");
    let mut file = std::fs::File::create(&path)?;
    writeln!(
        file,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[database]
url = "sqlite:custom.db"
max_connections = 2

[logging]
format = "json"

[generation]
meals_per_day = 2
filter_by_meal_type = true
"#
    )?;

    let config = Config::load(Some(path.display().to_string()))?;
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.database.max_connections, 2);
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.generation.meals_per_day, 2);
    assert!(config.generation.filter_by_meal_type);

    Ok(())
}
