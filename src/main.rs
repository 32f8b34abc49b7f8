use anyhow::Result;
use clap::{Parser, Subcommand};
use mealprep_shared::mealplan::Day;

/// mealprep - weekly meal planning and shopping lists
#[derive(Parser)]
#[command(name = "mealprep")]
#[command(about = "Meal plan generation and shopping list aggregation", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Import recipes from a JSON array or CSV file
    Import {
        file: std::path::PathBuf,
    },
    /// Generate and persist a meal plan
    Generate {
        #[arg(long)]
        name: String,

        /// First day of the plan (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Last day of the plan (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Days to fill, repeatable; the whole week when omitted
        #[arg(long = "day")]
        days: Vec<Day>,

        #[arg(long)]
        meals_per_day: Option<usize>,

        #[arg(long)]
        filter_by_meal_type: bool,

        /// Seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealprep::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealprep::observability::init_observability(
        "mealprep",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => mealprep::cli::server::serve(config, host, port).await,
        Commands::Migrate => mealprep::cli::migrate::migrate(config).await,
        Commands::Reset => mealprep::cli::migrate::reset(config).await,
        Commands::Import { file } => mealprep::cli::import::import(config, file).await,
        Commands::Generate {
            name,
            start,
            end,
            days,
            meals_per_day,
            filter_by_meal_type,
            seed,
        } => {
            mealprep::cli::generate::generate(
                config,
                mealprep::cli::generate::GenerateArgs {
                    name,
                    start,
                    end,
                    days,
                    meals_per_day,
                    filter_by_meal_type,
                    seed,
                },
            )
            .await
        }
    }
}
