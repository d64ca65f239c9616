use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use reportcard::modules::seeds::SeedService;
use reportcard::state::init_app_state;
use reportcard_config::{CorsConfig, StorageBackend, StorageConfig};
use reportcard_observability::init_tracing;

#[derive(Parser)]
#[command(name = "reportcard-cli")]
#[command(about = "Report Card CLI - Administrative tools for the Report Card API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed roles, grades, subjects, users and enrollments
    Seed,
    /// Soft-delete every active record
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut storage = StorageConfig::from_env();
    storage.backend = StorageBackend::Postgres;
    storage.database_url = cli.database_url.or(storage.database_url);

    let state = init_app_state(&storage, CorsConfig::default()).await?;
    let seeder = SeedService::new(state);

    let response = match cli.command {
        Commands::Seed => seeder.seed_all().await,
        Commands::ClearSeed => seeder.clear_all().await,
    }
    .map_err(|e| e.error)
    .context("Command failed")?;

    println!("\n✅ {}", response.message);
    println!("   At: {}", response.timestamp.to_rfc3339());
    Ok(())
}
