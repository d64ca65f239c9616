use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use reportcard::modules::seeds::SeedService;
use reportcard::router::init_router;
use reportcard::state::init_app_state;
use reportcard_config::{CorsConfig, ServerConfig, StorageBackend, StorageConfig};
use reportcard_observability::init_tracing;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "reportcard")]
#[command(about = "Report Card API server", long_about = None)]
struct Args {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Storage backend (overrides STORAGE_BACKEND)
    #[arg(long, value_enum)]
    storage: Option<StorageBackend>,

    /// Seed sample data before serving (same as SEED_ON_STARTUP=true)
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let mut server = ServerConfig::from_env();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    let mut storage = StorageConfig::from_env();
    if let Some(backend) = args.storage {
        storage.backend = backend;
    }

    let state = init_app_state(&storage, CorsConfig::from_env()).await?;

    if args.seed || server.seed_on_startup {
        SeedService::new(state.clone())
            .seed_all()
            .await
            .map_err(|e| e.error)
            .context("Seeding failed")?;
    }

    let app = init_router(state);

    let addr = server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, backend = %storage.backend, "Server running");
    info!("Swagger UI available at http://{addr}/swagger-ui");
    info!("Scalar UI available at http://{addr}/scalar");

    axum::serve(listener, app).await?;
    Ok(())
}
