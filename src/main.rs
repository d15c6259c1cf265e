use clap::Parser;
use std::sync::Arc;
use tracing::info;

use cinegraph::logging;
use cinegraph::server;
use cinegraph::storage::{CatalogStore, InMemoryCatalog};

#[derive(Parser)]
#[command(name = "cinegraph")]
#[command(about = "GraphQL API server for a movie and director catalog")]
#[command(version = "0.1.0")]
struct Cli {
    /// Port to run the server on
    #[arg(short, long, default_value = "3005")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    logging::init_logging();

    info!("Seeding in-memory catalog");
    let store: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalog::with_seed_data());

    server::start_server(store, cli.port).await?;

    Ok(())
}
