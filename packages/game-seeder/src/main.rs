use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shared::{seed_game, RedisStore, SeedService};

mod config;

use config::{SeederArgs, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = StoreConfig::from(SeederArgs::parse());
    seed(&config).await?;

    println!("Game service database seeded with initial data.");
    Ok(())
}

async fn seed(config: &StoreConfig) -> anyhow::Result<()> {
    info!("Seeding game service store at {}", config.target());

    let store = RedisStore::new(config.connection_url(), config.connect_timeout);
    let service = SeedService::new(Arc::new(store));

    let game = seed_game();
    service
        .seed(&game)
        .await
        .with_context(|| format!("Failed to seed {}", game.storage_key()))?;

    Ok(())
}
