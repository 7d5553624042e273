//! Service entry point: logging, configuration, database pool, server.

use anyhow::Context;
use song_service::config::ServiceConfig;
use song_service::{build_rocket, logging};
use song_store::db::{create_pool, DatabaseConfig};
use tracing::info;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env().context("failed to load configuration")?;
    logging::init(config.log_format)?;

    info!(
        address = %config.address,
        port = config.port,
        database_url = %config.database_url,
        "starting song service"
    );

    let pool = create_pool(DatabaseConfig::from_url(config.database_url.clone()))
        .await
        .context("failed to set up the database")?;

    let figment = rocket::Config::figment()
        .merge(("address", config.address.to_string()))
        .merge(("port", config.port));

    build_rocket(figment, pool)
        .launch()
        .await
        .context("server exited with an error")?;

    Ok(())
}
