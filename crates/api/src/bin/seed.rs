//! Wipe the `site_diaries` table and load the bundled seed set.
//!
//! Reads `DATABASE_URL` (and the other `DB_*` settings) like the server.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitediary_api::config::DatabaseConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitediary_seed=info,sitediary_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = DatabaseConfig::from_env();

    let pool = sitediary_db::create_pool(&db.url, db.max_connections, db.acquire_timeout())
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sitediary_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let documents = sitediary_db::seed::bundled_seed().context("Bundled seed set is malformed")?;

    let inserted = sitediary_db::seed::reseed(&pool, &documents)
        .await
        .context("Failed to reseed site diaries")?;

    tracing::info!(inserted, "Database seeding completed");
    Ok(())
}
