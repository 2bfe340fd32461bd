//! One-shot schema bootstrap: connect, create the `shows` table if needed, exit.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchme_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = watchme_db::create_pool(&database_url, 1)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    watchme_db::ensure_schema(&pool)
        .await
        .context("Failed to initialize database schema")?;

    pool.close().await;
    tracing::info!("Schema setup completed");
    Ok(())
}
