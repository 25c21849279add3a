use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

/// Creates a PostgreSQL connection pool against `database_name` and applies
/// pending migrations.
pub async fn create_pool(database_url: &str, database_name: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let options = PgConnectOptions::from_str(database_url)
        .context("DATABASE_URL is not a valid PostgreSQL connection string")?
        .database(database_name);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await?;

    info!("PostgreSQL connection pool established (database: {database_name})");

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied");

    Ok(pool)
}
