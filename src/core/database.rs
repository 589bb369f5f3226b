use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::core::config::DatabaseConfig;

/// Build the shared Postgres pool from [`DatabaseConfig`].
///
/// Connections identify themselves as `railsathi-core` so complaint and
/// media traffic is attributable in `pg_stat_activity`.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let connect_options = config
        .url
        .parse::<PgConnectOptions>()?
        .application_name("railsathi-core");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect_with(connect_options)
        .await?;

    tracing::debug!(
        "Postgres pool ready: size={}, idle={}, max_connections={}",
        pool.size(),
        pool.num_idle(),
        config.max_connections
    );

    Ok(pool)
}
