//! PostgreSQL connection pool management

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use warbler_common::DatabaseConfig;

/// Maximum time to wait when checking a connection out of the pool
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Idle time after which a pooled connection is closed
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Hard cap on the lifetime of a pooled connection
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Create a PostgreSQL connection pool from application configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(&config.url)
        .await
}
