//! Imperative schema management
//!
//! The schema is created once at process start; there is no migration
//! tooling. Tests reset state with a blanket delete across all tables
//! rather than per-test transactions.

use sqlx::PgPool;
use tracing::info;

/// DDL for the full schema, applied in dependency order
const CREATE_TABLES: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS users (
        id            BIGSERIAL PRIMARY KEY,
        username      TEXT NOT NULL UNIQUE,
        email         TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        image_url     TEXT,
        created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS messages (
        id         BIGSERIAL PRIMARY KEY,
        user_id    BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        text       VARCHAR(140) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS follows (
        follower_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        followed_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        PRIMARY KEY (follower_id, followed_id)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS likes (
        user_id    BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        message_id BIGINT NOT NULL REFERENCES messages(id) ON DELETE CASCADE,
        PRIMARY KEY (user_id, message_id)
    )
    ",
];

/// Tables in delete order (children before parents)
const DELETE_ORDER: &[&str] = &["likes", "follows", "messages", "users"];

/// Create all tables if they do not exist yet
pub async fn create_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in CREATE_TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    info!("Database schema ensured");
    Ok(())
}

/// Delete every row from every table
///
/// Foreign keys dictate the order: likes and follows first, then
/// messages, then users.
pub async fn delete_all_rows(pool: &PgPool) -> Result<(), sqlx::Error> {
    for table in DELETE_ORDER {
        sqlx::query(&format!("DELETE FROM {table}")).execute(pool).await?;
    }
    Ok(())
}
