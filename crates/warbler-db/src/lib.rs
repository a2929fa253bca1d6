//! # warbler-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `warbler-core`. It handles:
//!
//! - Connection pool management
//! - Imperative schema creation and whole-table resets for tests
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warbler_common::AppConfig;
//! use warbler_db::{create_pool, create_schema, PgUserRepository};
//! use warbler_core::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     create_schema(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, PgPool};
pub use repositories::{
    PgFollowRepository, PgLikeRepository, PgMessageRepository, PgUserRepository,
};
pub use schema::{create_schema, delete_all_rows};
