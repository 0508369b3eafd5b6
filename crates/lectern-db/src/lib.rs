//! # Lectern DB
//!
//! Database pool initialization for the Lectern API.
//!
//! The connection string is read from the `DATABASE_URL` environment
//! variable. The returned pool is cheaply cloneable and is shared through
//! the application state.

use std::env;

use sqlx::postgres::PgPoolOptions;

/// Initializes the PostgreSQL connection pool.
///
/// Called once during application startup.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the database is unreachable.
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
