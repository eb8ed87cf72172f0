//! Data access layer for the `products` table.
//!
//! Owns pool construction, migrations, the row models and the repository
//! that issues every SQL statement. Store failures never leave this crate
//! as `sqlx::Error`; see [`error::StoreError`].

use sqlx::postgres::PgPoolOptions;
use storefront_core::types::Timestamp;

pub mod error;
pub mod models;
pub mod repositories;

use error::{store_failure, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Current time according to the database server.
pub async fn server_time(pool: &DbPool) -> Result<Timestamp, StoreError> {
    sqlx::query_scalar::<_, Timestamp>("SELECT NOW()")
        .fetch_one(pool)
        .await
        .map_err(store_failure("server_time"))
}
