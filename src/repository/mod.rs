//! Repository layer for database operations

pub mod books;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{
    migrate::MigrateError,
    postgres::{PgPool, PgPoolOptions},
    Pool, Postgres,
};

use crate::{
    config::DatabaseConfig,
    models::book::{Book, NewBook},
};

/// Storage operations for book records.
///
/// Reads never return soft-deleted rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a row and return it with its assigned id and timestamps
    async fn insert(&self, book: &NewBook) -> Result<Book, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, sqlx::Error>;

    async fn list(&self) -> Result<Vec<Book>, sqlx::Error>;

    /// Mark a live row deleted, returning the number of rows affected
    async fn soft_delete(&self, id: i64) -> Result<u64, sqlx::Error>;

    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Open the connection pool described by `config`
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
}

/// Bring the schema up to date with the embedded migrations
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
