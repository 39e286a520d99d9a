//! Book storage on Repository

use async_trait::async_trait;

use super::{BookStore, Repository};
use crate::models::book::{Book, NewBook};

#[async_trait]
impl BookStore for Repository {
    async fn insert(&self, book: &NewBook) -> Result<Book, sqlx::Error> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (author, title, publisher, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, author, title, publisher, created_at, updated_at, deleted_at
            "#,
        )
        .bind(&book.author)
        .bind(&book.title)
        .bind(&book.publisher)
        .fetch_one(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT id, author, title, publisher, created_at, updated_at, deleted_at
            FROM books
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn list(&self) -> Result<Vec<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT id, author, title, publisher, created_at, updated_at, deleted_at
            FROM books
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Soft delete: stamps `deleted_at` on a live row
    async fn soft_delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE books SET deleted_at = NOW(), updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
