//! Book service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult, BookOperation},
    models::book::{Book, CreateBook, NewBook},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let new_book = NewBook::from(data);
        let book = self
            .store
            .insert(&new_book)
            .await
            .map_err(|e| AppError::Database(BookOperation::Create, e))?;
        tracing::info!("Created book id={}", book.id);
        Ok(book)
    }

    /// Fetch a live book by its raw path id
    pub async fn get(&self, raw_id: &str) -> AppResult<Book> {
        let id = parse_id(BookOperation::Fetch, raw_id)?;
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| AppError::Database(BookOperation::Fetch, e))?
            .ok_or(AppError::NotFound(BookOperation::Fetch, id))
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store
            .list()
            .await
            .map_err(|e| AppError::Database(BookOperation::List, e))
    }

    /// Soft-delete a live book by its raw path id
    pub async fn delete(&self, raw_id: &str) -> AppResult<()> {
        let id = parse_id(BookOperation::Delete, raw_id)?;
        let affected = self
            .store
            .soft_delete(id)
            .await
            .map_err(|e| AppError::Database(BookOperation::Delete, e))?;
        if affected == 0 {
            // Nothing live to delete
            tracing::debug!("No live book with id={} to delete", id);
        } else {
            tracing::info!("Deleted book id={}", id);
        }
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        self.store.ping().await
    }
}

/// Empty ids are rejected before any storage call
fn parse_id(op: BookOperation, raw_id: &str) -> AppResult<i64> {
    let raw = raw_id.trim();
    if raw.is_empty() {
        return Err(AppError::EmptyId(op));
    }
    raw.parse::<i64>()
        .map_err(|_| AppError::InvalidId(op, raw.to_string()))
}
