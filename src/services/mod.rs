//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::repository::BookStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookService,
}

impl Services {
    /// Create all services over the given storage handle
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self {
            books: books::BookService::new(store),
        }
    }
}
