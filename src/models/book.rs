//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Persisted book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Assigned by the database, never reused
    pub id: i64,
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when the record is soft-deleted
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Create book request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
}

/// Column values for a new row; identity and timestamps come from the database
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBook {
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
}

impl From<CreateBook> for NewBook {
    fn from(data: CreateBook) -> Self {
        Self {
            author: data.author,
            title: data.title,
            publisher: data.publisher,
        }
    }
}
