//! Book endpoints

use axum::{
    extract::{rejection::PathRejection, FromRequest, Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, BookOperation},
    models::book::{Book, CreateBook},
    AppState,
};

/// JSON body extractor whose rejections all surface as `request failed` (422)
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct BookJson<T>(pub T);

/// An undecodable path id is reported as that operation's failure, never as an empty id
fn path_id(op: BookOperation, id: Result<Path<String>, PathRejection>) -> AppResult<String> {
    id.map(|Path(id)| id)
        .map_err(|rejection| AppError::InvalidId(op, rejection.body_text()))
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub message: String,
    pub data: Book,
}

#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub message: String,
    pub data: Vec<Book>,
}

/// Create a book
#[utoipa::path(
    post,
    path = "/api/create",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = MessageResponse),
        (status = 400, description = "Insert failed", body = crate::error::ErrorResponse),
        (status = 422, description = "Unparsable body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    BookJson(data): BookJson<CreateBook>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.create(data).await?;
    Ok(Json(MessageResponse {
        message: "Book has been created".to_string(),
    }))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/api/book/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 400, description = "Missing, deleted or unreadable book", body = crate::error::ErrorResponse),
        (status = 502, description = "Empty id", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<BookResponse>> {
    let id = path_id(BookOperation::Fetch, id)?;
    let book = state.services.books.get(&id).await?;
    Ok(Json(BookResponse {
        message: "Book fetched successfully".to_string(),
        data: book,
    }))
}

/// `GET /api/book/` with no id
pub async fn get_book_without_id() -> AppResult<Json<BookResponse>> {
    Err(AppError::EmptyId(BookOperation::Fetch))
}

/// List all books that are not deleted
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = BookListResponse),
        (status = 400, description = "Query failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BookListResponse>> {
    let books = state.services.books.list().await?;
    Ok(Json(BookListResponse {
        message: "books fetched successfully".to_string(),
        data: books,
    }))
}

/// Soft-delete a book
#[utoipa::path(
    delete,
    path = "/api/delete/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Delete failed", body = crate::error::ErrorResponse),
        (status = 500, description = "Empty id", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let id = path_id(BookOperation::Delete, id)?;
    state.services.books.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
    }))
}

/// `DELETE /api/delete/` with no id
pub async fn delete_book_without_id() -> AppResult<Json<MessageResponse>> {
    Err(AppError::EmptyId(BookOperation::Delete))
}
