//! API handlers for the books REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Bare `/book/` and `/delete/` answer with the empty-id error instead of 404
    let api = Router::new()
        .route("/create", post(books::create_book))
        .route("/book/", get(books::get_book_without_id))
        .route("/book/:id", get(books::get_book))
        .route("/delete/", delete(books::delete_book_without_id))
        .route("/delete/:id", delete(books::delete_book))
        .route("/books", get(books::list_books))
        .with_state(state.clone());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
