//! # REST API for Book Management
//!
//! Endpoints for listing, searching, creating, updating, and deleting books.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::info;

use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::book_mapper::BookMapper;
use crate::AppState;
use shared::Book;

/// Create the book API router, to be nested under `/api/books`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/title/:title", get(find_books_by_title))
        .route("/:id", get(get_book).put(update_book).delete(delete_book))
}

/// List all books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    info!("GET /api/books");

    let books = state.book_service.list_books().await?;
    Ok(Json(BookMapper::to_dto_list(books)))
}

/// List books with an exact title
pub async fn find_books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    info!("GET /api/books/title/{}", title);

    let books = state.book_service.find_by_title(&title).await?;
    Ok(Json(BookMapper::to_dto_list(books)))
}

/// Get a book by ID
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(id) = id?;
    info!("GET /api/books/{}", id);

    let book = state.book_service.get_book(id).await?;
    Ok(Json(BookMapper::to_dto(book)))
}

/// Create a new book
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    info!("POST /api/books - request: {:?}", request);

    let book = state.book_service.create_book(BookMapper::to_draft(request)).await?;

    Ok((StatusCode::CREATED, Json(BookMapper::to_dto(book))))
}

/// Replace a book
pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(id) = id?;
    let Json(request) = payload?;
    info!("PUT /api/books/{} - request: {:?}", id, request);

    let book = state.book_service.update_book(id, BookMapper::to_draft(request)).await?;
    Ok(Json(BookMapper::to_dto(book)))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    info!("DELETE /api/books/{}", id);

    state.book_service.delete_book(id).await?;
    Ok(StatusCode::OK)
}
