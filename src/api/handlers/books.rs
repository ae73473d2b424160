//! Handlers for the book resource endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

use crate::api::dto::book::{
    BookListResponse, BookResponse, CreateBookRequest, MessageResponse, UpdateBookRequest,
    parse_book_payload,
};
use crate::domain::entities::NewBook;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all books.
///
/// # Endpoint
///
/// `GET /books`
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<BookListResponse>, AppError> {
    let books = state.book_service.list_books().await?;

    Ok(Json(BookListResponse {
        books: books.into_iter().map(Into::into).collect(),
    }))
}

/// Returns a single book.
///
/// # Endpoint
///
/// `GET /books/{isbn}`
///
/// # Errors
///
/// Returns 404 if no book has this ISBN.
pub async fn get_book_handler(
    Path(isbn): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookResponse>, AppError> {
    let book = state.book_service.get_book(&isbn).await?;

    Ok(Json(BookResponse { book: book.into() }))
}

/// Creates a book.
///
/// # Endpoint
///
/// `POST /books`
///
/// # Request Body
///
/// ```json
/// {
///   "isbn": "0987654321",
///   "amazon_url": "http://example.org",
///   "author": "Jane Smith",
///   "language": "Spanish",
///   "pages": 150,
///   "publisher": "Good Press",
///   "title": "TDD - Test Driven Development",
///   "year": 2021
/// }
/// ```
///
/// # Errors
///
/// Returns 400 with every violated constraint if the body is invalid.
/// Returns 409 if the ISBN already exists.
pub async fn create_book_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), AppError> {
    let Json(body) = payload?;
    let payload: CreateBookRequest = parse_book_payload(body)?;

    let book = state
        .book_service
        .create_book(NewBook::try_from(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(BookResponse { book: book.into() })))
}

/// Partially updates a book.
///
/// # Endpoint
///
/// `PUT /books/{isbn}`
///
/// Only the fields present in the body are changed. The path ISBN addresses
/// the book; an `isbn` in the body is ignored.
///
/// # Errors
///
/// Returns 400 with every violated constraint if the body is invalid,
/// including a `null` or wrongly typed field. Returns 404 if no book has
/// this ISBN.
pub async fn update_book_handler(
    Path(isbn): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let Json(body) = payload?;
    let payload: UpdateBookRequest = parse_book_payload(body)?;

    let book = state
        .book_service
        .update_book(&isbn, payload.into())
        .await?;

    Ok(Json(BookResponse { book: book.into() }))
}

/// Deletes a book.
///
/// # Endpoint
///
/// `DELETE /books/{isbn}`
///
/// # Errors
///
/// Returns 404 if no book has this ISBN.
pub async fn delete_book_handler(
    Path(isbn): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.book_service.delete_book(&isbn).await?;

    Ok(Json(MessageResponse {
        message: "Book deleted".to_string(),
    }))
}
