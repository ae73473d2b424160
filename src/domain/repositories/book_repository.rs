//! Repository trait for book data access.

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `books` table.
///
/// Lookups return `Option` and mutations report whether a row was touched;
/// turning a miss into [`AppError::NotFound`] is the service's job.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_book.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Returns every stored book, ordered by title then ISBN.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// Finds a book by its exact ISBN.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, AppError>;

    /// Inserts a new book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a book with the same ISBN exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError>;

    /// Applies a partial update to the book addressed by `isbn`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Book))` with the row as stored after the update
    /// - `Ok(None)` if no book has this ISBN
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, isbn: &str, patch: BookPatch) -> Result<Option<Book>, AppError>;

    /// Deletes the book addressed by `isbn`.
    ///
    /// Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, isbn: &str) -> Result<bool, AppError>;
}
