//! Book catalog service.

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service implementing the book resource lifecycle.
///
/// Input has already passed schema validation by the time it reaches this
/// service. Responsibilities here:
/// - Turning a missing ISBN into [`AppError::NotFound`]
/// - Rejecting duplicate ISBNs with [`AppError::Conflict`]
/// - Checking existence before any mutation
pub struct BookService<R: BookRepository> {
    repository: Arc<R>,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a new book service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every book in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a book by ISBN.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this ISBN.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_book(&self, isbn: &str) -> Result<Book, AppError> {
        self.repository
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| book_not_found(isbn))
    }

    /// Creates a new book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the ISBN is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_book(&self, new_book: NewBook) -> Result<Book, AppError> {
        if self.repository.find_by_isbn(&new_book.isbn).await?.is_some() {
            return Err(AppError::conflict(
                "Book with this isbn already exists",
                json!({ "isbn": new_book.isbn }),
            ));
        }

        let book = self.repository.create(new_book).await?;
        tracing::info!(isbn = %book.isbn, "Book created");

        Ok(book)
    }

    /// Applies a partial update to an existing book.
    ///
    /// An empty patch returns the stored book unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this ISBN.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_book(&self, isbn: &str, patch: BookPatch) -> Result<Book, AppError> {
        let existing = self.get_book(isbn).await?;

        if patch.is_empty() {
            return Ok(existing);
        }

        // The row can disappear between the lookup and the update.
        let book = self
            .repository
            .update(isbn, patch)
            .await?
            .ok_or_else(|| book_not_found(isbn))?;
        tracing::info!(isbn = %book.isbn, "Book updated");

        Ok(book)
    }

    /// Deletes a book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this ISBN.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_book(&self, isbn: &str) -> Result<(), AppError> {
        if !self.repository.delete(isbn).await? {
            return Err(book_not_found(isbn));
        }

        tracing::info!(isbn, "Book deleted");
        Ok(())
    }
}

fn book_not_found(isbn: &str) -> AppError {
    AppError::not_found(
        format!("There is no book with an isbn '{isbn}'"),
        json!({ "isbn": isbn }),
    )
}
