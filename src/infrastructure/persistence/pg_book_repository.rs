//! PostgreSQL implementation of book repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `books` table.
///
/// Every statement is parameterized. Each call checks a connection out of
/// the pool and returns it when the future completes, on success or error.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookRow {
    isbn: String,
    amazon_url: String,
    author: String,
    language: String,
    pages: i32,
    publisher: String,
    title: String,
    year: i32,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Book {
            isbn: r.isbn,
            amazon_url: r.amazon_url,
            author: r.author,
            language: r.language,
            pages: r.pages,
            publisher: r.publisher,
            title: r.title,
            year: r.year,
        }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT isbn, amazon_url, author, language, pages, publisher, title, year
            FROM books
            ORDER BY title, isbn
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT isbn, amazon_url, author, language, pages, publisher, title, year
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (isbn, amazon_url, author, language, pages, publisher, title, year)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING isbn, amazon_url, author, language, pages, publisher, title, year
            "#,
        )
        .bind(new_book.isbn)
        .bind(new_book.amazon_url)
        .bind(new_book.author)
        .bind(new_book.language)
        .bind(new_book.pages)
        .bind(new_book.publisher)
        .bind(new_book.title)
        .bind(new_book.year)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, isbn: &str, patch: BookPatch) -> Result<Option<Book>, AppError> {
        // NULL parameters keep the stored column value.
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books SET
                amazon_url = COALESCE($2::TEXT, amazon_url),
                author     = COALESCE($3::TEXT, author),
                language   = COALESCE($4::TEXT, language),
                pages      = COALESCE($5::INTEGER, pages),
                publisher  = COALESCE($6::TEXT, publisher),
                title      = COALESCE($7::TEXT, title),
                year       = COALESCE($8::INTEGER, year)
            WHERE isbn = $1
            RETURNING isbn, amazon_url, author, language, pages, publisher, title, year
            "#,
        )
        .bind(isbn)
        .bind(patch.amazon_url)
        .bind(patch.author)
        .bind(patch.language)
        .bind(patch.pages)
        .bind(patch.publisher)
        .bind(patch.title)
        .bind(patch.year)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn delete(&self, isbn: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(isbn)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
