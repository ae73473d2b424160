//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`PgBookRepository`] - Book storage and retrieval

pub mod pg_book_repository;

pub use pg_book_repository::PgBookRepository;
