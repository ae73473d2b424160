//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::BookService;
use crate::infrastructure::persistence::PgBookRepository;

/// State shared by all request handlers.
///
/// Holds no mutable data: every request reads and writes PostgreSQL through
/// the pool.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService<PgBookRepository>>,
    pub pool: Arc<PgPool>,
}

impl AppState {
    /// Wires the PostgreSQL repository and service around a pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let repository = Arc::new(PgBookRepository::new(pool.clone()));

        Self {
            book_service: Arc::new(BookService::new(repository)),
            pool,
        }
    }
}
