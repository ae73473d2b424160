#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use book_catalog::api::routes::book_routes;
use book_catalog::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub const SEEDED_ISBN: &str = "1234567890";
pub const MISSING_ISBN: &str = "0000000000";

/// Inserts the book every handler test starts from.
pub async fn seed_book(pool: &PgPool) {
    insert_book(pool, SEEDED_ISBN, "Learn JSONSchema").await;
}

pub async fn insert_book(pool: &PgPool, isbn: &str, title: &str) {
    sqlx::query(
        r#"
        INSERT INTO books (isbn, amazon_url, author, language, pages, publisher, title, year)
        VALUES ($1, 'http://example.com', 'John Doe', 'English', 200, 'Tech Inc', $2, 2024)
        "#,
    )
    .bind(isbn)
    .bind(title)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_books(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// A complete, valid creation payload.
pub fn new_book_payload(isbn: &str) -> Value {
    json!({
        "isbn": isbn,
        "amazon_url": "http://example.org",
        "author": "Jane Smith",
        "language": "Spanish",
        "pages": 150,
        "publisher": "Good Press",
        "title": "TDD - Test Driven Development",
        "year": 2021
    })
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: PgPool) -> TestServer {
    let app: Router = book_routes().with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}
