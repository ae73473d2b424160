mod common;

use book_catalog::AppError;
use book_catalog::domain::entities::{BookPatch, NewBook};
use book_catalog::domain::repositories::BookRepository;
use book_catalog::infrastructure::persistence::PgBookRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_book(isbn: &str, title: &str) -> NewBook {
    NewBook {
        isbn: isbn.to_string(),
        amazon_url: "http://example.org".to_string(),
        author: "Jane Smith".to_string(),
        language: "Spanish".to_string(),
        pages: 150,
        publisher: "Good Press".to_string(),
        title: title.to_string(),
        year: 2021,
    }
}

#[sqlx::test]
async fn test_create_book(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let book = repo.create(new_book("0987654321", "TDD")).await.unwrap();

    assert_eq!(book.isbn, "0987654321");
    assert_eq!(book.title, "TDD");
    assert_eq!(book.pages, 150);
}

#[sqlx::test]
async fn test_create_duplicate_isbn_is_conflict(pool: PgPool) {
    common::seed_book(&pool).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let result = repo.create(new_book(common::SEEDED_ISBN, "Dup")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_isbn(pool: PgPool) {
    common::seed_book(&pool).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let book = repo.find_by_isbn(common::SEEDED_ISBN).await.unwrap();

    assert_eq!(book.unwrap().title, "Learn JSONSchema");
}

#[sqlx::test]
async fn test_find_by_isbn_not_found(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let result = repo.find_by_isbn(common::MISSING_ISBN).await;

    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_orders_by_title(pool: PgPool) {
    common::insert_book(&pool, "2222222222", "Zebra").await;
    common::insert_book(&pool, "1111111111", "Aardvark").await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let books = repo.list().await.unwrap();

    let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Aardvark", "Zebra"]);
}

#[sqlx::test]
async fn test_update_keeps_absent_fields(pool: PgPool) {
    common::seed_book(&pool).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let patch = BookPatch {
        pages: Some(321),
        publisher: Some("New Press".to_string()),
        ..Default::default()
    };

    let book = repo
        .update(common::SEEDED_ISBN, patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(book.pages, 321);
    assert_eq!(book.publisher, "New Press");
    assert_eq!(book.author, "John Doe");
    assert_eq!(book.year, 2024);
}

#[sqlx::test]
async fn test_update_missing_returns_none(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let patch = BookPatch {
        title: Some("Nothing".to_string()),
        ..Default::default()
    };

    let result = repo.update(common::MISSING_ISBN, patch).await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    common::seed_book(&pool).await;
    let repo = PgBookRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete(common::SEEDED_ISBN).await.unwrap());
    assert!(!repo.delete(common::SEEDED_ISBN).await.unwrap());
    assert_eq!(common::count_books(&pool).await, 0);
}
