//! DTOs for the book endpoints.
//!
//! [`CreateBookRequest`] and [`UpdateBookRequest`] are the validation schemas
//! for the two write operations. Fields are `Option` in both so a missing
//! field becomes a `required` violation instead of a decoding failure.
//! [`parse_book_payload`] checks JSON types before decoding, so type errors
//! are reported together with every other violation.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::error::{AppError, flatten_validation_errors};

const INVALID_PAYLOAD: &str = "Invalid book payload";

/// Request body for `POST /books`. All fields are required.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(
        required(message = "isbn is required"),
        length(min = 1, message = "isbn must not be empty")
    )]
    pub isbn: Option<String>,

    #[validate(
        required(message = "amazon_url is required"),
        url(message = "amazon_url must be a valid URL")
    )]
    pub amazon_url: Option<String>,

    #[validate(
        required(message = "author is required"),
        length(min = 1, message = "author must not be empty")
    )]
    pub author: Option<String>,

    #[validate(
        required(message = "language is required"),
        length(min = 1, message = "language must not be empty")
    )]
    pub language: Option<String>,

    #[validate(
        required(message = "pages is required"),
        range(min = 1, message = "pages must be a positive integer")
    )]
    pub pages: Option<i32>,

    #[validate(
        required(message = "publisher is required"),
        length(min = 1, message = "publisher must not be empty")
    )]
    pub publisher: Option<String>,

    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title must not be empty")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "year is required"),
        range(min = 1000, max = 2100, message = "year must be between 1000 and 2100")
    )]
    pub year: Option<i32>,
}

impl TryFrom<CreateBookRequest> for NewBook {
    type Error = AppError;

    /// Converts a request that has passed [`Validate::validate`].
    ///
    /// Missing fields are reported again here rather than panicking, so an
    /// unvalidated request still fails with a 400.
    fn try_from(req: CreateBookRequest) -> Result<Self, Self::Error> {
        fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
            value.ok_or_else(|| {
                AppError::bad_request(
                    "Invalid book payload",
                    vec![format!("{field}: {field} is required")],
                )
            })
        }

        Ok(NewBook {
            isbn: require(req.isbn, "isbn")?,
            amazon_url: require(req.amazon_url, "amazon_url")?,
            author: require(req.author, "author")?,
            language: require(req.language, "language")?,
            pages: require(req.pages, "pages")?,
            publisher: require(req.publisher, "publisher")?,
            title: require(req.title, "title")?,
            year: require(req.year, "year")?,
        })
    }
}

/// Request body for `PUT /books/{isbn}`.
///
/// Every field is optional; constraints apply to fields that are present.
/// An `isbn` in the body is not part of this schema and is ignored: the path
/// ISBN addresses the book and cannot be changed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateBookRequest {
    #[validate(url(message = "amazon_url must be a valid URL"))]
    pub amazon_url: Option<String>,

    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: Option<String>,

    #[validate(length(min = 1, message = "language must not be empty"))]
    pub language: Option<String>,

    #[validate(range(min = 1, message = "pages must be a positive integer"))]
    pub pages: Option<i32>,

    #[validate(length(min = 1, message = "publisher must not be empty"))]
    pub publisher: Option<String>,

    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    #[validate(range(min = 1000, max = 2100, message = "year must be between 1000 and 2100"))]
    pub year: Option<i32>,
}

impl From<UpdateBookRequest> for BookPatch {
    fn from(req: UpdateBookRequest) -> Self {
        BookPatch {
            amazon_url: req.amazon_url,
            author: req.author,
            language: req.language,
            pages: req.pages,
            publisher: req.publisher,
            title: req.title,
            year: req.year,
        }
    }
}

/// JSON type a schema field must have when present.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    Text,
    Integer,
}

impl FieldType {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::Text => value.is_string(),
            FieldType::Integer => value
                .as_i64()
                .is_some_and(|n| i32::try_from(n).is_ok()),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FieldType::Text => "a string",
            FieldType::Integer => "an integer",
        }
    }
}

/// A write schema whose fields are type-checked on the raw JSON body.
pub trait BookSchema: DeserializeOwned + Validate {
    const FIELDS: &'static [(&'static str, FieldType)];
}

impl BookSchema for CreateBookRequest {
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("isbn", FieldType::Text),
        ("amazon_url", FieldType::Text),
        ("author", FieldType::Text),
        ("language", FieldType::Text),
        ("pages", FieldType::Integer),
        ("publisher", FieldType::Text),
        ("title", FieldType::Text),
        ("year", FieldType::Integer),
    ];
}

impl BookSchema for UpdateBookRequest {
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("amazon_url", FieldType::Text),
        ("author", FieldType::Text),
        ("language", FieldType::Text),
        ("pages", FieldType::Integer),
        ("publisher", FieldType::Text),
        ("title", FieldType::Text),
        ("year", FieldType::Integer),
    ];
}

/// Decodes and validates a write body against schema `T`.
///
/// A present field of the wrong JSON type (including `null`) is a type
/// violation. Type violations are merged with the `validator` violations of
/// the remaining fields and returned as one sorted list.
pub fn parse_book_payload<T: BookSchema>(body: Value) -> Result<T, AppError> {
    let Value::Object(mut fields) = body else {
        return Err(AppError::bad_request(
            INVALID_PAYLOAD,
            vec!["body: body must be a JSON object".to_string()],
        ));
    };

    let mistyped = take_mistyped_fields::<T>(&mut fields);
    let mut errors: Vec<String> = mistyped
        .iter()
        .map(|(field, expected)| format!("{field}: {field} must be {}", expected.describe()))
        .collect();

    let request: T = serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::bad_request(INVALID_PAYLOAD, vec![e.to_string()]))?;

    if let Err(violations) = request.validate() {
        // A mistyped field was removed before decoding; its `required`
        // violation would duplicate the type error.
        errors.extend(
            flatten_validation_errors(&violations)
                .into_iter()
                .filter(|message| {
                    let field = message.split_once(':').map_or("", |(field, _)| field);
                    !mistyped.iter().any(|(name, _)| *name == field)
                }),
        );
    }

    if errors.is_empty() {
        Ok(request)
    } else {
        errors.sort();
        Err(AppError::bad_request(INVALID_PAYLOAD, errors))
    }
}

fn take_mistyped_fields<T: BookSchema>(
    fields: &mut Map<String, Value>,
) -> Vec<(&'static str, FieldType)> {
    let mut mistyped = Vec::new();
    for &(name, expected) in T::FIELDS {
        let wrong_type = fields.get(name).is_some_and(|value| !expected.matches(value));
        if wrong_type {
            fields.remove(name);
            mistyped.push((name, expected));
        }
    }
    mistyped
}

/// JSON representation of a stored book.
#[derive(Debug, Serialize)]
pub struct BookItem {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

impl From<Book> for BookItem {
    fn from(b: Book) -> Self {
        BookItem {
            isbn: b.isbn,
            amazon_url: b.amazon_url,
            author: b.author,
            language: b.language,
            pages: b.pages,
            publisher: b.publisher,
            title: b.title,
            year: b.year,
        }
    }
}

/// Response wrapping a single book under `book`.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub book: BookItem,
}

/// Response wrapping all books under `books`.
#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub books: Vec<BookItem>,
}

/// Response carrying a human-readable confirmation.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
