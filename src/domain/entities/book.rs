//! Domain entity representing a catalog book.

/// A book stored in the catalog.
///
/// The `isbn` is the primary key and never changes after creation; every
/// other field can be replaced through [`BookPatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

/// Input data for creating a new book.
///
/// Every field is required. Values are stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

impl NewBook {
    /// Returns the book as it will look once stored.
    pub fn into_book(self) -> Book {
        Book {
            isbn: self.isbn,
            amazon_url: self.amazon_url,
            author: self.author,
            language: self.language,
            pages: self.pages,
            publisher: self.publisher,
            title: self.title,
            year: self.year,
        }
    }
}

/// Partial update for an existing book.
///
/// `None` leaves the stored value unchanged. There is no `isbn` field: the
/// key of a book is immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub amazon_url: Option<String>,
    pub author: Option<String>,
    pub language: Option<String>,
    pub pages: Option<i32>,
    pub publisher: Option<String>,
    pub title: Option<String>,
    pub year: Option<i32>,
}

impl BookPatch {
    /// Returns true when the patch would not change any column.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies the patch to an in-memory copy of a book.
    #[cfg(test)]
    pub fn apply_to(self, mut book: Book) -> Book {
        if let Some(amazon_url) = self.amazon_url {
            book.amazon_url = amazon_url;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(language) = self.language {
            book.language = language;
        }
        if let Some(pages) = self.pages {
            book.pages = pages;
        }
        if let Some(publisher) = self.publisher {
            book.publisher = publisher;
        }
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(year) = self.year {
            book.year = year;
        }
        book
    }
}
