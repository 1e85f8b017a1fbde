//! Resource presenters: entity → external JSON shape
//!
//! Relations are included only when the handler explicitly loaded them.
//! When they are loaded but empty, the key serializes as `[]`, never null.

use crate::entities::{Author, Book};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Single-resource envelope: `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct Document<T> {
    pub data: T,
}

/// Minimal author shape nested inside a book
#[derive(Debug, Serialize)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<&Author> for AuthorSummary {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name.clone(),
        }
    }
}

/// Minimal book shape nested inside an author
#[derive(Debug, Serialize)]
pub struct BookSummary {
    pub id: Uuid,
    pub title: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
        }
    }
}

/// Presented author
#[derive(Debug, Serialize)]
pub struct AuthorResource {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<BookSummary>>,
}

impl AuthorResource {
    pub fn new(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            created_at: author.created_at,
            updated_at: author.updated_at,
            books: None,
        }
    }

    pub fn with_books(author: Author, books: Vec<BookSummary>) -> Self {
        let mut resource = Self::new(author);
        resource.books = Some(books);
        resource
    }
}

/// Presented book
#[derive(Debug, Serialize)]
pub struct BookResource {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub publication_year: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<AuthorSummary>>,
}

impl BookResource {
    pub fn new(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            description: book.description,
            publication_year: book.publication_year,
            created_at: book.created_at,
            updated_at: book.updated_at,
            authors: None,
        }
    }

    pub fn with_authors(book: Book, authors: Vec<AuthorSummary>) -> Self {
        let mut resource = Self::new(book);
        resource.authors = Some(authors);
        resource
    }
}
