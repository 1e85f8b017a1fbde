//! Repository traits for entities and the author↔book link set
//!
//! Handlers depend on these traits only; concrete stores live in
//! `storage/`. Construction happens once at startup and the trait objects
//! are passed through `AppState`, never looked up ambiently.

use crate::entities::{Author, Book};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository for `Author` records
#[async_trait]
pub trait AuthorService: Send + Sync {
    async fn create(&self, author: Author) -> Result<Author>;

    async fn get(&self, id: &Uuid) -> Result<Option<Author>>;

    async fn list(&self) -> Result<Vec<Author>>;

    /// Replace the stored record. Returns `None` when the id is unknown.
    async fn update(&self, id: &Uuid, author: Author) -> Result<Option<Author>>;

    /// Hard delete. Returns `false` when the id was not present.
    async fn delete(&self, id: &Uuid) -> Result<bool>;

    /// Of the given ids, return those that do NOT reference a stored
    /// author. Used to strictly validate attach/sync payloads.
    async fn missing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>>;
}

/// Repository for `Book` records
#[async_trait]
pub trait BookService: Send + Sync {
    async fn create(&self, book: Book) -> Result<Book>;

    async fn get(&self, id: &Uuid) -> Result<Option<Book>>;

    async fn list(&self) -> Result<Vec<Book>>;

    async fn update(&self, id: &Uuid, book: Book) -> Result<Option<Book>>;

    async fn delete(&self, id: &Uuid) -> Result<bool>;
}

/// The relationship manager over the author_book join set.
///
/// A `(book_id, author_id)` pair appears at most once. Operations mutate
/// only join rows, never the entities themselves, and each one is atomic
/// with respect to the store.
#[async_trait]
pub trait LinkService: Send + Sync {
    /// Authors linked to a book, in link insertion order. Empty when none.
    async fn authors_of(&self, book_id: &Uuid) -> Result<Vec<Uuid>>;

    /// Symmetric view: books linked to an author.
    async fn books_of(&self, author_id: &Uuid) -> Result<Vec<Uuid>>;

    /// Add links for each id not already linked (idempotent union).
    async fn attach(&self, book_id: &Uuid, author_ids: &[Uuid]) -> Result<()>;

    /// Remove one link if present; succeeds as a no-op when absent.
    async fn detach(&self, book_id: &Uuid, author_id: &Uuid) -> Result<()>;

    /// Replace the book's link set with exactly `author_ids`: removed
    /// pairs deleted, new pairs inserted, common pairs left untouched.
    /// All-or-nothing.
    async fn sync(&self, book_id: &Uuid, author_ids: &[Uuid]) -> Result<()>;

    /// Remove every link involving the entity, on either side. Used to
    /// cascade when an author or book is deleted.
    async fn unlink_entity(&self, id: &Uuid) -> Result<()>;
}
