//! In-memory stores backed by `RwLock`-guarded index maps
//!
//! The default backend for development and tests. `IndexMap`/`IndexSet`
//! keep insertion order, so listings and relation views are deterministic
//! without a database. Every mutation runs under a single write guard,
//! which makes `sync`'s remove+insert sequence all-or-nothing.

use crate::core::service::{AuthorService, BookService, LinkService};
use crate::entities::{Author, Book};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use indexmap::{IndexMap, IndexSet};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Generic keyed record store
#[derive(Clone)]
pub struct InMemoryStore<T> {
    records: Arc<RwLock<IndexMap<Uuid, T>>>,
}

pub type InMemoryAuthorStore = InMemoryStore<Author>;
pub type InMemoryBookStore = InMemoryStore<Book>;

impl<T: Clone + Send + Sync> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    fn insert(&self, id: Uuid, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        records.insert(id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &Uuid) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        Ok(records.get(id).cloned())
    }

    fn all(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        Ok(records.values().cloned().collect())
    }

    fn replace(&self, id: &Uuid, record: T) -> Result<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        if !records.contains_key(id) {
            return Ok(None);
        }
        records.insert(*id, record.clone());
        Ok(Some(record))
    }

    fn remove(&self, id: &Uuid) -> Result<bool> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        // shift_remove keeps the remaining insertion order intact
        Ok(records.shift_remove(id).is_some())
    }

    fn absent_keys(&self, ids: &[Uuid]) -> Result<Vec<Uuid>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        let mut missing: IndexSet<Uuid> = IndexSet::new();
        for id in ids {
            if !records.contains_key(id) {
                missing.insert(*id);
            }
        }
        Ok(missing.into_iter().collect())
    }
}

impl<T: Clone + Send + Sync> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorService for InMemoryStore<Author> {
    async fn create(&self, author: Author) -> Result<Author> {
        self.insert(author.id, author)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Author>> {
        self.fetch(id)
    }

    async fn list(&self) -> Result<Vec<Author>> {
        self.all()
    }

    async fn update(&self, id: &Uuid, author: Author) -> Result<Option<Author>> {
        self.replace(id, author)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool> {
        self.remove(id)
    }

    async fn missing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>> {
        self.absent_keys(ids)
    }
}

#[async_trait]
impl BookService for InMemoryStore<Book> {
    async fn create(&self, book: Book) -> Result<Book> {
        self.insert(book.id, book)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Book>> {
        self.fetch(id)
    }

    async fn list(&self) -> Result<Vec<Book>> {
        self.all()
    }

    async fn update(&self, id: &Uuid, book: Book) -> Result<Option<Book>> {
        self.replace(id, book)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool> {
        self.remove(id)
    }
}

/// In-memory author_book join set.
///
/// Pairs are `(book_id, author_id)`; the `IndexSet` gives both the
/// at-most-once invariant and stable insertion order for relation views.
#[derive(Clone)]
pub struct InMemoryLinkStore {
    pairs: Arc<RwLock<IndexSet<(Uuid, Uuid)>>>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self {
            pairs: Arc::new(RwLock::new(IndexSet::new())),
        }
    }
}

impl Default for InMemoryLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkService for InMemoryLinkStore {
    async fn authors_of(&self, book_id: &Uuid) -> Result<Vec<Uuid>> {
        let pairs = self
            .pairs
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        Ok(pairs
            .iter()
            .filter(|(b, _)| b == book_id)
            .map(|(_, a)| *a)
            .collect())
    }

    async fn books_of(&self, author_id: &Uuid) -> Result<Vec<Uuid>> {
        let pairs = self
            .pairs
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        Ok(pairs
            .iter()
            .filter(|(_, a)| a == author_id)
            .map(|(b, _)| *b)
            .collect())
    }

    async fn attach(&self, book_id: &Uuid, author_ids: &[Uuid]) -> Result<()> {
        let mut pairs = self
            .pairs
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        for author_id in author_ids {
            // set insert is a no-op for already-linked pairs
            pairs.insert((*book_id, *author_id));
        }
        Ok(())
    }

    async fn detach(&self, book_id: &Uuid, author_id: &Uuid) -> Result<()> {
        let mut pairs = self
            .pairs
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        pairs.shift_remove(&(*book_id, *author_id));
        Ok(())
    }

    async fn sync(&self, book_id: &Uuid, author_ids: &[Uuid]) -> Result<()> {
        // One write guard for the whole remove+insert sequence
        let mut pairs = self
            .pairs
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        pairs.retain(|(b, a)| b != book_id || author_ids.contains(a));
        for author_id in author_ids {
            pairs.insert((*book_id, *author_id));
        }
        Ok(())
    }

    async fn unlink_entity(&self, id: &Uuid) -> Result<()> {
        let mut pairs = self
            .pairs
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        pairs.retain(|(b, a)| b != id && a != id);
        Ok(())
    }
}
