//! Storage backends implementing the repository traits

pub mod in_memory;

pub use in_memory::{InMemoryAuthorStore, InMemoryBookStore, InMemoryLinkStore, InMemoryStore};
