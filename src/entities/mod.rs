//! Domain entities and their typed input structs

pub mod author;
pub mod book;

pub use author::{Author, CreateAuthorInput, UpdateAuthorInput};
pub use book::{Book, CreateBookInput, UpdateBookInput};
