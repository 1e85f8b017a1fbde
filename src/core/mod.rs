//! Core module containing errors, auth, query handling, and repository traits

pub mod auth;
pub mod error;
pub mod query;
pub mod service;
pub mod validation;

pub use auth::{require_bearer, TokenAuth};
pub use error::{ApiError, ApiResult, FieldErrors};
pub use query::{order_listing, ListParams, ListQuery, Listable, Paginated, SortDirection};
pub use service::{AuthorService, BookService, LinkService};
pub use validation::Payload;
