//! # folio
//!
//! A token-authenticated JSON CRUD API exposing `authors` and `books` with
//! a many-to-many relationship between them.
//!
//! ## Features
//!
//! - **Entity CRUD**: create, show, update (partial), hard delete
//! - **Relationship management**: attach (idempotent union), detach
//!   (no-op safe), and sync (full replacement) of a book's author set,
//!   with a symmetric view from authors
//! - **Collection listings**: sortable, paginated, newest-first by
//!   default, deterministic tie-breaking
//! - **Request validation**: typed input structs built from raw JSON so
//!   type mismatches surface as 422 field errors
//! - **Bearer-token auth**: every route guarded by a configured token set
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio::prelude::*;
//!
//! let config = AppConfig::from_env();
//! let state = AppState::in_memory(&config);
//! let auth = TokenAuth::new(config.api_tokens.clone());
//! let app = build_router(state, auth);
//! // axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        auth::{require_bearer, TokenAuth},
        error::{ApiError, ApiResult, FieldErrors},
        query::{order_listing, ListParams, ListQuery, Listable, Paginated, SortDirection},
        service::{AuthorService, BookService, LinkService},
        validation::Payload,
    };

    // === Entities ===
    pub use crate::entities::{
        Author, Book, CreateAuthorInput, CreateBookInput, UpdateAuthorInput, UpdateBookInput,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryAuthorStore, InMemoryBookStore, InMemoryLinkStore};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{
        build_router,
        resources::{AuthorResource, AuthorSummary, BookResource, BookSummary, Document},
        AppState,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
