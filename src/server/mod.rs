//! HTTP server: shared state, router assembly, and handlers

pub mod authors;
pub mod book_authors;
pub mod books;
pub mod resources;

use crate::config::AppConfig;
use crate::core::auth::{require_bearer, TokenAuth};
use crate::core::service::{AuthorService, BookService, LinkService};
use crate::storage::{InMemoryAuthorStore, InMemoryBookStore, InMemoryLinkStore};
use axum::middleware;
use axum::routing::{delete, get};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
///
/// Repositories are constructed once and injected here; handlers never
/// reach for globals.
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<dyn AuthorService>,
    pub books: Arc<dyn BookService>,
    pub links: Arc<dyn LinkService>,
    pub default_per_page: usize,
}

impl AppState {
    /// State backed by fresh in-memory stores
    pub fn in_memory(config: &AppConfig) -> Self {
        Self {
            authors: Arc::new(InMemoryAuthorStore::new()),
            books: Arc::new(InMemoryBookStore::new()),
            links: Arc::new(InMemoryLinkStore::new()),
            default_per_page: config.default_per_page,
        }
    }
}

/// Assemble the full application router.
///
/// All resource routes are nested under `/api/v1` and guarded by the
/// bearer-token middleware.
pub fn build_router(state: AppState, auth: TokenAuth) -> Router {
    let api = Router::new()
        .route("/authors", get(authors::index).post(authors::store))
        .route(
            "/authors/{id}",
            get(authors::show)
                .patch(authors::update)
                .put(authors::update)
                .delete(authors::destroy),
        )
        .route("/books", get(books::index).post(books::store))
        .route(
            "/books/{id}",
            get(books::show)
                .patch(books::update)
                .put(books::update)
                .delete(books::destroy),
        )
        .route(
            "/books/{id}/authors",
            get(book_authors::index)
                .post(book_authors::attach)
                .put(book_authors::sync),
        )
        .route(
            "/books/{id}/authors/{author_id}",
            delete(book_authors::detach),
        )
        .layer(middleware::from_fn_with_state(auth, require_bearer))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
