//! Handlers for the `/api/v1/books` resource
//!
//! Book listings and show responses eagerly include the linked authors.

use crate::core::error::{ApiError, ApiResult};
use crate::core::query::{order_listing, ListParams, Paginated};
use crate::entities::{Book, CreateBookInput, UpdateBookInput};
use crate::server::resources::{AuthorSummary, BookResource, Document};
use crate::server::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

const PATH: &str = "/api/v1/books";

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound {
        resource: "book",
        id,
    }
}

/// Eagerly load the minimal author objects linked to a book
pub(crate) async fn author_summaries(
    state: &AppState,
    book_id: &Uuid,
) -> ApiResult<Vec<AuthorSummary>> {
    let author_ids = state.links.authors_of(book_id).await?;
    let mut summaries = Vec::with_capacity(author_ids.len());
    for author_id in author_ids {
        if let Some(author) = state.authors.get(&author_id).await? {
            summaries.push(AuthorSummary::from(&author));
        }
    }
    Ok(summaries)
}

/// GET /api/v1/books
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Paginated<BookResource>>> {
    let query = params.validate(Book::SORTABLE_FIELDS, state.default_per_page)?;
    let mut books = state.books.list().await?;
    order_listing(&mut books, &query);

    let mut resources = Vec::with_capacity(books.len());
    for book in books {
        let authors = author_summaries(&state, &book.id).await?;
        resources.push(BookResource::with_authors(book, authors));
    }
    Ok(Json(Paginated::from_items(resources, &query, PATH)))
}

/// POST /api/v1/books
pub async fn store(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Document<BookResource>>)> {
    let input = CreateBookInput::from_json(&body)?;
    let book = state
        .books
        .create(Book::new(
            input.title,
            input.description,
            input.publication_year,
        ))
        .await?;
    tracing::info!(book_id = %book.id, "created book");
    Ok((
        StatusCode::CREATED,
        Json(Document {
            data: BookResource::new(book),
        }),
    ))
}

/// GET /api/v1/books/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Document<BookResource>>> {
    let book = state.books.get(&id).await?.ok_or_else(|| not_found(id))?;
    let authors = author_summaries(&state, &id).await?;
    Ok(Json(Document {
        data: BookResource::with_authors(book, authors),
    }))
}

/// PATCH/PUT /api/v1/books/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Document<BookResource>>> {
    let input = UpdateBookInput::from_json(&body)?;
    let mut book = state.books.get(&id).await?.ok_or_else(|| not_found(id))?;
    input.apply(&mut book);
    let book = state
        .books
        .update(&id, book)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(book_id = %id, "updated book");
    Ok(Json(Document {
        data: BookResource::new(book),
    }))
}

/// DELETE /api/v1/books/{id}
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if !state.books.delete(&id).await? {
        return Err(not_found(id));
    }
    // cascade: drop every join row referencing the book
    state.links.unlink_entity(&id).await?;
    tracing::info!(book_id = %id, "deleted book");
    Ok(StatusCode::NO_CONTENT)
}
