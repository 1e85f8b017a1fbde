//! Handlers for the `/api/v1/authors` resource

use crate::core::error::{ApiError, ApiResult};
use crate::core::query::{order_listing, ListParams, Paginated};
use crate::entities::{Author, CreateAuthorInput, UpdateAuthorInput};
use crate::server::resources::{AuthorResource, BookSummary, Document};
use crate::server::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

const PATH: &str = "/api/v1/authors";

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound {
        resource: "author",
        id,
    }
}

/// Eagerly load the minimal book objects linked to an author
async fn book_summaries(state: &AppState, author_id: &Uuid) -> ApiResult<Vec<BookSummary>> {
    let book_ids = state.links.books_of(author_id).await?;
    let mut summaries = Vec::with_capacity(book_ids.len());
    for book_id in book_ids {
        if let Some(book) = state.books.get(&book_id).await? {
            summaries.push(BookSummary::from(&book));
        }
    }
    Ok(summaries)
}

/// GET /api/v1/authors
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Paginated<AuthorResource>>> {
    let query = params.validate(Author::SORTABLE_FIELDS, state.default_per_page)?;
    let mut authors = state.authors.list().await?;
    order_listing(&mut authors, &query);
    let resources: Vec<AuthorResource> =
        authors.into_iter().map(AuthorResource::new).collect();
    Ok(Json(Paginated::from_items(resources, &query, PATH)))
}

/// POST /api/v1/authors
pub async fn store(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Document<AuthorResource>>)> {
    let input = CreateAuthorInput::from_json(&body)?;
    let author = state.authors.create(Author::new(input.name)).await?;
    tracing::info!(author_id = %author.id, "created author");
    Ok((
        StatusCode::CREATED,
        Json(Document {
            data: AuthorResource::new(author),
        }),
    ))
}

/// GET /api/v1/authors/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Document<AuthorResource>>> {
    let author = state.authors.get(&id).await?.ok_or_else(|| not_found(id))?;
    let books = book_summaries(&state, &id).await?;
    Ok(Json(Document {
        data: AuthorResource::with_books(author, books),
    }))
}

/// PATCH/PUT /api/v1/authors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Document<AuthorResource>>> {
    let input = UpdateAuthorInput::from_json(&body)?;
    let mut author = state.authors.get(&id).await?.ok_or_else(|| not_found(id))?;
    input.apply(&mut author);
    let author = state
        .authors
        .update(&id, author)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(author_id = %id, "updated author");
    Ok(Json(Document {
        data: AuthorResource::new(author),
    }))
}

/// DELETE /api/v1/authors/{id}
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if !state.authors.delete(&id).await? {
        return Err(not_found(id));
    }
    // cascade: drop every join row referencing the author
    state.links.unlink_entity(&id).await?;
    tracing::info!(author_id = %id, "deleted author");
    Ok(StatusCode::NO_CONTENT)
}
