//! Handlers for the `/api/v1/books/{id}/authors` relationship
//!
//! Attach adds links without touching existing ones (idempotent union),
//! sync replaces the whole link set, detach removes a single link. Attach
//! and sync validate every supplied author id up front and mutate nothing
//! when any id is unknown.

use crate::core::error::{ApiError, ApiResult, FieldErrors};
use crate::core::validation::Payload;
use crate::server::resources::{AuthorResource, Document};
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}

async fn ensure_book(state: &AppState, id: &Uuid) -> ApiResult<()> {
    state
        .books
        .get(id)
        .await?
        .map(|_| ())
        .ok_or(ApiError::NotFound {
            resource: "book",
            id: *id,
        })
}

fn parse_author_ids(body: &Value) -> ApiResult<Vec<Uuid>> {
    let mut payload = Payload::new(body);
    let ids = payload.required_id_array("authors");
    payload.finish()?;
    Ok(ids)
}

/// Fail the whole operation when any supplied id is not a stored author.
async fn reject_unknown_authors(state: &AppState, ids: &[Uuid]) -> ApiResult<()> {
    let missing = state.authors.missing_ids(ids).await?;
    if missing.is_empty() {
        return Ok(());
    }
    let mut errors = FieldErrors::new();
    errors.insert(
        "authors".to_string(),
        missing
            .iter()
            .map(|id| format!("The authors field references an unknown author id '{id}'."))
            .collect(),
    );
    Err(ApiError::Validation(errors))
}

/// GET /api/v1/books/{id}/authors
///
/// Raw array of linked authors under `data`, in link insertion order.
pub async fn index(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Document<Vec<AuthorResource>>>> {
    ensure_book(&state, &id).await?;
    let author_ids = state.links.authors_of(&id).await?;
    let mut data = Vec::with_capacity(author_ids.len());
    for author_id in author_ids {
        if let Some(author) = state.authors.get(&author_id).await? {
            data.push(AuthorResource::new(author));
        }
    }
    Ok(Json(Document { data }))
}

/// POST /api/v1/books/{id}/authors
pub async fn attach(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> ApiResult<Json<StatusMessage>> {
    ensure_book(&state, &id).await?;
    let author_ids = parse_author_ids(&body)?;
    reject_unknown_authors(&state, &author_ids).await?;

    state.links.attach(&id, &author_ids).await?;
    tracing::info!(book_id = %id, count = author_ids.len(), "attached authors to book");
    Ok(Json(StatusMessage {
        message: "Authors attached to book",
    }))
}

/// PUT /api/v1/books/{id}/authors
pub async fn sync(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> ApiResult<Json<StatusMessage>> {
    ensure_book(&state, &id).await?;
    let author_ids = parse_author_ids(&body)?;
    reject_unknown_authors(&state, &author_ids).await?;

    state.links.sync(&id, &author_ids).await?;
    tracing::info!(book_id = %id, count = author_ids.len(), "replaced authors of book");
    Ok(Json(StatusMessage {
        message: "Authors replaced for book",
    }))
}

/// DELETE /api/v1/books/{id}/authors/{author_id}
///
/// Removing a link that does not exist still succeeds.
pub async fn detach(
    State(state): State<AppState>,
    Path((id, author_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    ensure_book(&state, &id).await?;
    if state.authors.get(&author_id).await?.is_none() {
        return Err(ApiError::NotFound {
            resource: "author",
            id: author_id,
        });
    }

    state.links.detach(&id, &author_id).await?;
    tracing::info!(book_id = %id, author_id = %author_id, "detached author from book");
    Ok(StatusCode::NO_CONTENT)
}
