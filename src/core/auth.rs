//! Bearer-token authentication
//!
//! Every `/api/v1` route sits behind [`require_bearer`]: the request must
//! carry `Authorization: Bearer <token>` with a token from the configured
//! set, or it is rejected with 401 before reaching any handler. Token
//! issuance is out of scope; tokens are opaque strings from configuration.

use crate::core::error::ApiError;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use std::collections::HashSet;
use std::sync::Arc;

/// Verifier over the configured token set.
///
/// An empty set fails closed: every request is rejected.
#[derive(Clone)]
pub struct TokenAuth {
    tokens: Arc<HashSet<String>>,
}

impl TokenAuth {
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: Arc::new(tokens.into_iter().collect()),
        }
    }

    /// Check an `Authorization` header value.
    pub fn verify(&self, header: Option<&str>) -> Result<(), ApiError> {
        let token = header
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::Unauthenticated)?;

        if self.tokens.contains(token) {
            Ok(())
        } else {
            Err(ApiError::Unauthenticated)
        }
    }
}

/// Axum middleware enforcing bearer authentication.
pub async fn require_bearer(
    State(auth): State<TokenAuth>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    auth.verify(header)?;
    Ok(next.run(request).await)
}
