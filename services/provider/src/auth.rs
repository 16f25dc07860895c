//! Request gate in front of the catalog endpoints.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use tracing::debug;

use crate::error::ApiError;
use crate::routes::AppState;

/// Admit or reject a request based on its `Authorization` header.
///
/// Fail-closed and per-request: a missing header rejects before any
/// handler runs, and an unparseable, stale, or future token rejects via
/// the same outcome. No state survives across requests.
pub async fn require_fresh_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(header) = header else {
        debug!("missing authorization header");
        return Err(ApiError::Unauthorized);
    };

    if !clock_auth::validate(header, Utc::now(), &state.auth) {
        debug!("stale or malformed token");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
