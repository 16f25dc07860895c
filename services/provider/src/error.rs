//! Wire-level errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// The two failure outcomes a caller can observe.
///
/// Missing, malformed, stale, and future tokens all collapse into
/// `Unauthorized`; no parse detail crosses the wire.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Request was rejected by the token filter.
    #[error("Unauthorized")]
    Unauthorized,

    /// Valid auth, but no product with the requested id.
    #[error("Product not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
        };
        status.into_response()
    }
}
