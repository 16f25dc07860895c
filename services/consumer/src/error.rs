//! Consumer-side error taxonomy.

use thiserror::Error;

/// Failures surfaced to callers of the product client.
///
/// Provider `401` and `404` map to distinct variants; they are never
/// collapsed into a generic HTTP failure.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure or undecodable body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider rejected the token
    #[error("Unauthorized")]
    Unauthorized,

    /// Provider has no product with the requested id
    #[error("Product not found")]
    NotFound,

    /// Provider answered with a status outside the contract
    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),

    /// Console I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
