//! Token parse errors.

use thiserror::Error;

/// Reasons a token header fails to parse.
///
/// This error never crosses the auth boundary: [`crate::validate`] folds
/// every parse failure into a `false` outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenParseError {
    /// The timestamp did not match the `YYYY-MM-DDTHH:mm` pattern.
    #[error("Invalid token timestamp: {0}")]
    InvalidTimestamp(String),
}
