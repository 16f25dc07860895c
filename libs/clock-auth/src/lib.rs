//! Time-windowed bearer token construction and validation.
//!
//! The credential is a shared-clock heuristic, not a signed token: the
//! client formats the current wall-clock time to minute precision and the
//! provider accepts it while it is no older than a tolerance window.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod token;

pub use error::TokenParseError;
pub use token::{SCHEME_PREFIX, TIMESTAMP_FORMAT, TokenConfig, issue, parse, validate};
