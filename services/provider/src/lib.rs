//! Catalog provider library.
//!
//! Serves the fixed product catalog over HTTP behind a freshness-based
//! bearer-token filter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

pub use config::Config;
pub use error::ApiError;
pub use routes::{AppState, router};
