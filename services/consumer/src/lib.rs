//! Catalog consumer library.
//!
//! Queries the catalog provider with a freshly issued clock token on
//! every call and keeps the provider's 401 and 404 outcomes distinct.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod console;
pub mod error;

pub use client::{HttpConfig, ProductClient, build_http_client};
pub use config::Config;
pub use error::ClientError;
