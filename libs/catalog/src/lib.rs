//! Fixed, read-only product catalog.
//!
//! The catalog is constructed once at startup from a seed set and never
//! mutated afterwards, so it is safely shared across concurrent requests
//! without locking.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod product;
pub mod repository;
pub mod seed;

pub use product::Product;
pub use repository::Catalog;
