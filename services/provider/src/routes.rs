//! Catalog endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router, middleware};

use catalog::{Catalog, Product};
use clock_auth::TokenConfig;

use crate::auth;
use crate::error::ApiError;

/// Shared request state.
///
/// The catalog is read-only and the token settings are fixed at startup,
/// so both are shared across concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The product catalog to answer queries from
    pub catalog: Arc<Catalog>,
    /// Token filter settings
    pub auth: TokenConfig,
}

impl AppState {
    /// Create request state over a catalog snapshot.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, auth: TokenConfig) -> Self {
        Self { catalog, auth }
    }
}

/// Build the provider router.
///
/// Any catalog snapshot can be injected here, which is how contract
/// verification seeds provider states without touching the token filter
/// or the wire contract.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/product/:id", get(get_product))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_fresh_token,
        ))
        .with_state(state)
}

async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.list_all())
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state
        .catalog
        .get_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}
