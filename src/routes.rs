//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /loans`      - Create a loan
//! - `GET  /loans`      - List loans in creation order
//! - `GET  /loans/{id}` - Fetch a loan by id
//! - `PUT  /loans/{id}` - Partially update a loan
//! - `GET  /health`     - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    create_loan_handler, get_loan_handler, health_handler, list_loans_handler, update_loan_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/loans", get(list_loans_handler).post(create_loan_handler))
        .route("/loans/{id}", get(get_loan_handler).put(update_loan_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
