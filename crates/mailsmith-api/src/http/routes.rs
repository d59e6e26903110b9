//! HTTP route definitions.
//!
//! ```text
//! /v1
//!   POST /v1/generate-template - resolve a prompt to a template
//!
//! /health - uptime and request counters
//! /livez  - liveness probe
//! ```
//!
//! CORS is permissive (any origin, POST + OPTIONS, content-type and
//! authorization headers) so the overlay can call the endpoint from
//! provider pages.

use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::http::handlers::{generate_template, health_check, liveness_probe};
use crate::state::AppState;

/// Create the service router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let generate_routes = Router::new()
        .route("/generate-template", post(generate_template))
        .with_state(state.clone());

    let monitoring_routes = Router::new()
        .route("/health", get(health_check))
        .with_state(state);

    let liveness_route = Router::new().route("/livez", get(liveness_probe));

    Router::new()
        .nest("/v1", generate_routes)
        .merge(monitoring_routes)
        .merge(liveness_route)
        .layer(cors)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
