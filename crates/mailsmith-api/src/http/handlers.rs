//! Generation endpoint handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use serde::Serialize;
use tracing::{debug, info};

use mailsmith_core::{classify, resolve};
use mailsmith_protocols::{GenerateRequest, GenerateResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub requests_served: u64,
}

/// `POST /v1/generate-template`
///
/// Classifies the prompt, resolves a variant avoiding the caller's exclusion
/// set, and returns the rich response. Empty prompts are rejected before any
/// classification work.
pub async fn generate_template(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if !state.authorize(auth) {
        return Err(ApiError::Unauthorized);
    }

    state.increment_requests();

    if request.prompt.trim().is_empty() {
        return Err(ApiError::EmptyPrompt);
    }

    let category = classify(&request.prompt);
    let excluded = request.exclude.iter().copied().collect();
    let resolution = resolve(category, &excluded, &mut rand::rng());

    info!(
        %category,
        index = resolution.index,
        has_more = resolution.has_more,
        excluded = request.exclude.len(),
        "generated template"
    );

    Ok(Json(GenerateResponse {
        subject: resolution.template.subject,
        content: resolution.template.content,
        template_index: resolution.index,
        has_more: resolution.has_more,
    }))
}

/// `GET /health`
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("health check");
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime().as_secs(),
        requests_served: state.request_count(),
    })
}

/// `GET /livez`
pub async fn liveness_probe() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
