//! Client for the template generation endpoint.

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use mailsmith_protocols::{ErrorBody, GenerateRequest, GenerateResponse};

/// Errors from one generation call.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The endpoint answered with a non-2xx status.
    #[error("Generation endpoint rejected the request ({status}): {message}")]
    Endpoint { status: u16, message: String },

    /// Transport-level failure.
    #[error("Generation transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Anything that can resolve a prompt to a template.
///
/// Implemented by [`GenerateClient`]; controller tests substitute a scripted
/// source.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        exclude: &[usize],
    ) -> Result<GenerateResponse, GenerateError>;
}

/// HTTP client for the generation endpoint.
pub struct GenerateClient {
    http: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl GenerateClient {
    /// `base_url` is the service root, e.g. `http://127.0.0.1:8787`.
    pub fn new(base_url: &str, auth_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/v1/generate-template", base_url.trim_end_matches('/')),
            auth_token,
        }
    }
}

#[async_trait]
impl TemplateSource for GenerateClient {
    async fn generate(
        &self,
        prompt: &str,
        exclude: &[usize],
    ) -> Result<GenerateResponse, GenerateError> {
        let request = GenerateRequest::new(prompt).with_exclude(exclude.to_vec());

        let mut builder = self.http.post(&self.endpoint).json(&request);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "Failed to generate template".to_string());
            return Err(GenerateError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json::<GenerateResponse>().await?;
        debug!(
            index = body.template_index,
            has_more = body.has_more,
            "template generated"
        );
        Ok(body)
    }
}

/// Client-held exclusion state for one generation session.
///
/// Every returned variant index is recorded; once a response reports
/// `has_more == false` the cycle is complete and the set is cleared before
/// the next request, so variants repeat only after all of them were shown.
#[derive(Debug, Default)]
pub struct GenerationSession {
    excluded: HashSet<usize>,
    cycle_complete: bool,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclusion set to send with the next request, applying the cycle
    /// reset when the previous response closed the cycle.
    pub fn exclusion_for_next(&mut self) -> Vec<usize> {
        if self.cycle_complete {
            self.excluded.clear();
            self.cycle_complete = false;
        }
        let mut exclude: Vec<usize> = self.excluded.iter().copied().collect();
        exclude.sort_unstable();
        exclude
    }

    /// Record a response.
    pub fn record(&mut self, index: usize, has_more: bool) {
        self.excluded.insert(index);
        if !has_more {
            self.cycle_complete = true;
        }
    }

    /// Number of variants shown in the current cycle.
    pub fn shown(&self) -> usize {
        self.excluded.len()
    }

    /// Drop all session state (new modal, new session).
    pub fn reset(&mut self) {
        self.excluded.clear();
        self.cycle_complete = false;
    }
}
