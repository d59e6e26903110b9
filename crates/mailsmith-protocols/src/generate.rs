//! Wire contract for the template generation endpoint.
//!
//! The endpoint speaks the rich contract: the caller reports which variant
//! indices it has already shown, and the response carries the chosen index
//! plus whether unseen variants remain.

use serde::{Deserialize, Serialize};

use crate::template::Template;

/// Request body for `POST /v1/generate-template`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Free-text description of the email's purpose. Must be non-empty.
    pub prompt: String,

    /// Variant indices already shown in this generation session.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<usize>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            exclude: Vec::new(),
        }
    }

    pub fn with_exclude(mut self, exclude: Vec<usize>) -> Self {
        self.exclude = exclude;
        self
    }
}

/// Successful response from the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Resolved subject line.
    pub subject: String,

    /// Resolved body with the sender name already substituted.
    pub content: String,

    /// Index of the chosen variant within its category, for the caller's
    /// exclusion set.
    pub template_index: usize,

    /// Whether unseen variants remain in the category. `false` means the
    /// caller should reset its exclusion set before the next request.
    pub has_more: bool,
}

impl GenerateResponse {
    /// View the response as a plain template.
    pub fn template(&self) -> Template {
        Template::new(self.subject.clone(), self.content.clone())
    }
}

/// Error envelope returned with any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
