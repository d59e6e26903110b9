//! The compose-surface abstraction.
//!
//! Everything the composer does to a live provider page goes through
//! [`ComposeSurface`], so the locator, inserter and controller run
//! identically against the CDP-backed surface and the in-memory fake used
//! in tests.

use async_trait::async_trait;
use mailsmith_protocols::Template;
use serde::Deserialize;

use crate::error::ComposeError;

/// Opaque handle to a DOM element on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub i64);

/// Rendered size of an element, used by the body-field heuristic to skip
/// collapsed or decoy editors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementMetrics {
    pub width: f64,
    pub height: f64,
}

/// Document readiness as reported by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    pub fn parse(value: &str) -> Self {
        match value {
            "interactive" => ReadyState::Interactive,
            "complete" => ReadyState::Complete,
            _ => ReadyState::Loading,
        }
    }

    /// Whether the composer may start working against the page.
    pub fn is_ready(&self) -> bool {
        !matches!(self, ReadyState::Loading)
    }
}

/// Synthetic DOM events dispatched after a programmatic write so the host
/// page's own state management observes the edit. Always bubbling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEvent {
    Input,
    Change,
}

impl DomEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomEvent::Input => "input",
            DomEvent::Change => "change",
        }
    }
}

/// A user action reported by the injected overlay.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OverlayEvent {
    /// A quick-pick template was chosen in the template modal.
    TemplatePicked { id: String },

    /// "Open Dashboard" was clicked.
    OpenDashboard,

    /// The AI modal was (re)opened; any previous generation session is
    /// discarded with the old modal.
    AiModalOpened,

    /// "Generate Template" / "Generate Another" was clicked with the given
    /// free-text prompt.
    Generate { prompt: String },

    /// "Use This Template" was clicked on the previewed generation.
    UseTemplate,

    /// The page-side observer saw a new compose window appear.
    ComposeDetected,
}

/// Operations the composer needs from a live provider page.
#[async_trait]
pub trait ComposeSurface: Send + Sync {
    /// Current document readiness.
    async fn ready_state(&self) -> Result<ReadyState, ComposeError>;

    /// Current page URL.
    async fn url(&self) -> Result<String, ComposeError>;

    /// All elements matching a CSS selector, in document order.
    async fn query_all(&self, selector: &str) -> Result<Vec<ElementId>, ComposeError>;

    /// Rendered size of an element; `None` when it has no layout box.
    async fn metrics(&self, element: ElementId) -> Result<Option<ElementMetrics>, ComposeError>;

    /// Set the value of an input element.
    async fn write_value(&self, element: ElementId, value: &str) -> Result<(), ComposeError>;

    /// Replace the rendered content of a contenteditable element.
    async fn write_html(&self, element: ElementId, html: &str) -> Result<(), ComposeError>;

    /// Dispatch a synthetic bubbling event on an element.
    async fn dispatch(&self, element: ElementId, event: DomEvent) -> Result<(), ComposeError>;

    /// Move input focus into an element.
    async fn focus(&self, element: ElementId) -> Result<(), ComposeError>;

    /// Whether the floating button is currently in the document.
    async fn overlay_present(&self) -> Result<bool, ComposeError>;

    /// Inject (or re-inject) the overlay script. Must be idempotent.
    async fn mount_overlay(&self) -> Result<(), ComposeError>;

    /// Remove the overlay from the document.
    async fn remove_overlay(&self) -> Result<(), ComposeError>;

    /// Show a transient notification toast.
    async fn show_toast(&self, message: &str) -> Result<(), ComposeError>;

    /// Render a generated template into the AI modal's preview pane.
    async fn render_preview(&self, template: &Template) -> Result<(), ComposeError>;
}
