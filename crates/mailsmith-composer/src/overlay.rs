//! Injected overlay script and the snippets that drive it.

use mailsmith_protocols::Template;

/// The overlay script, embedded at build time. Idempotent: re-evaluating it
/// recreates the floating button only when missing and installs the
/// mutation observer only once.
pub(crate) const OVERLAY_SCRIPT: &str = include_str!("overlay.js");

/// DOM id of the floating button.
pub(crate) const FAB_ID: &str = "mailsmith-fab";

/// Name of the CDP binding the overlay reports user actions through.
pub const EMIT_BINDING: &str = "__mailsmithEmit";

/// Expression checking whether the floating button is in the document.
pub(crate) fn presence_check() -> String {
    format!("!!document.getElementById('{FAB_ID}')")
}

/// Expression showing a transient toast. No-op when the overlay is absent.
pub(crate) fn toast_call(message: &str) -> String {
    let message = serde_json::to_string(message).unwrap_or_default();
    format!("window.__mailsmithToast && window.__mailsmithToast({message});")
}

/// Expression rendering a generated template into the AI modal preview.
pub(crate) fn preview_call(template: &Template) -> String {
    let subject = serde_json::to_string(&template.subject).unwrap_or_default();
    let content = serde_json::to_string(&template.content).unwrap_or_default();
    format!("window.__mailsmithPreview && window.__mailsmithPreview({subject}, {content});")
}
