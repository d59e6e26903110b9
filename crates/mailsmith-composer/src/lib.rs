//! # Mailsmith Composer
//!
//! The client side of Mailsmith: drives a Gmail/Outlook compose window in a
//! running browser over CDP. The injected overlay (floating button plus
//! template and AI modals) reports user actions through a binding; the
//! [`ComposerController`] routes them to the generation endpoint, the field
//! locator and the template inserter.
//!
//! All DOM work goes through the [`ComposeSurface`] trait so the core logic
//! is testable without a browser.

pub mod attach;
pub mod background;
pub mod cdp;
pub mod config;
pub mod controller;
pub mod error;
pub mod generate;
pub mod insert;
pub mod locator;
pub mod overlay;
pub mod surface;

#[cfg(test)]
pub(crate) mod fake_surface;

pub use attach::AttachOptions;
pub use background::{BackgroundTask, DashboardLauncher};
pub use config::ComposerConfig;
pub use controller::{detect_provider, ComposerController, ControllerState};
pub use error::ComposeError;
pub use generate::{GenerateClient, GenerateError, GenerationSession, TemplateSource};
pub use insert::{insert, InsertOutcome};
pub use locator::locate;
pub use surface::{
    ComposeSurface, DomEvent, ElementId, ElementMetrics, OverlayEvent, ReadyState,
};
