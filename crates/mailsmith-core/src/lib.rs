//! # Mailsmith Core
//!
//! The template engine: a static catalog of outreach templates, a keyword
//! classifier from free-text prompts to categories, and an exclusion-aware
//! resolver that picks a variant and substitutes the sender name.
//!
//! Everything here is pure apart from the resolver's two uniform random
//! draws, which go through an injected [`rand::Rng`].

pub mod catalog;
pub mod classify;
pub mod resolve;

pub use catalog::TemplateVariant;
pub use classify::classify;
pub use resolve::{resolve, Resolution, NAME_MARKER, SENDER_NAMES};
