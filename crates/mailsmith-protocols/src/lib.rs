//! # Mailsmith Protocols
//!
//! Shared domain and wire types for the Mailsmith workspace. Contains only
//! data definitions - no I/O.
//!
//! - [`Template`] / [`Category`] - the template domain model
//! - [`MailProvider`] / [`FieldKind`] - compose-window addressing
//! - [`GenerateRequest`] / [`GenerateResponse`] - the generation endpoint contract
//! - [`BackgroundRequest`] - process-wide background messaging

pub mod generate;
pub mod message;
pub mod provider;
pub mod template;

pub use generate::{ErrorBody, GenerateRequest, GenerateResponse};
pub use message::BackgroundRequest;
pub use provider::{FieldKind, MailProvider};
pub use template::{Category, QuickPick, Template};
