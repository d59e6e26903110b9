//! # Mailsmith API
//!
//! The hosted side of template generation: an axum service exposing
//! `POST /v1/generate-template` over the rich contract (prompt + exclusion
//! set in, resolved template + variant index + has-more flag out), plus
//! health and liveness probes.

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{ApiConfig, ApiServer};
pub use state::AppState;
