//! CDP client errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdpError {
    #[error("Browser not reachable at {0}")]
    BrowserUnavailable(String),

    #[error("WebSocket connection failed: {0}")]
    ConnectionFailed(String),

    #[error("CDP protocol error {code}: {message}")]
    Protocol { code: i64, message: String },

    #[error("JavaScript evaluation failed: {0}")]
    JavaScript(String),

    #[error("Invalid CDP response: {0}")]
    InvalidResponse(String),

    #[error("CDP request timed out: {0}")]
    Timeout(String),

    #[error("CDP session closed")]
    SessionClosed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
