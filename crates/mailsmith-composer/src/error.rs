//! Composer error types.

use std::time::Duration;

use thiserror::Error;

use crate::cdp::CdpError;

/// Errors raised while driving a compose window.
///
/// "Field not found" is deliberately NOT an error - the locator returns
/// `None` and insertion skips the field.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Browser transport failure.
    #[error("Browser transport error: {0}")]
    Transport(#[from] CdpError),

    /// The page never reported itself ready within the bounded wait.
    #[error("Page did not become ready within {0:?}")]
    PageReadyTimeout(Duration),

    /// The background task is gone.
    #[error("Background channel closed")]
    BackgroundClosed,

    /// Surface-specific failure outside the CDP transport.
    #[error("Surface error: {0}")]
    Surface(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ready_timeout_message() {
        let error = ComposeError::PageReadyTimeout(Duration::from_secs(30));
        assert!(error.to_string().contains("30s"));
    }

    #[test]
    fn test_transport_wraps_cdp() {
        let error: ComposeError = CdpError::SessionClosed.into();
        assert!(error.to_string().contains("session closed"));
    }
}
