//! Application state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// State shared across handlers.
pub struct AppState {
    /// Expected bearer credential; `None` disables the check.
    auth_token: Option<String>,
    start_time: Instant,
    request_count: AtomicU64,
}

impl AppState {
    pub fn new(auth_token: Option<String>) -> Self {
        Self {
            auth_token,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Check a presented `Authorization` header value against the configured
    /// credential. Always passes when no credential is configured.
    pub fn authorize(&self, header: Option<&str>) -> bool {
        match &self.auth_token {
            None => true,
            Some(expected) => header
                .and_then(|value| value.strip_prefix("Bearer "))
                .is_some_and(|token| token == expected),
        }
    }

    /// Get uptime.
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get request count.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Increment request count.
    pub fn increment_requests(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}
