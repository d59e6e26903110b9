//! Composer timing configuration.
//!
//! The original pattern of fixed settling delays is replaced by bounded
//! polling, so every knob here is a poll interval or a deadline.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing knobs for readiness polling and self-healing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Deadline for the compose fields to appear after an insertion is
    /// requested.
    pub field_timeout_ms: u64,

    /// Interval between locator probes while waiting for compose fields.
    pub probe_interval_ms: u64,

    /// Deadline for the page itself to leave the `loading` state on attach.
    pub page_ready_timeout_ms: u64,

    /// Interval of the URL/overlay-presence poll that restores the floating
    /// button after SPA navigation.
    pub url_poll_interval_ms: u64,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            field_timeout_ms: 5_000,
            probe_interval_ms: 100,
            page_ready_timeout_ms: 30_000,
            url_poll_interval_ms: 1_000,
        }
    }
}

impl ComposerConfig {
    pub fn field_timeout(&self) -> Duration {
        Duration::from_millis(self.field_timeout_ms)
    }

    pub fn probe_interval(&self) -> Duration {
        Duration::from_millis(self.probe_interval_ms)
    }

    pub fn page_ready_timeout(&self) -> Duration {
        Duration::from_millis(self.page_ready_timeout_ms)
    }

    pub fn url_poll_interval(&self) -> Duration {
        Duration::from_millis(self.url_poll_interval_ms)
    }
}
