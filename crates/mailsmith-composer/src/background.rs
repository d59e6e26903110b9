//! Background task: the composer's privileged message handler.
//!
//! Mirrors the extension-style split between an in-page script and a
//! background worker: the overlay never opens tabs itself, it asks this
//! task over a channel.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{error, info};

use mailsmith_protocols::BackgroundRequest;

use crate::error::ComposeError;

/// Opens browser tabs on behalf of the overlay.
#[async_trait]
pub trait DashboardLauncher: Send + Sync {
    async fn open_tab(&self, url: &str) -> Result<(), ComposeError>;
}

/// Serves [`BackgroundRequest`]s until the channel closes.
pub struct BackgroundTask<L: DashboardLauncher> {
    launcher: L,
    dashboard_url: String,
    requests: mpsc::Receiver<BackgroundRequest>,
}

impl<L: DashboardLauncher> BackgroundTask<L> {
    pub fn new(
        launcher: L,
        dashboard_url: impl Into<String>,
        requests: mpsc::Receiver<BackgroundRequest>,
    ) -> Self {
        Self {
            launcher,
            dashboard_url: dashboard_url.into(),
            requests,
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            match request {
                BackgroundRequest::OpenDashboard => {
                    info!(url = %self.dashboard_url, "opening dashboard");
                    if let Err(error) = self.launcher.open_tab(&self.dashboard_url).await {
                        error!(%error, "failed to open dashboard");
                    }
                }
                BackgroundRequest::GetTemplates { reply } => {
                    // Template storage lives with the dashboard backend;
                    // this handler always answers empty.
                    let _ = reply.send(Vec::new());
                }
            }
        }
        info!("background channel closed");
    }
}
