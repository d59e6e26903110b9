//! End-to-end attach workflow.
//!
//! Wires a CDP client to the controller: finds the provider tab, attaches,
//! exposes the overlay binding, pumps binding calls into overlay events,
//! and starts the background task.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::background::{BackgroundTask, DashboardLauncher};
use crate::cdp::{CdpClient, CdpEvent, CdpSurface};
use crate::config::ComposerConfig;
use crate::controller::{detect_provider, ComposerController};
use crate::error::ComposeError;
use crate::generate::GenerateClient;
use crate::overlay;
use crate::surface::OverlayEvent;

/// Everything needed to attach the composer to a running browser.
#[derive(Debug, Clone)]
pub struct AttachOptions {
    /// Browser debugging endpoint, e.g. `http://localhost:9222`.
    pub browser_endpoint: String,
    /// Generation service root, e.g. `http://127.0.0.1:8787`.
    pub generate_endpoint: String,
    /// Bearer credential for the generation service.
    pub auth_token: Option<String>,
    /// URL the background task opens for "Open Dashboard".
    pub dashboard_url: String,
    /// Timing knobs.
    pub config: ComposerConfig,
}

#[async_trait]
impl DashboardLauncher for Arc<CdpClient> {
    async fn open_tab(&self, url: &str) -> Result<(), ComposeError> {
        CdpClient::open_tab(self, url).await?;
        Ok(())
    }
}

/// Attach to the first Gmail/Outlook tab and run the controller until the
/// page goes away.
pub async fn run(options: AttachOptions) -> Result<(), ComposeError> {
    let client = Arc::new(CdpClient::connect(&options.browser_endpoint).await?);

    let page_info = client
        .list_pages()
        .await?
        .into_iter()
        .find(|page| page.kind == "page" && detect_provider(&page.url).is_some())
        .ok_or_else(|| ComposeError::Surface("no Gmail or Outlook tab found".into()))?;
    info!(url = %page_info.url, "attaching to provider tab");

    let mut page = client.attach_page(&page_info.id).await?;
    page.add_binding(overlay::EMIT_BINDING).await?;
    let page_events = page
        .take_events()
        .ok_or_else(|| ComposeError::Surface("page event stream already taken".into()))?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    tokio::spawn(pump_overlay_events(page_events, event_tx));

    let (background_tx, background_rx) = mpsc::channel(16);
    tokio::spawn(
        BackgroundTask::new(client.clone(), options.dashboard_url, background_rx).run(),
    );

    let surface = CdpSurface::new(Arc::new(page));
    let source = GenerateClient::new(&options.generate_endpoint, options.auth_token);
    let controller = ComposerController::new(surface, source, background_tx, options.config);
    controller.run(event_rx).await
}

/// Translate `Runtime.bindingCalled` frames into overlay events.
async fn pump_overlay_events(
    mut page_events: mpsc::UnboundedReceiver<CdpEvent>,
    overlay_events: mpsc::UnboundedSender<OverlayEvent>,
) {
    while let Some(event) = page_events.recv().await {
        if event.method != "Runtime.bindingCalled" {
            continue;
        }
        if event.params["name"].as_str() != Some(overlay::EMIT_BINDING) {
            continue;
        }
        let Some(payload) = event.params["payload"].as_str() else {
            continue;
        };
        match serde_json::from_str::<OverlayEvent>(payload) {
            Ok(overlay_event) => {
                if overlay_events.send(overlay_event).is_err() {
                    break;
                }
            }
            Err(parse_error) => warn!(%parse_error, payload, "malformed overlay event"),
        }
    }
}
