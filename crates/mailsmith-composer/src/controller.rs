//! Floating UI lifecycle controller.
//!
//! Owns all overlay state explicitly: attach/detach, readiness, the
//! exclusion session and the current preview. Both self-heal triggers (the
//! page-side compose observer and the URL poll) funnel into the single
//! idempotent [`ComposerController::ensure_attached`], so the button can
//! never be mounted twice.

use mailsmith_core::catalog;
use mailsmith_protocols::{BackgroundRequest, MailProvider, QuickPick, Template};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::ComposerConfig;
use crate::error::ComposeError;
use crate::generate::{GenerationSession, TemplateSource};
use crate::insert::insert;
use crate::surface::{ComposeSurface, OverlayEvent};

/// Lifecycle states of the injected UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Not attached; also the terminal state on unsupported hosts.
    Uninitialized,
    /// Provider recognized, waiting for the document to leave `loading`.
    WaitingForPageReady,
    /// Overlay mounted and serving events.
    Active,
}

/// Detect a supported provider from a page URL.
pub fn detect_provider(page_url: &str) -> Option<MailProvider> {
    let parsed = url::Url::parse(page_url).ok()?;
    MailProvider::from_host(parsed.host_str()?)
}

/// The injected button/modal lifecycle manager.
pub struct ComposerController<S: ComposeSurface, T: TemplateSource> {
    surface: S,
    source: T,
    background: mpsc::Sender<BackgroundRequest>,
    config: ComposerConfig,
    state: ControllerState,
    provider: Option<MailProvider>,
    session: GenerationSession,
    preview: Option<Template>,
    last_url: String,
}

impl<S: ComposeSurface, T: TemplateSource> ComposerController<S, T> {
    pub fn new(
        surface: S,
        source: T,
        background: mpsc::Sender<BackgroundRequest>,
        config: ComposerConfig,
    ) -> Self {
        Self {
            surface,
            source,
            background,
            config,
            state: ControllerState::Uninitialized,
            provider: None,
            session: GenerationSession::new(),
            preview: None,
            last_url: String::new(),
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ControllerState::Active
    }

    /// Attach to the page: detect the provider, wait for readiness, mount
    /// the overlay. On an unsupported host this is a silent no-op and the
    /// controller stays [`ControllerState::Uninitialized`] for good.
    pub async fn attach(&mut self) -> Result<(), ComposeError> {
        if self.state != ControllerState::Uninitialized {
            return Ok(());
        }

        let page_url = self.surface.url().await?;
        let Some(provider) = detect_provider(&page_url) else {
            debug!(url = %page_url, "unsupported host, composer stays dormant");
            return Ok(());
        };

        self.provider = Some(provider);
        self.state = ControllerState::WaitingForPageReady;
        self.wait_for_ready().await?;

        self.ensure_attached().await?;
        self.state = ControllerState::Active;
        self.last_url = page_url;
        info!(%provider, "composer active");
        Ok(())
    }

    /// Remove the overlay and forget all session state.
    pub async fn detach(&mut self) -> Result<(), ComposeError> {
        if self.state == ControllerState::Active {
            self.surface.remove_overlay().await?;
        }
        self.state = ControllerState::Uninitialized;
        self.provider = None;
        self.session.reset();
        self.preview = None;
        info!("composer detached");
        Ok(())
    }

    /// Mount the overlay if it is missing. Idempotent; the single restore
    /// path for every self-heal trigger.
    pub async fn ensure_attached(&self) -> Result<(), ComposeError> {
        if !self.surface.overlay_present().await? {
            self.surface.mount_overlay().await?;
            info!("overlay mounted");
        }
        Ok(())
    }

    /// One step of the URL poll: note SPA navigation and restore the
    /// overlay if the host redraw dropped it.
    pub async fn tick(&mut self) -> Result<(), ComposeError> {
        if self.state != ControllerState::Active {
            return Ok(());
        }
        let page_url = self.surface.url().await?;
        if page_url != self.last_url {
            debug!(from = %self.last_url, to = %page_url, "navigation detected");
            self.last_url = page_url;
        }
        self.ensure_attached().await
    }

    /// Route one overlay event. Events arriving while not active are
    /// dropped.
    pub async fn handle_event(&mut self, event: OverlayEvent) -> Result<(), ComposeError> {
        if self.state != ControllerState::Active {
            debug!(?event, "overlay event ignored while inactive");
            return Ok(());
        }

        match event {
            OverlayEvent::ComposeDetected => self.ensure_attached().await,
            OverlayEvent::TemplatePicked { id } => match QuickPick::from_id(&id) {
                Some(pick) => self.insert_template(&catalog::quick_pick(pick)).await,
                None => {
                    warn!(id, "unknown quick pick");
                    Ok(())
                }
            },
            OverlayEvent::OpenDashboard => self
                .background
                .send(BackgroundRequest::OpenDashboard)
                .await
                .map_err(|_| ComposeError::BackgroundClosed),
            OverlayEvent::AiModalOpened => {
                // A fresh modal starts a fresh generation session.
                self.session.reset();
                self.preview = None;
                Ok(())
            }
            OverlayEvent::Generate { prompt } => self.handle_generate(&prompt).await,
            OverlayEvent::UseTemplate => match self.preview.clone() {
                Some(template) => self.insert_template(&template).await,
                None => {
                    warn!("use-template without a preview");
                    Ok(())
                }
            },
        }
    }

    /// Run the event loop until the overlay event channel closes.
    pub async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<OverlayEvent>,
    ) -> Result<(), ComposeError> {
        self.attach().await?;
        if !self.is_active() {
            info!("host page unsupported, composer idle");
            return Ok(());
        }

        let mut poll = tokio::time::interval(self.config.url_poll_interval());
        poll.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event).await?,
                    None => {
                        info!("overlay event channel closed");
                        break;
                    }
                },
                _ = poll.tick() => self.tick().await?,
            }
        }
        Ok(())
    }

    async fn wait_for_ready(&self) -> Result<(), ComposeError> {
        let timeout = self.config.page_ready_timeout();
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if self.surface.ready_state().await?.is_ready() {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(ComposeError::PageReadyTimeout(timeout));
            }
            tokio::time::sleep(self.config.probe_interval()).await;
        }
    }

    async fn handle_generate(&mut self, prompt: &str) -> Result<(), ComposeError> {
        // User input error: rejected before any network call.
        if prompt.trim().is_empty() {
            self.surface
                .show_toast("Describe your email purpose first")
                .await?;
            return Ok(());
        }

        let exclude = self.session.exclusion_for_next();
        match self.source.generate(prompt, &exclude).await {
            Ok(response) => {
                self.session
                    .record(response.template_index, response.has_more);
                let template = response.template();
                self.surface.render_preview(&template).await?;
                self.preview = Some(template);
                Ok(())
            }
            Err(generate_error) => {
                // No retry; the modal stays open for another attempt.
                error!(error = %generate_error, "template generation failed");
                self.surface
                    .show_toast("Failed to generate template. Please try again.")
                    .await?;
                Ok(())
            }
        }
    }

    async fn insert_template(&self, template: &Template) -> Result<(), ComposeError> {
        let Some(provider) = self.provider else {
            return Ok(());
        };

        let outcome = insert(&self.surface, provider, template, &self.config).await?;
        if outcome.any_written() {
            self.surface
                .show_toast("Template inserted successfully!")
                .await?;
        } else {
            warn!(%provider, "no compose field was written, suppressing success toast");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
