//! Template insertion into a live compose window.

use std::time::Duration;

use mailsmith_protocols::{FieldKind, MailProvider, Template};
use tracing::{debug, warn};

use crate::config::ComposerConfig;
use crate::error::ComposeError;
use crate::locator::locate;
use crate::surface::{ComposeSurface, DomEvent};

/// Which fields an insertion actually reached.
///
/// The caller decides what to tell the user from this; a fully-missed
/// insertion is not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertOutcome {
    pub subject_written: bool,
    pub body_written: bool,
}

impl InsertOutcome {
    pub fn any_written(&self) -> bool {
        self.subject_written || self.body_written
    }
}

/// Wait until the composer renders at least one target field.
///
/// Bounded poll instead of a fixed settling delay: the host builds its
/// compose window asynchronously, so probe at `probe_interval` until a
/// field resolves or `field_timeout` lapses. A lapse is reported by
/// returning `false`, not by failing.
async fn wait_for_composer<S: ComposeSurface + ?Sized>(
    surface: &S,
    provider: MailProvider,
    timeout: Duration,
    interval: Duration,
) -> Result<bool, ComposeError> {
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        if locate(surface, provider, FieldKind::Subject).await?.is_some()
            || locate(surface, provider, FieldKind::Body).await?.is_some()
        {
            return Ok(true);
        }
        if tokio::time::Instant::now() >= deadline {
            warn!(%provider, ?timeout, "compose window did not appear");
            return Ok(false);
        }
        tokio::time::sleep(interval).await;
    }
}

/// Write a template into the provider's compose window.
///
/// Subject: set the input value and dispatch bubbling `input` + `change` so
/// the host's state management picks up the edit. Body: convert newlines to
/// `<br>`, write the rendered content, dispatch the same events, then focus
/// the editor. Either field may be missing; it is skipped silently and
/// reflected in the outcome.
pub async fn insert<S: ComposeSurface + ?Sized>(
    surface: &S,
    provider: MailProvider,
    template: &Template,
    config: &ComposerConfig,
) -> Result<InsertOutcome, ComposeError> {
    let mut outcome = InsertOutcome::default();

    let appeared = wait_for_composer(
        surface,
        provider,
        config.field_timeout(),
        config.probe_interval(),
    )
    .await?;
    if !appeared {
        return Ok(outcome);
    }

    if let Some(subject) = locate(surface, provider, FieldKind::Subject).await? {
        surface.write_value(subject, &template.subject).await?;
        surface.dispatch(subject, DomEvent::Input).await?;
        surface.dispatch(subject, DomEvent::Change).await?;
        outcome.subject_written = true;
    } else {
        debug!(%provider, "subject field not found, skipped");
    }

    if let Some(body) = locate(surface, provider, FieldKind::Body).await? {
        let html = template.content.replace('\n', "<br>");
        surface.write_html(body, &html).await?;
        surface.dispatch(body, DomEvent::Input).await?;
        surface.dispatch(body, DomEvent::Change).await?;
        surface.focus(body).await?;
        outcome.body_written = true;
    } else {
        debug!(%provider, "body field not found, skipped");
    }

    Ok(outcome)
}
