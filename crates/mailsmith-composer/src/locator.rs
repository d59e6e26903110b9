//! Compose-field location.
//!
//! Each provider ships several generations of compose UI at once, so every
//! logical field is described by an ordered list of selector candidates.
//! The probe walks the list lazily and stops at the first acceptable
//! element; nothing matching is `None`, never an error.

use mailsmith_protocols::{FieldKind, MailProvider};
use tracing::debug;

use crate::error::ComposeError;
use crate::surface::{ComposeSurface, ElementId};

/// How a selector's matches are narrowed down to one element.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Acceptance {
    /// Take the first match outright.
    First,

    /// Enumerate all matches and take the first whose rendered box exceeds
    /// the given size. Filters out collapsed reply quotes and hidden
    /// editors that also match the selector.
    MinSize { width: f64, height: f64 },
}

/// Ordered selector candidates plus the acceptance rule for one field.
#[derive(Debug)]
struct FieldProbe {
    selectors: &'static [&'static str],
    acceptance: Acceptance,
}

/// Body editors smaller than this are decoys.
const BODY_MIN_SIZE: Acceptance = Acceptance::MinSize {
    width: 200.0,
    height: 50.0,
};

const GMAIL_SUBJECT: FieldProbe = FieldProbe {
    selectors: &[
        "input[name=\"subjectbox\"]",
        "[aria-label*=\"Subject\"]",
        "[placeholder*=\"Subject\"]",
        ".aoT",
    ],
    acceptance: Acceptance::First,
};

const GMAIL_BODY: FieldProbe = FieldProbe {
    selectors: &[
        "[aria-label*=\"Message Body\"]",
        "[contenteditable=\"true\"]",
        ".Am.Al.editable",
        ".editable",
        "div[role=\"textbox\"]",
    ],
    acceptance: BODY_MIN_SIZE,
};

const OUTLOOK_SUBJECT: FieldProbe = FieldProbe {
    selectors: &[
        "[aria-label*=\"Subject\"]",
        "input[placeholder*=\"Subject\"]",
        "[data-testid*=\"subject\"]",
    ],
    acceptance: Acceptance::First,
};

const OUTLOOK_BODY: FieldProbe = FieldProbe {
    selectors: &[
        "[contenteditable=\"true\"]",
        "[aria-label*=\"Message body\"]",
        "[role=\"textbox\"]",
    ],
    acceptance: BODY_MIN_SIZE,
};

fn probe_for(provider: MailProvider, kind: FieldKind) -> &'static FieldProbe {
    match (provider, kind) {
        (MailProvider::Gmail, FieldKind::Subject) => &GMAIL_SUBJECT,
        (MailProvider::Gmail, FieldKind::Body) => &GMAIL_BODY,
        (MailProvider::Outlook, FieldKind::Subject) => &OUTLOOK_SUBJECT,
        (MailProvider::Outlook, FieldKind::Body) => &OUTLOOK_BODY,
    }
}

/// Find the live element for a logical compose field.
pub async fn locate<S: ComposeSurface + ?Sized>(
    surface: &S,
    provider: MailProvider,
    kind: FieldKind,
) -> Result<Option<ElementId>, ComposeError> {
    let probe = probe_for(provider, kind);

    for selector in probe.selectors {
        let matches = surface.query_all(selector).await?;
        if matches.is_empty() {
            continue;
        }

        match probe.acceptance {
            Acceptance::First => {
                debug!(%provider, kind = kind.as_str(), selector, "field located");
                return Ok(matches.first().copied());
            }
            Acceptance::MinSize { width, height } => {
                for element in matches {
                    if let Some(metrics) = surface.metrics(element).await? {
                        if metrics.height > height && metrics.width > width {
                            debug!(%provider, kind = kind.as_str(), selector, "field located");
                            return Ok(Some(element));
                        }
                    }
                }
            }
        }
    }

    debug!(%provider, kind = kind.as_str(), "no candidate selector matched");
    Ok(None)
}
