//! Mail provider detection and compose-field addressing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported email provider.
///
/// Anything else is unsupported: the composer stays dormant on such pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    Gmail,
    Outlook,
}

impl MailProvider {
    /// Detect the provider from a page hostname.
    ///
    /// Matches the hostname patterns the providers have used across UI
    /// revisions: `mail.google.com` for Gmail and any `outlook` host
    /// (outlook.live.com, outlook.office.com, ...) for Outlook.
    pub fn from_host(host: &str) -> Option<Self> {
        if host.contains("mail.google.com") {
            Some(MailProvider::Gmail)
        } else if host.contains("outlook") {
            Some(MailProvider::Outlook)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MailProvider::Gmail => "gmail",
            MailProvider::Outlook => "outlook",
        }
    }
}

impl fmt::Display for MailProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical compose field the locator can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single-line subject input.
    Subject,
    /// Rich-text message body (contenteditable region).
    Body,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Subject => "subject",
            FieldKind::Body => "body",
        }
    }
}
