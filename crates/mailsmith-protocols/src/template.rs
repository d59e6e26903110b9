//! Email template domain types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reusable email template.
///
/// Content may carry `{{identifier}}` placeholder tokens (first_name,
/// last_name, email, company, industry) which are substituted with contact
/// data outside this workspace. The resolver only ever touches the literal
/// `[Your name]` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Subject line.
    pub subject: String,

    /// Plain-text body with `\n` line breaks.
    pub content: String,
}

impl Template {
    pub fn new(subject: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            content: content.into(),
        }
    }
}

/// Intent bucket used to select a template family.
///
/// The set is closed; every free-text prompt maps to exactly one category,
/// with [`Category::Introduction`] as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sales,
    Marketing,
    Partnership,
    Introduction,
    Followup,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 5] = [
        Category::Sales,
        Category::Marketing,
        Category::Partnership,
        Category::Introduction,
        Category::Followup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sales => "sales",
            Category::Marketing => "marketing",
            Category::Partnership => "partnership",
            Category::Introduction => "introduction",
            Category::Followup => "followup",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bundled quick-pick templates offered directly in the floating modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickPick {
    ColdOutreach,
    FollowUp,
    Introduction,
}

impl QuickPick {
    /// All quick picks, in the order they appear in the modal.
    pub const ALL: [QuickPick; 3] = [
        QuickPick::ColdOutreach,
        QuickPick::FollowUp,
        QuickPick::Introduction,
    ];

    /// Stable identifier used by the overlay markup.
    pub fn id(&self) -> &'static str {
        match self {
            QuickPick::ColdOutreach => "cold-outreach",
            QuickPick::FollowUp => "follow-up",
            QuickPick::Introduction => "introduction",
        }
    }

    /// Parse an overlay identifier back into a quick pick.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pick| pick.id() == id)
    }
}
