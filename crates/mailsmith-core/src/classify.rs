//! Free-text prompt classification.

use mailsmith_protocols::Category;
use tracing::debug;

/// Ordered keyword rules; the first category whose keyword list hits wins.
/// Followup is checked before sales so "sales follow up" lands in followup.
const RULES: &[(Category, &[&str])] = &[
    (Category::Followup, &["follow", "reminder"]),
    (Category::Sales, &["sales", "revenue"]),
    (Category::Marketing, &["market", "brand"]),
    (Category::Partnership, &["partner", "collaboration"]),
];

/// Map a free-text prompt to a template category.
///
/// Case-insensitive substring matching against the rule table; prompts
/// matching nothing fall back to [`Category::Introduction`]. Total - there
/// is no error case.
pub fn classify(prompt: &str) -> Category {
    let prompt = prompt.to_lowercase();
    let category = RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| prompt.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Introduction);

    debug!(%category, "classified prompt");
    category
}
