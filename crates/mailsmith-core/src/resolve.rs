//! Exclusion-aware template resolution.

use std::collections::HashSet;

use mailsmith_protocols::{Category, Template};
use rand::Rng;
use tracing::debug;

use crate::catalog;

/// The literal marker the resolver substitutes in template content.
pub const NAME_MARKER: &str = "[Your name]";

/// The sender-name pool, drawn from uniformly.
pub const SENDER_NAMES: [&str; 4] = ["Alex", "Sam", "Jordan", "Taylor"];

/// Outcome of one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The chosen variant with the sender name substituted.
    pub template: Template,

    /// Index of the chosen variant, for the caller's exclusion set.
    pub index: usize,

    /// Whether unseen variants remain. On wrap-around this is `true` and
    /// signals the caller to reset its exclusion set.
    pub has_more: bool,
}

/// Pick a variant of `category` avoiding `excluded` indices.
///
/// When every index is excluded, returns variant 0 with `has_more = true`
/// rather than failing - the wrap-around policy. Substitutes the first
/// [`NAME_MARKER`] occurrence in the content with a uniform draw from
/// [`SENDER_NAMES`]; no other token is touched.
pub fn resolve<R: Rng + ?Sized>(
    category: Category,
    excluded: &HashSet<usize>,
    rng: &mut R,
) -> Resolution {
    let variants = catalog::variants(category);
    let available: Vec<usize> = (0..variants.len())
        .filter(|index| !excluded.contains(index))
        .collect();

    let (index, has_more) = if available.is_empty() {
        debug!(%category, "all variants shown, wrapping around");
        (0, true)
    } else {
        let index = available[rng.random_range(0..available.len())];
        (index, excluded.len() + 1 < variants.len())
    };

    let variant = &variants[index];
    let name = SENDER_NAMES[rng.random_range(0..SENDER_NAMES.len())];
    let content = variant.content.replacen(NAME_MARKER, name, 1);

    debug!(%category, index, has_more, "resolved template");
    Resolution {
        template: Template::new(variant.subject, content),
        index,
        has_more,
    }
}
