//! Project record model.
//!
//! # Responsibility
//! - Define the canonical record rendered as one project card.
//! - Provide lowercase search haystacks used by the filter engine.
//!
//! # Invariants
//! - `id` is unique within a catalog (enforced by `Catalog`).
//! - `stack` and `highlights` keep author order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Number of highlight badges overlaid on a project card image.
pub const BADGE_HIGHLIGHT_LIMIT: usize = 2;

/// One portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable identifier, unique within one catalog.
    pub id: String,
    pub title: String,
    /// Free-text summary shown under the title.
    pub description: String,
    /// Screenshot reference. Opaque to core.
    pub image: String,
    /// Technology names in display order.
    pub stack: Vec<String>,
    /// Deployed demo link.
    pub live_url: Option<String>,
    /// Source repository link.
    pub repo_url: Option<String>,
    pub highlights: Vec<String>,
    /// Category labels used by tag filtering.
    pub tags: BTreeSet<String>,
    pub year: i32,
}

impl ProjectRecord {
    /// Returns whether this record carries `tag` exactly.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Returns the highlights shown as image badges (first two at most).
    pub fn badge_highlights(&self) -> &[String] {
        let end = self.highlights.len().min(BADGE_HIGHLIGHT_LIMIT);
        &self.highlights[..end]
    }

    /// Space-joined stack list, the form matched by text search.
    pub fn stack_line(&self) -> String {
        self.stack.join(" ")
    }

    /// Returns whether `needle` (already lowercased) occurs in the lowercased
    /// title, description or joined stack.
    pub(crate) fn contains_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.stack_line().to_lowercase().contains(needle)
    }
}
