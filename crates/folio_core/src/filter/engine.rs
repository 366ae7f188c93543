//! Query/tag filtering over a project catalog.

use crate::catalog::Catalog;
use crate::model::project::ProjectRecord;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wildcard tag matching every record.
pub const TAG_ALL: &str = "all";
pub const TAG_FEATURED: &str = "featured";
pub const TAG_MERN: &str = "mern";
pub const TAG_FULLSTACK: &str = "fullstack";
pub const TAG_FRONTEND: &str = "frontend";
pub const TAG_REACT: &str = "react";

const SUPPORTED_TAGS: &[&str] = &[
    TAG_ALL,
    TAG_FEATURED,
    TAG_MERN,
    TAG_FULLSTACK,
    TAG_FRONTEND,
    TAG_REACT,
];

/// Returns the selectable tags in display order, wildcard first.
pub fn supported_tags() -> &'static [&'static str] {
    SUPPORTED_TAGS
}

/// Returns the catalog subset matching both `query` and `tag`.
///
/// Rules:
/// - tag matches when it is `all` or one of the record tags.
/// - query matches when blank, or when its trimmed lowercase form is a
///   substring of the lowercase title, description or space-joined stack.
/// - catalog order is preserved.
pub fn filter_projects(catalog: &[ProjectRecord], query: &str, tag: &str) -> Vec<ProjectRecord> {
    let needle = query.trim().to_lowercase();
    catalog
        .iter()
        .filter(|record| matches_tag(record, tag) && matches_query(record, &needle))
        .cloned()
        .collect()
}

fn matches_tag(record: &ProjectRecord, tag: &str) -> bool {
    tag == TAG_ALL || record.has_tag(tag)
}

fn matches_query(record: &ProjectRecord, needle: &str) -> bool {
    needle.is_empty() || record.contains_text(needle)
}

/// Filter selection errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    EmptyTag,
    UnsupportedTag(String),
}

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTag => write!(f, "filter tag must not be empty"),
            Self::UnsupportedTag(value) => write!(f, "filter tag is unsupported: {value}"),
        }
    }
}

impl Error for FilterError {}

/// Current filter inputs for the projects view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Raw search box text. Untrimmed.
    pub query: String,
    pub active_tag: &'static str,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            active_tag: TAG_ALL,
        }
    }
}

/// Projects view model: a fixed catalog plus its filter state.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    catalog: Catalog,
    state: FilterState,
}

impl ProjectFilter {
    /// Creates a filter with an empty query and the wildcard tag.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: FilterState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Replaces the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Selects one tag from `supported_tags()`, matched exactly.
    ///
    /// State is left untouched on error.
    pub fn set_active_tag(&mut self, tag: &str) -> Result<(), FilterError> {
        if tag.is_empty() {
            return Err(FilterError::EmptyTag);
        }
        let Some(known) = SUPPORTED_TAGS.iter().copied().find(|value| *value == tag) else {
            return Err(FilterError::UnsupportedTag(tag.to_string()));
        };
        if self.state.active_tag != known {
            debug!(
                "event=filter_tag_changed module=filter status=ok from={} to={}",
                self.state.active_tag, known
            );
        }
        self.state.active_tag = known;
        Ok(())
    }

    /// Returns the records visible for the current state.
    pub fn visible(&self) -> Vec<ProjectRecord> {
        filter_projects(
            self.catalog.records(),
            &self.state.query,
            self.state.active_tag,
        )
    }

    pub fn available_tags(&self) -> &'static [&'static str] {
        supported_tags()
    }
}
