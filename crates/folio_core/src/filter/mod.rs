//! Project filter engine.
//!
//! # Responsibility
//! - Select the visible projects for a free-text query and a tag.
//! - Own the view-level filter state (`query`, `active_tag`).
//!
//! # Invariants
//! - Filtering never reorders or adds records.
//! - `active_tag` is always one of `supported_tags()`.

pub mod engine;
