//! Domain model for the portfolio core.
//!
//! # Responsibility
//! - Define the project record shown by the projects grid.
//! - Define the fixed set of navigable page sections.
//!
//! # Invariants
//! - Records are immutable values once they enter a catalog.
//! - Section identifiers map one-to-one to document element ids.

pub mod project;
pub mod section;
