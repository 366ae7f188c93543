//! Project catalog.
//!
//! # Responsibility
//! - Hold the fixed, insertion-ordered list of projects known at startup.
//! - Reject malformed catalogs before any view reads them.
//!
//! # Invariants
//! - Record ids are non-blank and unique.
//! - The catalog is never mutated after construction.

pub mod seed;

use crate::model::project::ProjectRecord;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Record at `index` has a blank id.
    EmptyId { index: usize },
    DuplicateId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId { index } => write!(f, "project at index {index} has an empty id"),
            Self::DuplicateId(id) => write!(f, "project id already present: {id}"),
        }
    }
}

impl Error for CatalogError {}

/// Immutable, ordered project catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Errors
    /// - Returns `EmptyId` when a record id is blank.
    /// - Returns `DuplicateId` for the second occurrence of an id.
    pub fn try_new(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for (index, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Returns the built-in portfolio catalog.
    pub fn seed() -> Self {
        Self {
            records: seed::seed_records(),
        }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
