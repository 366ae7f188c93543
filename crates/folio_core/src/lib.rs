//! Core logic for the portfolio site.
//! This crate owns the project filter, scroll tracking and contact form rules;
//! rendering stays with the host.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod filter;
pub mod logging;
pub mod model;
pub mod scroll;

pub use catalog::{Catalog, CatalogError};
pub use config::{EmailServiceConfig, TrackerConfig};
pub use contact::service::{
    ContactPayload, ContactService, MessageTransport, Notification, NotificationKind,
    SubmitOutcome, TransportError,
};
pub use contact::validation::{validate, ContactField, ContactFormValues, ValidationReport};
pub use filter::engine::{
    filter_projects, supported_tags, FilterError, FilterState, ProjectFilter, TAG_ALL,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::ProjectRecord;
pub use model::section::{parse_section_id, SectionId, SectionParseError};
pub use scroll::lifecycle::{
    IntersectionBand, ListenerId, MountedTracker, Registration, SignalSource,
};
pub use scroll::navigation::{ScrollBehavior, ScrollCommand, SectionLocator};
pub use scroll::ring::ProgressRing;
pub use scroll::state::{progress_ratio, ScrollMetrics, ScrollState};
pub use scroll::tracker::{IntersectionEntry, ScrollSignal, ScrollTracker};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
