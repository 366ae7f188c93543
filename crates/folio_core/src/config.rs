//! Runtime configuration for the tracker and the email collaborator.
//!
//! # Responsibility
//! - Hold pixel constants used by scroll tracking and navigation.
//! - Resolve email-service identifiers from the environment.
//!
//! # Invariants
//! - Every field has a usable default; partial config documents are accepted.
//! - Email identifiers are never logged.

use crate::model::section::SectionId;
use serde::Deserialize;

/// Default scroll offset (px) past which the back-to-top button shows.
pub const DEFAULT_BACK_TO_TOP_THRESHOLD_PX: f64 = 200.0;
/// Default sticky header allowance (px) subtracted from navigation targets.
pub const DEFAULT_NAV_OFFSET_PX: f64 = 200.0;
/// Default scroll offset (px) past which the navbar draws its shadow.
pub const DEFAULT_SCROLLED_THRESHOLD_PX: f64 = 6.0;

pub const ENV_EMAIL_SERVICE_ID: &str = "FOLIO_EMAIL_SERVICE_ID";
pub const ENV_EMAIL_TEMPLATE_ID: &str = "FOLIO_EMAIL_TEMPLATE_ID";
pub const ENV_EMAIL_PUBLIC_KEY: &str = "FOLIO_EMAIL_PUBLIC_KEY";

/// Scroll tracker settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Strict lower bound for `is_past_threshold`. No hysteresis.
    pub back_to_top_threshold_px: f64,
    pub nav_offset_px: f64,
    pub scrolled_threshold_px: f64,
    /// Active section before the first intersection report.
    pub initial_section: Option<SectionId>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold_px: DEFAULT_BACK_TO_TOP_THRESHOLD_PX,
            nav_offset_px: DEFAULT_NAV_OFFSET_PX,
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
            initial_section: Some(SectionId::Home),
        }
    }
}

/// Identifiers for the hosted email-delivery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailServiceConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for EmailServiceConfig {
    fn default() -> Self {
        Self {
            service_id: "YOUR_SERVICE_ID".to_string(),
            template_id: "YOUR_TEMPLATE_ID".to_string(),
            public_key: "YOUR_PUBLIC_KEY".to_string(),
        }
    }
}

impl EmailServiceConfig {
    /// Resolves identifiers from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves identifiers through `lookup`, falling back to placeholders
    /// for unset or blank values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let resolve = |key: &str, fallback: String| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
        };
        Self {
            service_id: resolve(ENV_EMAIL_SERVICE_ID, defaults.service_id),
            template_id: resolve(ENV_EMAIL_TEMPLATE_ID, defaults.template_id),
            public_key: resolve(ENV_EMAIL_PUBLIC_KEY, defaults.public_key),
        }
    }

    /// Returns whether any identifier still holds its placeholder value.
    pub fn has_placeholders(&self) -> bool {
        let defaults = Self::default();
        self.service_id == defaults.service_id
            || self.template_id == defaults.template_id
            || self.public_key == defaults.public_key
    }
}

#[cfg(test)]
mod tests {
    use super::{EmailServiceConfig, TrackerConfig, ENV_EMAIL_SERVICE_ID};
    use crate::model::section::SectionId;

    #[test]
    fn tracker_defaults_match_page_layout() {
        let config = TrackerConfig::default();
        assert_eq!(config.back_to_top_threshold_px, 200.0);
        assert_eq!(config.nav_offset_px, 200.0);
        assert_eq!(config.scrolled_threshold_px, 6.0);
        assert_eq!(config.initial_section, Some(SectionId::Home));
    }

    #[test]
    fn lookup_overrides_only_present_values() {
        let config = EmailServiceConfig::from_lookup(|key| {
            (key == ENV_EMAIL_SERVICE_ID).then(|| " service_live ".to_string())
        });
        assert_eq!(config.service_id, "service_live");
        assert_eq!(config.template_id, "YOUR_TEMPLATE_ID");
        assert!(config.has_placeholders());
    }

    #[test]
    fn blank_lookup_values_fall_back_to_placeholders() {
        let config = EmailServiceConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, EmailServiceConfig::default());
    }

    #[test]
    fn fully_resolved_config_has_no_placeholders() {
        let config = EmailServiceConfig::from_lookup(|key| Some(format!("{key}-value")));
        assert!(!config.has_placeholders());
    }
}
