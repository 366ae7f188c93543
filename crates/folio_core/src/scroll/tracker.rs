//! Scroll state reducer.
//!
//! # Responsibility
//! - Apply scroll, resize and intersection signals to `ScrollState`.
//! - Serve navigation, scroll-to-top and menu requests.
//!
//! # Invariants
//! - Metrics signals never touch `active_section`; intersection signals never
//!   touch progress or thresholds. The two may interleave in any order.
//! - Within one intersection batch the last intersecting entry wins.
//! - Exit entries never clear `active_section`.

use crate::config::TrackerConfig;
use crate::model::section::SectionId;
use crate::scroll::navigation::{navigation_target, ScrollCommand, SectionLocator};
use crate::scroll::state::{is_past, progress_ratio, ScrollMetrics, ScrollState};
use log::trace;

/// One section's report from the viewport-center intersection observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub section: SectionId,
    /// `true` when the section overlaps the center band.
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn entering(section: SectionId) -> Self {
        Self {
            section,
            is_intersecting: true,
        }
    }

    pub fn leaving(section: SectionId) -> Self {
        Self {
            section,
            is_intersecting: false,
        }
    }
}

/// Raw input signal delivered by the host event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollSignal {
    Scroll(ScrollMetrics),
    Resize(ScrollMetrics),
    /// One observer callback batch, in delivery order.
    Intersection(Vec<IntersectionEntry>),
}

/// Owner and single writer of `ScrollState`.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    config: TrackerConfig,
    state: ScrollState,
    metrics: ScrollMetrics,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl ScrollTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            state: ScrollState::initial(config.initial_section),
            metrics: ScrollMetrics::default(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Last metrics sample applied.
    pub fn metrics(&self) -> &ScrollMetrics {
        &self.metrics
    }

    /// Applies one signal. Returns whether the visible state changed.
    pub fn apply(&mut self, signal: &ScrollSignal) -> bool {
        let before = self.state;
        match signal {
            ScrollSignal::Scroll(metrics) | ScrollSignal::Resize(metrics) => {
                self.apply_metrics(*metrics)
            }
            ScrollSignal::Intersection(entries) => self.apply_intersections(entries),
        }
        before != self.state
    }

    /// Recomputes progress and threshold flags from a metrics sample.
    pub fn apply_metrics(&mut self, metrics: ScrollMetrics) {
        self.metrics = metrics;
        self.state.offset_ratio = progress_ratio(&metrics);
        self.state.is_past_threshold =
            is_past(metrics.scroll_top, self.config.back_to_top_threshold_px);
        self.state.is_scrolled = is_past(metrics.scroll_top, self.config.scrolled_threshold_px);
    }

    /// Applies one observer batch with last-write-wins semantics.
    ///
    /// Adjacent sections straddling the band can alternate between batches;
    /// no closest-to-center tie-break is applied.
    pub fn apply_intersections(&mut self, entries: &[IntersectionEntry]) {
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            self.state.active_section = Some(entry.section);
        }
        trace!(
            "event=scroll_spy module=scroll status=ok entries={} active={}",
            entries.len(),
            self.state
                .active_section
                .map_or("none", SectionId::as_str)
        );
    }

    /// Builds a smooth-scroll command to `section` from the last applied
    /// metrics sample and closes the menu.
    ///
    /// Returns `None` without error when the document lacks the section.
    pub fn request_scroll_to(
        &mut self,
        section: SectionId,
        locator: &impl SectionLocator,
    ) -> Option<ScrollCommand> {
        self.request_scroll_to_at(section, self.metrics.scroll_top, locator)
    }

    /// Same as [`Self::request_scroll_to`], with the live document offset
    /// supplied by the caller.
    pub fn request_scroll_to_at(
        &mut self,
        section: SectionId,
        scroll_top: f64,
        locator: &impl SectionLocator,
    ) -> Option<ScrollCommand> {
        self.state.menu_open = false;
        let top = locator.section_top(section)?;
        Some(ScrollCommand::smooth(navigation_target(
            top,
            scroll_top,
            self.config.nav_offset_px,
        )))
    }

    pub fn request_scroll_to_top(&self) -> ScrollCommand {
        ScrollCommand::smooth(0.0)
    }

    /// Flips the mobile drawer. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.state.menu_open = !self.state.menu_open;
        self.state.menu_open
    }

    pub fn close_menu(&mut self) {
        self.state.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{IntersectionEntry, ScrollSignal, ScrollTracker};
    use crate::config::TrackerConfig;
    use crate::model::section::SectionId;
    use crate::scroll::state::ScrollMetrics;

    #[test]
    fn starts_at_configured_section() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.state().active_section, Some(SectionId::Home));

        let tracker = ScrollTracker::new(TrackerConfig {
            initial_section: None,
            ..TrackerConfig::default()
        });
        assert_eq!(tracker.state().active_section, None);
    }

    #[test]
    fn apply_reports_changes_only() {
        let mut tracker = ScrollTracker::default();
        let metrics = ScrollMetrics::new(300.0, 2000.0, 1000.0);
        assert!(tracker.apply(&ScrollSignal::Scroll(metrics)));
        assert!(!tracker.apply(&ScrollSignal::Resize(metrics)));
    }

    #[test]
    fn exit_entries_leave_active_section() {
        let mut tracker = ScrollTracker::default();
        tracker.apply_intersections(&[IntersectionEntry::entering(SectionId::About)]);
        tracker.apply_intersections(&[IntersectionEntry::leaving(SectionId::About)]);
        assert_eq!(tracker.state().active_section, Some(SectionId::About));
    }

    #[test]
    fn navbar_shadow_flips_past_six_pixels() {
        let mut tracker = ScrollTracker::default();
        tracker.apply_metrics(ScrollMetrics::new(6.0, 2000.0, 1000.0));
        assert!(!tracker.state().is_scrolled);
        tracker.apply_metrics(ScrollMetrics::new(7.0, 2000.0, 1000.0));
        assert!(tracker.state().is_scrolled);
    }

    #[test]
    fn menu_toggles_and_closes_on_navigation() {
        let mut tracker = ScrollTracker::default();
        assert!(tracker.toggle_menu());
        let missing = |_: SectionId| -> Option<f64> { None };
        assert!(tracker.request_scroll_to(SectionId::About, &missing).is_none());
        assert!(!tracker.state().menu_open);
    }
}
