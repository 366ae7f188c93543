//! Scroll-derived view state and the math behind it.

use crate::model::section::SectionId;

/// One sample of document scroll geometry, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    /// Full scrollable height of the document.
    pub document_height: f64,
    /// Visible client height.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            document_height,
            viewport_height,
        }
    }

    /// Scroll offset where the bottom of the document is reached.
    pub fn max_scroll_top(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// Current navigation chrome state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// `0` at top, `1` at bottom.
    pub offset_ratio: f64,
    /// Back-to-top button visibility.
    pub is_past_threshold: bool,
    /// Navbar shadow visibility.
    pub is_scrolled: bool,
    pub active_section: Option<SectionId>,
    /// Mobile navigation drawer.
    pub menu_open: bool,
}

impl ScrollState {
    pub(crate) fn initial(active_section: Option<SectionId>) -> Self {
        Self {
            offset_ratio: 0.0,
            is_past_threshold: false,
            is_scrolled: false,
            active_section,
            menu_open: false,
        }
    }

    /// Returns whether `section` is the highlighted navigation entry.
    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == Some(section)
    }
}

/// Normalized scroll progress for `metrics`.
///
/// Returns `0` when there is nothing to scroll or an input is NaN. Infinite
/// offsets clamp to the nearest end.
pub fn progress_ratio(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.max_scroll_top();
    if metrics.scroll_top.is_nan() || scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }
    // Why: browsers report fractional heights; flooring the divisor at 1px keeps a
    // sub-pixel scroll range from amplifying rounding noise into a full ratio.
    let ratio = metrics.scroll_top / scrollable.max(1.0);
    if ratio.is_nan() {
        // inf / inf: offset and height both unbounded.
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Step function without hysteresis: strictly greater than `threshold`.
pub fn is_past(scroll_top: f64, threshold: f64) -> bool {
    scroll_top > threshold
}
