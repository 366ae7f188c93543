//! Smooth-scroll navigation commands.
//!
//! The core only computes destinations. Running the animation, and cancelling
//! it when the user scrolls again, is left to the host platform.

use crate::model::section::SectionId;

/// How the host should move to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Fire-and-forget scroll request for the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    /// Absolute document offset in px.
    pub top: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollCommand {
    pub fn smooth(top: f64) -> Self {
        Self {
            top,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Resolves section elements in the live document.
pub trait SectionLocator {
    /// Viewport-relative top edge of `section`, or `None` when the document
    /// has no element with that id.
    fn section_top(&self, section: SectionId) -> Option<f64>;
}

impl<F> SectionLocator for F
where
    F: Fn(SectionId) -> Option<f64>,
{
    fn section_top(&self, section: SectionId) -> Option<f64> {
        self(section)
    }
}

/// Document offset that lands `section_top` just below the sticky header.
pub fn navigation_target(section_top: f64, current_scroll_top: f64, nav_offset: f64) -> f64 {
    section_top + current_scroll_top - nav_offset
}

#[cfg(test)]
mod tests {
    use super::{navigation_target, SectionLocator};
    use crate::model::section::SectionId;

    #[test]
    fn target_accounts_for_scroll_and_header() {
        assert_eq!(navigation_target(640.0, 1200.0, 200.0), 1640.0);
        assert_eq!(navigation_target(-300.0, 1200.0, 200.0), 700.0);
    }

    #[test]
    fn closures_act_as_locators() {
        let locator = |section: SectionId| (section == SectionId::About).then_some(120.0);
        assert_eq!(locator.section_top(SectionId::About), Some(120.0));
        assert_eq!(locator.section_top(SectionId::Contact), None);
    }
}
