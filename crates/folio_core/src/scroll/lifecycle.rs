//! Listener registration for a mounted tracker.
//!
//! # Responsibility
//! - Register scroll, resize and per-section intersection listeners on mount.
//! - Deregister exactly those listeners when the mount guard is dropped.
//!
//! # Invariants
//! - Every `ListenerId` returned by the source is released once, on every
//!   exit path (explicit unmount, early return, unwinding).
//! - Initial state is computed from current metrics right after registration.

use crate::model::section::SectionId;
use crate::scroll::navigation::{ScrollCommand, SectionLocator};
use crate::scroll::state::{ScrollMetrics, ScrollState};
use crate::scroll::tracker::{ScrollSignal, ScrollTracker};
use log::debug;

/// Host-issued handle for one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Viewport band used by the scroll-spy observer, as root margins in percent
/// of viewport height (negative values shrink the root).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionBand {
    pub root_margin_top_pct: f64,
    pub root_margin_bottom_pct: f64,
    pub threshold: f64,
}

impl IntersectionBand {
    /// Zero-height band on the viewport midline.
    pub const CENTER_LINE: Self = Self {
        root_margin_top_pct: -50.0,
        root_margin_bottom_pct: -50.0,
        threshold: 0.0,
    };

    /// CSS `rootMargin` form of this band.
    pub fn root_margin(&self) -> String {
        format!(
            "{}% 0px {}% 0px",
            self.root_margin_top_pct, self.root_margin_bottom_pct
        )
    }
}

/// Listener kinds requested by the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Registration {
    Scroll,
    Resize,
    Intersection {
        section: SectionId,
        band: IntersectionBand,
    },
}

/// Host event system the tracker subscribes to.
pub trait SignalSource {
    /// Geometry at the time of the call.
    fn current_metrics(&self) -> ScrollMetrics;
    /// Registers a listener. `None` means nothing was registered, e.g. the
    /// section element is absent from the document.
    fn register(&mut self, registration: Registration) -> Option<ListenerId>;
    fn deregister(&mut self, listener: ListenerId);
}

impl ScrollTracker {
    /// Subscribes to `source` and returns a guard that unsubscribes on drop.
    pub fn mount<'a, S>(&'a mut self, source: &'a mut S) -> MountedTracker<'a, S>
    where
        S: SignalSource + ?Sized,
    {
        let mut mounted = MountedTracker {
            tracker: self,
            source,
            listeners: Vec::new(),
        };

        mounted.subscribe(Registration::Scroll);
        mounted.subscribe(Registration::Resize);
        for section in SectionId::ALL {
            mounted.subscribe(Registration::Intersection {
                section,
                band: IntersectionBand::CENTER_LINE,
            });
        }

        let metrics = mounted.source.current_metrics();
        mounted.tracker.apply_metrics(metrics);
        debug!(
            "event=tracker_mount module=scroll status=ok listeners={}",
            mounted.listeners.len()
        );
        mounted
    }
}

/// Tracker bound to a live signal source.
pub struct MountedTracker<'a, S: SignalSource + ?Sized> {
    tracker: &'a mut ScrollTracker,
    source: &'a mut S,
    listeners: Vec<ListenerId>,
}

impl<S: SignalSource + ?Sized> MountedTracker<'_, S> {
    fn subscribe(&mut self, registration: Registration) {
        if let Some(listener) = self.source.register(registration) {
            self.listeners.push(listener);
        }
    }

    /// Forwards one host signal to the tracker.
    pub fn handle(&mut self, signal: &ScrollSignal) -> bool {
        self.tracker.apply(signal)
    }

    pub fn state(&self) -> &ScrollState {
        self.tracker.state()
    }

    pub fn tracker(&self) -> &ScrollTracker {
        self.tracker
    }

    /// Navigates using the source's live offset, not the last delivered
    /// scroll sample.
    pub fn request_scroll_to(
        &mut self,
        section: SectionId,
        locator: &impl SectionLocator,
    ) -> Option<ScrollCommand> {
        let scroll_top = self.source.current_metrics().scroll_top;
        self.tracker.request_scroll_to_at(section, scroll_top, locator)
    }

    pub fn request_scroll_to_top(&self) -> ScrollCommand {
        self.tracker.request_scroll_to_top()
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.tracker.toggle_menu()
    }

    pub fn close_menu(&mut self) {
        self.tracker.close_menu();
    }

    /// Listeners currently held, in registration order.
    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Explicit unmount. Equivalent to dropping the guard.
    pub fn unmount(self) {}
}

impl<S: SignalSource + ?Sized> Drop for MountedTracker<'_, S> {
    fn drop(&mut self) {
        let released = self.listeners.len();
        for listener in self.listeners.drain(..).rev() {
            self.source.deregister(listener);
        }
        debug!("event=tracker_unmount module=scroll status=ok listeners={released}");
    }
}
