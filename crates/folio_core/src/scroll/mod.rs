//! Scroll position tracking and scroll-spy navigation.
//!
//! # Responsibility
//! - Reduce raw scroll/resize/intersection signals into one `ScrollState`.
//! - Turn navigation requests into smooth-scroll commands for the host.
//! - Pair listener registration with deregistration through a scoped guard.
//!
//! # Invariants
//! - `ScrollState::offset_ratio` is always within `[0, 1]`.
//! - The tracker is the single writer of its state; consumers read `&ScrollState`.
//! - Overlapping intersection reports resolve last-write-wins in batch order.

pub mod lifecycle;
pub mod navigation;
pub mod ring;
pub mod state;
pub mod tracker;
