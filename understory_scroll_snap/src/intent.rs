// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll intents: serializing navigation against in-flight smooth scrolls.
//!
//! A smooth scroll passes over every child between its start and its
//! destination, and each of them is briefly fully contained. Without
//! coordination those transient matches would be reported as layout changes,
//! and a second navigation issued mid-animation would be measured from a stale
//! index.
//!
//! Every navigation that actually scrolls begins a new [`ScrollIntent`], which
//! supersedes any previous one. While an intent is pending the observer
//! ignores what it sees until the target itself is fully contained, which
//! resolves the intent. The target need not be the first contained child: at
//! the end of a clamped scroll range it can share the viewport with lower
//! children. Intents are also dropped when the host reports that scrolling
//! has settled.

/// A navigation request that is still in flight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScrollIntent {
    /// Monotonic identifier; later intents have larger ids.
    pub id: u64,
    /// Index the navigation is heading to.
    pub target: usize,
}

/// Tracks the latest [`ScrollIntent`].
#[derive(Clone, Debug, Default)]
pub struct IntentTracker {
    next_id: u64,
    pending: Option<ScrollIntent>,
}

impl IntentTracker {
    /// Creates a tracker with no pending intent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            pending: None,
        }
    }

    /// Starts a new intent towards `target`, superseding any pending one.
    pub fn begin(&mut self, target: usize) -> ScrollIntent {
        let intent = ScrollIntent {
            id: self.next_id,
            target,
        };
        self.next_id = self.next_id.wrapping_add(1);
        if let Some(previous) = self.pending.replace(intent) {
            log::trace!(
                "scroll intent {} (-> {}) superseded by {} (-> {})",
                previous.id,
                previous.target,
                intent.id,
                intent.target
            );
        }
        intent
    }

    /// The pending intent, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<ScrollIntent> {
        self.pending
    }

    /// Decides whether the current scroll position may be trusted.
    ///
    /// With no pending intent every position is trusted. Otherwise it is
    /// trusted once `target_contained` reports the pending target as fully
    /// contained, and the intent is resolved.
    pub fn accept(&mut self, target_contained: impl FnOnce(usize) -> bool) -> bool {
        match self.pending {
            None => true,
            Some(intent) if target_contained(intent.target) => {
                self.pending = None;
                true
            }
            Some(_) => false,
        }
    }

    /// Drops the pending intent, returning it.
    ///
    /// Hosts call this (through [`ScrollSnap::settle`](crate::ScrollSnap::settle))
    /// once scrolling has come to rest, for example on `scrollend`, or when the
    /// user interrupts an animated scroll.
    pub fn clear(&mut self) -> Option<ScrollIntent> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::IntentTracker;

    #[test]
    fn no_intent_accepts_everything() {
        let mut tracker = IntentTracker::new();
        assert!(tracker.accept(|_| false));
        assert!(tracker.accept(|_| true));
        assert_eq!(tracker.pending(), None);
    }

    #[test]
    fn pending_intent_waits_for_its_target() {
        let mut tracker = IntentTracker::new();
        let intent = tracker.begin(3);
        assert!(!tracker.accept(|target| target == 1));
        assert!(!tracker.accept(|_| false));
        assert_eq!(tracker.pending(), Some(intent));
        assert!(tracker.accept(|target| target == 3));
        assert_eq!(tracker.pending(), None);
    }

    #[test]
    fn newer_intent_supersedes_older() {
        let mut tracker = IntentTracker::new();
        let first = tracker.begin(3);
        let second = tracker.begin(1);
        assert!(second.id > first.id);
        // The superseded target is no longer trusted.
        assert!(!tracker.accept(|target| target == 3));
        assert!(tracker.accept(|target| target == 1));
    }

    #[test]
    fn clear_drops_pending_intent() {
        let mut tracker = IntentTracker::new();
        let intent = tracker.begin(2);
        assert_eq!(tracker.clear(), Some(intent));
        assert_eq!(tracker.clear(), None);
        assert!(tracker.accept(|_| false));
    }
}
