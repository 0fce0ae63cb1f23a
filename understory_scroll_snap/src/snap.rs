// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll snap controller.

use kurbo::Vec2;

use crate::{
    IntentTracker, LayoutChangeEvent, LayoutChangeHandler, Result, ScrollBehavior, ScrollIntent,
    SnapAxis, SnapConfig, SnapContainer, SnapError, SnapMount, clamp_index, contains,
    first_contained, travel_distance,
};

/// Child handle type of a mount's scroll container.
pub type ChildOf<M> = <<M as SnapMount>::Container as SnapContainer>::Child;

/// Lifecycle of a [`ScrollSnap`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Created but not yet attached; navigation requests are queued.
    Uninitialized,
    /// Attached to its scroll container and tracking the current index.
    Active,
    /// Detached from its container; the controller is inert.
    Detached,
}

/// Result of a navigation request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Navigation {
    /// A smooth scroll by `delta` was issued towards `target`.
    Scrolled {
        /// Clamped destination index.
        target: usize,
        /// Relative scroll handed to the container.
        delta: Vec2,
    },
    /// The destination is where the controller already is (or is heading);
    /// no scroll was issued.
    Unchanged {
        /// Clamped destination index.
        index: usize,
    },
    /// The controller is not active yet; the request will run on activation.
    Deferred,
}

// Navigation requested before activation. Only the latest one is kept.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum DeferredNavigation {
    To(isize),
    By(isize),
}

enum State<C> {
    Uninitialized,
    Active { container: C, axis: SnapAxis },
    Detached,
}

/// Headless scroll snap controller.
///
/// ## Usage
///
/// - Construct with [`ScrollSnap::new`] from a [`SnapMount`] and a [`SnapConfig`].
/// - Optionally register a handler with [`ScrollSnap::on_layout_change`].
/// - After the host's first render pass, call [`ScrollSnap::attach`]. It locates
///   the scroll container, resolves the snap axis once, jumps to the configured
///   initial index without animation, and activates the controller.
/// - Forward every container scroll event to [`ScrollSnap::handle_scroll`], and
///   scroll-end notifications to [`ScrollSnap::settle`].
/// - Navigate with [`ScrollSnap::change_layout_by_index`],
///   [`ScrollSnap::previous_layout`], and [`ScrollSnap::next_layout`].
///
/// Requests made before [`ScrollSnap::attach`] are queued and replayed once the
/// controller is active, so they never observe a partially initialized state.
pub struct ScrollSnap<M: SnapMount> {
    mount: M,
    config: SnapConfig,
    state: State<M::Container>,
    current_index: usize,
    intents: IntentTracker,
    deferred: Option<DeferredNavigation>,
    on_layout_change: Option<LayoutChangeHandler<ChildOf<M>>>,
}

impl<M: SnapMount> core::fmt::Debug for ScrollSnap<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollSnap")
            .field("lifecycle", &self.lifecycle())
            .field("config", &self.config)
            .field("direction", &self.direction())
            .field("current_index", &self.current_index)
            .field("pending_intent", &self.intents.pending())
            .finish_non_exhaustive()
    }
}

impl<M: SnapMount> ScrollSnap<M> {
    /// Creates an uninitialized controller.
    pub fn new(mount: M, config: SnapConfig) -> Self {
        Self {
            mount,
            config,
            state: State::Uninitialized,
            current_index: 0,
            intents: IntentTracker::new(),
            deferred: None,
            on_layout_change: None,
        }
    }

    /// Replaces the layout change handler.
    pub fn set_on_layout_change(&mut self, handler: Option<LayoutChangeHandler<ChildOf<M>>>) {
        self.on_layout_change = handler;
    }

    /// Registers `handler` as the layout change handler, replacing any previous one.
    pub fn on_layout_change(
        &mut self,
        handler: impl FnMut(&mut LayoutChangeEvent<ChildOf<M>>) + 'static,
    ) {
        self.on_layout_change = Some(alloc::boxed::Box::new(handler));
    }

    /// Whether a layout change handler is registered.
    #[must_use]
    pub fn has_layout_change_handler(&self) -> bool {
        self.on_layout_change.is_some()
    }

    /// The mount this controller was created with.
    #[must_use]
    pub fn mount(&self) -> &M {
        &self.mount
    }

    /// Configuration this controller was created with.
    #[must_use]
    pub const fn config(&self) -> SnapConfig {
        self.config
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        match self.state {
            State::Uninitialized => Lifecycle::Uninitialized,
            State::Active { .. } => Lifecycle::Active,
            State::Detached => Lifecycle::Detached,
        }
    }

    /// Returns `true` once [`ScrollSnap::attach`] has succeeded and until detached.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    /// Snap axis resolved on activation, or `None` while not active.
    #[must_use]
    pub const fn direction(&self) -> Option<SnapAxis> {
        match self.state {
            State::Active { axis, .. } => Some(axis),
            _ => None,
        }
    }

    /// Index of the most recently detected contained child.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Navigation still in flight, if any.
    #[must_use]
    pub const fn pending_intent(&self) -> Option<ScrollIntent> {
        self.intents.pending()
    }

    /// The scroll container, while active.
    #[must_use]
    pub fn container(&self) -> Option<&M::Container> {
        match &self.state {
            State::Active { container, .. } => Some(container),
            _ => None,
        }
    }

    /// Number of children in the scroll container, while active.
    #[must_use]
    pub fn child_count(&self) -> Option<usize> {
        self.container().map(SnapContainer::child_count)
    }

    /// Activates the controller.
    ///
    /// Locates the scroll container, resolves the snap axis from its computed
    /// style, validates [`SnapConfig::init_slide`], and scrolls to that child
    /// without animation. Any navigation queued before activation runs last.
    ///
    /// Calling this on an already active controller does nothing.
    ///
    /// # Errors
    ///
    /// - [`SnapError::MissingScrollContainer`] if the mount has no scroll container.
    /// - [`SnapError::InitialIndexOutOfRange`] if the initial index names no child.
    /// - [`SnapError::Detached`] if the controller was detached.
    ///
    /// The controller stays uninitialized on error.
    pub fn attach(&mut self) -> Result<()> {
        match self.state {
            State::Uninitialized => {}
            State::Active { .. } => return Ok(()),
            State::Detached => return Err(SnapError::Detached),
        }

        let mut container = self
            .mount
            .scroll_container()
            .ok_or(SnapError::MissingScrollContainer)?;
        let snap_type = container.snap_type();
        let axis = SnapAxis::resolve(snap_type.as_deref());

        let len = container.child_count();
        let initial = initial_index(self.config.init_slide, len)?;
        let distance = travel_distance(|idx| child_extent(&container, axis, idx), 0, initial);
        if distance != 0.0 {
            container.scroll_by(axis.offset(distance), ScrollBehavior::Instant);
        }

        self.current_index = initial;
        self.state = State::Active { container, axis };
        log::debug!("scroll snap active: axis={axis:?} children={len} initial={initial}");

        if let Some(deferred) = self.deferred.take() {
            log::debug!("replaying navigation queued before activation: {deferred:?}");
            let outcome = match deferred {
                DeferredNavigation::To(index) => self.change_layout_by_index(index),
                DeferredNavigation::By(step) => self.step_layout(step),
            };
            outcome?;
        }
        Ok(())
    }

    /// Detaches the controller from its container, returning the container.
    ///
    /// Queued navigation and pending intents are dropped. Afterwards scroll
    /// events are ignored and navigation fails with [`SnapError::Detached`].
    pub fn detach(&mut self) -> Option<M::Container> {
        self.deferred = None;
        self.intents.clear();
        match core::mem::replace(&mut self.state, State::Detached) {
            State::Active { container, .. } => {
                log::debug!("scroll snap detached at index {}", self.current_index);
                Some(container)
            }
            _ => None,
        }
    }

    /// Handles a scroll event on the container.
    ///
    /// Finds the first child fully contained in the container's visible
    /// region. If it differs from the current index, the current index is
    /// updated, the layout change handler runs, and the dispatched event is
    /// returned. While a navigation is in flight, positions are treated as
    /// transient and ignored until its destination is fully contained.
    ///
    /// At most one event is produced per call. Nothing happens while the
    /// controller is not active.
    pub fn handle_scroll(&mut self) -> Option<LayoutChangeEvent<ChildOf<M>>> {
        let State::Active { container, .. } = &self.state else {
            log::trace!("scroll event ignored: controller not active");
            return None;
        };
        let observed = contained_index(container)?;
        let viewport = container.bounds();
        let arrived = |target: usize| {
            container
                .child_bounds(target)
                .is_some_and(|rect| contains(viewport, rect))
        };
        if !self.intents.accept(arrived) {
            log::trace!("transient snap position {observed} ignored");
            return None;
        }
        self.commit(observed)
    }

    /// Reconciles state after scrolling has come to rest.
    ///
    /// Drops any pending navigation intent and re-runs the containment check,
    /// so the current index reflects where scrolling actually stopped even if
    /// the intended destination was never reached (for example when the user
    /// interrupted the animation).
    pub fn settle(&mut self) -> Option<LayoutChangeEvent<ChildOf<M>>> {
        if let Some(intent) = self.intents.clear() {
            log::debug!("scroll settled with intent {} (-> {}) unresolved", intent.id, intent.target);
        }
        let State::Active { container, .. } = &self.state else {
            return None;
        };
        let observed = contained_index(container)?;
        self.commit(observed)
    }

    /// Smoothly scrolls to the child at `index`, clamped into range.
    ///
    /// The distance is the sum of the extents of the children passed over,
    /// measured along the snap axis from the current index. While a navigation
    /// is still in flight the container is part way through an animation, so
    /// the distance is instead measured from the live position to the leading
    /// edge of the destination. Requesting the destination already in flight
    /// issues no scroll.
    ///
    /// # Errors
    ///
    /// [`SnapError::Detached`] if the controller was detached.
    pub fn change_layout_by_index(&mut self, index: isize) -> Result<Navigation> {
        let pending = self.intents.pending();
        let (container, axis) = match &mut self.state {
            State::Active { container, axis } => (container, *axis),
            State::Uninitialized => {
                log::debug!("navigation to {index} queued until activation");
                self.deferred = Some(DeferredNavigation::To(index));
                return Ok(Navigation::Deferred);
            }
            State::Detached => return Err(SnapError::Detached),
        };

        let len = container.child_count();
        let Some(target) = clamp_index(index, len) else {
            return Ok(Navigation::Unchanged {
                index: self.current_index,
            });
        };
        let distance = match pending {
            Some(intent) if intent.target == target => 0.0,
            Some(_) => live_distance(container, axis, target),
            None => {
                let from = self.current_index.min(len - 1);
                travel_distance(|idx| child_extent(container, axis, idx), from, target)
            }
        };
        if distance == 0.0 {
            return Ok(Navigation::Unchanged { index: target });
        }

        let delta = axis.offset(distance);
        container.scroll_by(delta, ScrollBehavior::Smooth);
        let intent = self.intents.begin(target);
        log::debug!(
            "navigating {} -> {target} by {distance} (intent {})",
            self.current_index,
            intent.id
        );
        Ok(Navigation::Scrolled { target, delta })
    }

    /// Navigates to the previous child; does nothing at the first child.
    ///
    /// # Errors
    ///
    /// [`SnapError::Detached`] if the controller was detached.
    pub fn previous_layout(&mut self) -> Result<Navigation> {
        self.step_layout(-1)
    }

    /// Navigates to the next child; does nothing at the last child.
    ///
    /// # Errors
    ///
    /// [`SnapError::Detached`] if the controller was detached.
    pub fn next_layout(&mut self) -> Result<Navigation> {
        self.step_layout(1)
    }

    fn step_layout(&mut self, step: isize) -> Result<Navigation> {
        if matches!(self.state, State::Uninitialized) {
            log::debug!("navigation by {step} queued until activation");
            self.deferred = Some(DeferredNavigation::By(step));
            return Ok(Navigation::Deferred);
        }
        let base = isize::try_from(self.navigation_base()).unwrap_or(isize::MAX);
        self.change_layout_by_index(base.saturating_add(step))
    }

    fn navigation_base(&self) -> usize {
        self.intents
            .pending()
            .map_or(self.current_index, |intent| intent.target)
    }

    fn commit(&mut self, index: usize) -> Option<LayoutChangeEvent<ChildOf<M>>> {
        if index == self.current_index {
            return None;
        }
        let State::Active { container, .. } = &self.state else {
            return None;
        };
        let target = container.child(index)?;
        log::debug!("layout change {} -> {index}", self.current_index);
        self.current_index = index;

        let mut event = LayoutChangeEvent::new(index, target);
        if let Some(handler) = self.on_layout_change.as_mut() {
            handler(&mut event);
        }
        Some(event)
    }
}

fn initial_index(init_slide: i64, len: usize) -> Result<usize> {
    // An empty container has nothing to snap to; the default index is accepted.
    if len == 0 && init_slide == 0 {
        return Ok(0);
    }
    usize::try_from(init_slide)
        .ok()
        .filter(|&idx| idx < len)
        .ok_or(SnapError::InitialIndexOutOfRange {
            index: init_slide,
            len,
        })
}

fn child_extent<C: SnapContainer>(container: &C, axis: SnapAxis, index: usize) -> f64 {
    container
        .child_bounds(index)
        .map_or(0.0, |rect| axis.extent(rect))
}

// Distance from the viewport's leading edge to the child's, at the live position.
fn live_distance<C: SnapContainer>(container: &C, axis: SnapAxis, index: usize) -> f64 {
    container.child_bounds(index).map_or(0.0, |rect| {
        axis.leading(rect) - axis.leading(container.bounds())
    })
}

fn contained_index<C: SnapContainer>(container: &C) -> Option<usize> {
    let viewport = container.bounds();
    let children = (0..container.child_count()).map_while(|idx| container.child_bounds(idx));
    first_contained(viewport, children)
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::{Rect, Vec2};

    use super::{Lifecycle, Navigation, ScrollSnap};
    use crate::{ScrollBehavior, SnapAxis, SnapConfig, SnapContainer, SnapError, SnapMount};

    #[derive(Debug)]
    struct StripState {
        viewport: Rect,
        // Child rects at scroll offset zero.
        children: Vec<Rect>,
        scroll: Vec2,
        snap_type: Option<String>,
        requests: Vec<(Vec2, ScrollBehavior)>,
        // Largest reachable scroll position, if the range is clamped.
        limit: Option<Vec2>,
    }

    /// In-memory scroll container; scroll requests land immediately.
    #[derive(Clone, Debug)]
    struct FakeStrip(Rc<RefCell<StripState>>);

    impl FakeStrip {
        fn horizontal(widths: &[f64], viewport_width: f64) -> Self {
            let mut x = 0.0;
            let children = widths
                .iter()
                .map(|w| {
                    let r = Rect::new(x, 0.0, x + w, 100.0);
                    x += w;
                    r
                })
                .collect();
            Self::new(
                Rect::new(0.0, 0.0, viewport_width, 100.0),
                children,
                Some("x mandatory"),
            )
        }

        fn vertical(heights: &[f64], viewport_height: f64) -> Self {
            let mut y = 0.0;
            let children = heights
                .iter()
                .map(|h| {
                    let r = Rect::new(0.0, y, 100.0, y + h);
                    y += h;
                    r
                })
                .collect();
            Self::new(
                Rect::new(0.0, 0.0, 100.0, viewport_height),
                children,
                Some("y mandatory"),
            )
        }

        fn new(viewport: Rect, children: Vec<Rect>, snap_type: Option<&str>) -> Self {
            Self(Rc::new(RefCell::new(StripState {
                viewport,
                children,
                scroll: Vec2::ZERO,
                snap_type: snap_type.map(ToString::to_string),
                requests: Vec::new(),
                limit: None,
            })))
        }

        fn with_scroll_limit(self, limit: Vec2) -> Self {
            self.0.borrow_mut().limit = Some(limit);
            self
        }

        fn scroll_to(&self, x: f64, y: f64) {
            self.0.borrow_mut().scroll = Vec2::new(x, y);
        }

        fn scroll(&self) -> Vec2 {
            self.0.borrow().scroll
        }

        fn requests(&self) -> Vec<(Vec2, ScrollBehavior)> {
            self.0.borrow().requests.clone()
        }
    }

    impl SnapContainer for FakeStrip {
        type Child = &'static str;

        fn bounds(&self) -> Rect {
            self.0.borrow().viewport
        }

        fn child_count(&self) -> usize {
            self.0.borrow().children.len()
        }

        fn child(&self, index: usize) -> Option<Self::Child> {
            const NAMES: [&str; 5] = ["a", "b", "c", "d", "e"];
            (index < self.child_count()).then(|| NAMES[index])
        }

        fn child_bounds(&self, index: usize) -> Option<Rect> {
            let state = self.0.borrow();
            state.children.get(index).map(|r| *r - state.scroll)
        }

        fn snap_type(&self) -> Option<String> {
            self.0.borrow().snap_type.clone()
        }

        fn scroll_by(&mut self, delta: Vec2, behavior: ScrollBehavior) {
            let mut state = self.0.borrow_mut();
            state.requests.push((delta, behavior));
            let mut scroll = state.scroll + delta;
            if let Some(limit) = state.limit {
                scroll = Vec2::new(scroll.x.clamp(0.0, limit.x), scroll.y.clamp(0.0, limit.y));
            }
            state.scroll = scroll;
        }
    }

    #[derive(Debug)]
    struct FakeMount(Option<FakeStrip>);

    impl SnapMount for FakeMount {
        type Container = FakeStrip;

        fn scroll_container(&self) -> Option<FakeStrip> {
            self.0.clone()
        }
    }

    fn attached(strip: &FakeStrip, init_slide: i64) -> ScrollSnap<FakeMount> {
        let mut snap = ScrollSnap::new(
            FakeMount(Some(strip.clone())),
            SnapConfig::with_init_slide(init_slide),
        );
        snap.attach().unwrap();
        snap
    }

    #[test]
    fn next_layout_scrolls_one_child_and_reports_change() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 0);
        assert_eq!(snap.direction(), Some(SnapAxis::Horizontal));
        assert_eq!(snap.current_index(), 0);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        snap.on_layout_change(move |ev| sink.borrow_mut().push((ev.index(), *ev.target())));

        let nav = snap.next_layout().unwrap();
        assert_eq!(
            nav,
            Navigation::Scrolled {
                target: 1,
                delta: Vec2::new(100.0, 0.0),
            }
        );
        assert_eq!(
            strip.requests(),
            vec![(Vec2::new(100.0, 0.0), ScrollBehavior::Smooth)]
        );

        let ev = snap.handle_scroll().unwrap();
        assert_eq!(ev.index(), 1);
        assert_eq!(*ev.target(), "b");
        assert_eq!(snap.current_index(), 1);
        assert_eq!(*seen.borrow(), vec![(1, "b")]);
        assert_eq!(snap.pending_intent(), None);

        // Repeated scroll events at the same position fire nothing.
        assert!(snap.handle_scroll().is_none());
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn initial_slide_is_applied_without_animation() {
        let strip = FakeStrip::horizontal(&[100.0, 120.0, 80.0], 120.0);
        let snap = attached(&strip, 2);
        assert!(snap.is_active());
        assert_eq!(snap.current_index(), 2);
        assert_eq!(
            strip.requests(),
            vec![(Vec2::new(220.0, 0.0), ScrollBehavior::Instant)]
        );
        assert_eq!(strip.scroll(), Vec2::new(220.0, 0.0));
    }

    #[test]
    fn initial_slide_zero_issues_no_scroll() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0], 100.0);
        let _snap = attached(&strip, 0);
        assert!(strip.requests().is_empty());
    }

    #[test]
    fn missing_container_fails_before_activation() {
        let mut snap = ScrollSnap::new(FakeMount(None), SnapConfig::default());
        assert_eq!(snap.attach(), Err(SnapError::MissingScrollContainer));
        assert_eq!(snap.lifecycle(), Lifecycle::Uninitialized);
        assert!(snap.container().is_none());
    }

    #[test]
    fn out_of_range_initial_slide_fails() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = ScrollSnap::new(
            FakeMount(Some(strip.clone())),
            SnapConfig::with_init_slide(5),
        );
        assert_eq!(
            snap.attach(),
            Err(SnapError::InitialIndexOutOfRange { index: 5, len: 3 })
        );
        assert!(!snap.is_active());
        assert!(strip.requests().is_empty());

        let mut snap = ScrollSnap::new(
            FakeMount(Some(strip.clone())),
            SnapConfig::with_init_slide(-1),
        );
        assert!(matches!(
            snap.attach(),
            Err(SnapError::InitialIndexOutOfRange { index: -1, .. })
        ));
    }

    #[test]
    fn empty_container_accepts_default_slide() {
        let strip = FakeStrip::horizontal(&[], 100.0);
        let mut snap = attached(&strip, 0);
        assert_eq!(snap.child_count(), Some(0));
        assert_eq!(
            snap.next_layout().unwrap(),
            Navigation::Unchanged { index: 0 }
        );
        assert!(snap.handle_scroll().is_none());
        assert!(strip.requests().is_empty());
    }

    #[test]
    fn unrecognized_snap_type_defaults_to_horizontal() {
        let strip = FakeStrip::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            vec![Rect::new(0.0, 0.0, 100.0, 100.0)],
            Some("none"),
        );
        let snap = attached(&strip, 0);
        assert_eq!(snap.direction(), Some(SnapAxis::Horizontal));
    }

    #[test]
    fn vertical_axis_scrolls_by_heights() {
        let strip = FakeStrip::vertical(&[50.0, 70.0, 90.0], 90.0);
        let mut snap = attached(&strip, 0);
        assert_eq!(snap.direction(), Some(SnapAxis::Vertical));
        let nav = snap.change_layout_by_index(2).unwrap();
        assert_eq!(
            nav,
            Navigation::Scrolled {
                target: 2,
                delta: Vec2::new(0.0, 120.0),
            }
        );
        assert_eq!(snap.handle_scroll().map(|ev| ev.index()), Some(2));
    }

    #[test]
    fn same_index_is_idempotent() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 1);
        let before = strip.requests().len();
        assert_eq!(
            snap.change_layout_by_index(1).unwrap(),
            Navigation::Unchanged { index: 1 }
        );
        assert_eq!(strip.requests().len(), before);
        assert_eq!(snap.pending_intent(), None);
    }

    #[test]
    fn out_of_range_targets_are_clamped() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 1);
        let low = snap.change_layout_by_index(-1).unwrap();
        assert_eq!(
            low,
            Navigation::Scrolled {
                target: 0,
                delta: Vec2::new(-100.0, 0.0),
            }
        );
        snap.handle_scroll();
        assert_eq!(snap.current_index(), 0);
        assert_eq!(
            snap.change_layout_by_index(0).unwrap(),
            Navigation::Unchanged { index: 0 }
        );

        let high = snap.change_layout_by_index(3).unwrap();
        assert_eq!(
            high,
            Navigation::Scrolled {
                target: 2,
                delta: Vec2::new(200.0, 0.0),
            }
        );
        snap.handle_scroll();
        assert_eq!(snap.current_index(), 2);
        assert_eq!(
            snap.change_layout_by_index(2).unwrap(),
            Navigation::Unchanged { index: 2 }
        );
    }

    #[test]
    fn previous_and_next_stop_at_the_edges() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 0);
        assert_eq!(
            snap.previous_layout().unwrap(),
            Navigation::Unchanged { index: 0 }
        );
        snap.next_layout().unwrap();
        snap.handle_scroll();
        assert_eq!(snap.current_index(), 1);
        assert_eq!(
            snap.next_layout().unwrap(),
            Navigation::Unchanged { index: 1 }
        );
        assert_eq!(strip.requests().len(), 1);
    }

    #[test]
    fn no_contained_child_keeps_state() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 0);
        // Straddling children 0 and 1.
        strip.scroll_to(50.0, 0.0);
        assert!(snap.handle_scroll().is_none());
        assert_eq!(snap.current_index(), 0);
    }

    #[test]
    fn lowest_contained_index_wins() {
        // Small children: several fit in the viewport at once.
        let strip = FakeStrip::horizontal(&[40.0, 40.0, 40.0, 40.0], 100.0);
        let mut snap = attached(&strip, 0);
        strip.scroll_to(40.0, 0.0);
        assert_eq!(snap.handle_scroll().map(|ev| ev.index()), Some(1));
    }

    #[test]
    fn user_scrolling_reports_changes() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 0);
        strip.scroll_to(200.0, 0.0);
        assert_eq!(snap.handle_scroll().map(|ev| ev.index()), Some(2));
        strip.scroll_to(100.0, 0.0);
        assert_eq!(snap.handle_scroll().map(|ev| ev.index()), Some(1));
    }

    #[test]
    fn prevent_default_does_not_roll_back_index() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 0);
        snap.on_layout_change(|ev| ev.prevent_default());
        strip.scroll_to(100.0, 0.0);
        let ev = snap.handle_scroll().unwrap();
        assert!(ev.default_prevented());
        assert_eq!(snap.current_index(), 1);
    }

    #[test]
    fn transient_children_are_ignored_during_navigation() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 0);
        snap.change_layout_by_index(3).unwrap();
        // Replay the animation frame by frame.
        strip.scroll_to(100.0, 0.0);
        assert!(snap.handle_scroll().is_none());
        strip.scroll_to(200.0, 0.0);
        assert!(snap.handle_scroll().is_none());
        assert_eq!(snap.current_index(), 0);
        strip.scroll_to(300.0, 0.0);
        assert_eq!(snap.handle_scroll().map(|ev| ev.index()), Some(3));
        assert_eq!(snap.pending_intent(), None);
    }

    #[test]
    fn navigation_mid_flight_is_measured_from_the_destination() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 0);
        snap.next_layout().unwrap();
        // Second request before any scroll event: heads to 2, not back to 1.
        let nav = snap.next_layout().unwrap();
        assert_eq!(
            nav,
            Navigation::Scrolled {
                target: 2,
                delta: Vec2::new(100.0, 0.0),
            }
        );
        assert_eq!(snap.pending_intent().map(|i| i.target), Some(2));
        assert_eq!(snap.handle_scroll().map(|ev| ev.index()), Some(2));
    }

    #[test]
    fn mid_flight_navigation_scrolls_from_the_live_position() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 0);
        snap.next_layout().unwrap();
        // The animation towards child 1 is half way there.
        strip.scroll_to(50.0, 0.0);
        let nav = snap.next_layout().unwrap();
        assert_eq!(
            nav,
            Navigation::Scrolled {
                target: 2,
                delta: Vec2::new(150.0, 0.0),
            }
        );
        assert_eq!(strip.scroll(), Vec2::new(200.0, 0.0));

        // Already heading there.
        strip.scroll_to(120.0, 0.0);
        assert_eq!(
            snap.change_layout_by_index(2).unwrap(),
            Navigation::Unchanged { index: 2 }
        );
        assert_eq!(strip.requests().len(), 2);

        // Turning back mid-flight aims at the child's leading edge.
        let nav = snap.change_layout_by_index(0).unwrap();
        assert_eq!(
            nav,
            Navigation::Scrolled {
                target: 0,
                delta: Vec2::new(-120.0, 0.0),
            }
        );
        assert!(snap.handle_scroll().is_none());
        assert_eq!(snap.current_index(), 0);
        assert_eq!(snap.pending_intent(), None);
    }

    #[test]
    fn intent_resolves_when_target_shares_the_viewport() {
        // Four narrow children; the scroll range ends at 60, so the last child
        // can never be the first one contained.
        let strip = FakeStrip::horizontal(&[40.0, 40.0, 40.0, 40.0], 100.0)
            .with_scroll_limit(Vec2::new(60.0, 0.0));
        let mut snap = attached(&strip, 0);
        snap.change_layout_by_index(3).unwrap();
        assert_eq!(strip.scroll(), Vec2::new(60.0, 0.0));

        // Children 2 and 3 are both contained; the lower one is reported.
        assert_eq!(snap.handle_scroll().map(|ev| ev.index()), Some(2));
        assert_eq!(snap.pending_intent(), None);

        // Later user scrolling is observed without waiting for a settle.
        strip.scroll_to(40.0, 0.0);
        assert_eq!(snap.handle_scroll().map(|ev| ev.index()), Some(1));
        assert_eq!(snap.current_index(), 1);
    }

    #[test]
    fn settle_reconciles_an_interrupted_navigation() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 0);
        snap.change_layout_by_index(3).unwrap();
        // The user grabbed the strip and it came to rest on child 1.
        strip.scroll_to(100.0, 0.0);
        assert!(snap.handle_scroll().is_none());
        let ev = snap.settle().unwrap();
        assert_eq!(ev.index(), 1);
        assert_eq!(snap.current_index(), 1);
        assert_eq!(snap.pending_intent(), None);
        assert!(snap.settle().is_none());
    }

    #[test]
    fn navigation_before_attach_is_replayed() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = ScrollSnap::new(
            FakeMount(Some(strip.clone())),
            SnapConfig::with_init_slide(1),
        );
        assert_eq!(snap.next_layout().unwrap(), Navigation::Deferred);
        assert!(snap.handle_scroll().is_none());
        assert!(strip.requests().is_empty());

        snap.attach().unwrap();
        // Initial jump, then the queued step relative to the initial slide.
        assert_eq!(
            strip.requests(),
            vec![
                (Vec2::new(100.0, 0.0), ScrollBehavior::Instant),
                (Vec2::new(100.0, 0.0), ScrollBehavior::Smooth),
            ]
        );
        assert_eq!(snap.pending_intent().map(|i| i.target), Some(2));
    }

    #[test]
    fn latest_deferred_request_wins() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = ScrollSnap::new(FakeMount(Some(strip.clone())), SnapConfig::default());
        snap.change_layout_by_index(2).unwrap();
        snap.change_layout_by_index(1).unwrap();
        snap.attach().unwrap();
        assert_eq!(
            strip.requests(),
            vec![(Vec2::new(100.0, 0.0), ScrollBehavior::Smooth)]
        );
    }

    #[test]
    fn attach_is_one_shot() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 2);
        snap.attach().unwrap();
        assert_eq!(strip.requests().len(), 1);
    }

    #[test]
    fn detach_makes_the_controller_inert() {
        let strip = FakeStrip::horizontal(&[100.0, 100.0, 100.0], 100.0);
        let mut snap = attached(&strip, 0);
        snap.next_layout().unwrap();
        assert!(snap.detach().is_some());
        assert_eq!(snap.lifecycle(), Lifecycle::Detached);
        assert_eq!(snap.pending_intent(), None);
        assert!(snap.handle_scroll().is_none());
        assert!(snap.settle().is_none());
        assert_eq!(snap.next_layout(), Err(SnapError::Detached));
        assert_eq!(snap.attach(), Err(SnapError::Detached));
        assert!(snap.detach().is_none());
    }
}
