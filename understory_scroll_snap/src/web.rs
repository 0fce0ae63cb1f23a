// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM adapter: drive a [`ScrollSnap`] from a host element with `web-sys`.
//!
//! [`WebScrollSnap::from_element`] reads the host's `init-slide` and
//! `onlayoutchange` attributes, activates the controller, and then installs a
//! passive `scroll` listener and a `scrollend` listener on the scroll container.
//! Each layout change is re-dispatched on the host element as a
//! `CustomEvent("layoutchange")` whose `detail` is `{ index, target }`; it does
//! not bubble, is composed, and is cancelable.
//!
//! ```html
//! <div id="gallery" init-slide="1" onlayoutchange="event.detail.index === 2">
//!   <div name="scroll-container" style="display: flex; overflow-x: auto; scroll-snap-type: x mandatory">
//!     <img src="a.png"> <img src="b.png"> <img src="c.png">
//!   </div>
//! </div>
//! ```
//!
//! Listeners are removed when the [`WebScrollSnap`] is dropped or detached.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use js_sys::{Function, Object, Reflect};
use kurbo::{Rect, Vec2};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, CustomEvent, CustomEventInit, Element, Event, ScrollToOptions,
};

use crate::{
    INIT_SLIDE_ATTR, LAYOUT_CHANGE, LayoutChangeEvent, Navigation, ON_LAYOUT_CHANGE_ATTR, Result,
    SCROLL_CONTAINER_NAME, ScrollBehavior, ScrollSnap, SnapConfig, SnapContainer, SnapError,
    SnapMount,
};

const SCROLL: &str = "scroll";
const SCROLL_END: &str = "scrollend";

/// A host element whose marked descendant is the scroll container.
#[derive(Clone, Debug)]
pub struct ElementMount {
    host: Element,
}

impl ElementMount {
    /// Wraps a host element.
    #[must_use]
    pub fn new(host: Element) -> Self {
        Self { host }
    }

    /// The host element.
    #[must_use]
    pub fn host(&self) -> &Element {
        &self.host
    }
}

impl SnapMount for ElementMount {
    type Container = ElementContainer;

    fn scroll_container(&self) -> Option<ElementContainer> {
        let selector = format!("[name='{SCROLL_CONTAINER_NAME}']");
        match self.host.query_selector(&selector) {
            Ok(found) => found.map(ElementContainer::new),
            Err(err) => {
                log::warn!("scroll container lookup failed: {err:?}");
                None
            }
        }
    }
}

/// A scrollable DOM element whose element children snap into view.
#[derive(Clone, Debug)]
pub struct ElementContainer {
    element: Element,
}

impl ElementContainer {
    /// Wraps a scrollable element.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// The scrollable element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl SnapContainer for ElementContainer {
    type Child = Element;

    fn bounds(&self) -> Rect {
        client_rect(&self.element)
    }

    fn child_count(&self) -> usize {
        self.element.child_element_count() as usize
    }

    fn child(&self, index: usize) -> Option<Element> {
        let index = u32::try_from(index).ok()?;
        self.element.children().item(index)
    }

    fn child_bounds(&self, index: usize) -> Option<Rect> {
        self.child(index).map(|child| client_rect(&child))
    }

    fn snap_type(&self) -> Option<String> {
        let window = web_sys::window()?;
        let style = window.get_computed_style(&self.element).ok().flatten()?;
        style.get_property_value("scroll-snap-type").ok()
    }

    fn scroll_by(&mut self, delta: Vec2, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_left(delta.x);
        options.set_top(delta.y);
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        self.element.scroll_by_with_scroll_to_options(&options);
    }
}

fn client_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::from_origin_size((r.x(), r.y()), (r.width(), r.height()))
}

type Shared = Rc<RefCell<ScrollSnap<ElementMount>>>;

struct Listeners {
    container: Element,
    scroll: Closure<dyn FnMut(Event)>,
    scroll_end: Closure<dyn FnMut(Event)>,
    layout_change: Closure<dyn FnMut(Event)>,
}

/// A [`ScrollSnap`] wired to a DOM element.
pub struct WebScrollSnap {
    host: Element,
    snap: Shared,
    handler: Rc<RefCell<Option<Function>>>,
    listeners: Option<Listeners>,
}

impl core::fmt::Debug for WebScrollSnap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebScrollSnap")
            .field("snap", &self.snap)
            .field("listening", &self.listeners.is_some())
            .finish_non_exhaustive()
    }
}

impl WebScrollSnap {
    /// Mounts on `host`, configured from its attributes.
    ///
    /// `init-slide` sets the initial index; a non-empty `onlayoutchange` is
    /// compiled with [`WebScrollSnap::set_on_layout_change_expression`].
    ///
    /// # Errors
    ///
    /// Everything [`WebScrollSnap::mount`] reports, plus
    /// [`SnapError::InvalidAttribute`] for a malformed `init-slide`.
    pub fn from_element(host: Element) -> Result<Self> {
        let init_slide = host.get_attribute(INIT_SLIDE_ATTR);
        let config = SnapConfig::from_attributes(
            init_slide
                .as_deref()
                .map(|value| (INIT_SLIDE_ATTR, value)),
        )?;
        let expression = host.get_attribute(ON_LAYOUT_CHANGE_ATTR);
        let mut web = Self::mount(host, config)?;
        if let Some(expression) = expression.filter(|e| !e.trim().is_empty()) {
            web.set_on_layout_change_expression(&expression);
        }
        Ok(web)
    }

    /// Mounts on `host` with an explicit configuration.
    ///
    /// Activation happens before any listener is installed, so a failure
    /// leaves the document untouched.
    ///
    /// # Errors
    ///
    /// [`SnapError::MissingScrollContainer`] or
    /// [`SnapError::InitialIndexOutOfRange`] from [`ScrollSnap::attach`].
    pub fn mount(host: Element, config: SnapConfig) -> Result<Self> {
        let snap: Shared = Rc::new(RefCell::new(ScrollSnap::new(
            ElementMount::new(host.clone()),
            config,
        )));

        let target = host.clone();
        snap.borrow_mut()
            .on_layout_change(move |event| dispatch_layout_change(&target, event));
        snap.borrow_mut().attach()?;

        let mut web = Self {
            host,
            snap,
            handler: Rc::new(RefCell::new(None)),
            listeners: None,
        };
        web.listen();
        Ok(web)
    }

    fn listen(&mut self) {
        let Some(container) = self
            .snap
            .borrow()
            .container()
            .map(|c| c.element().clone())
        else {
            return;
        };

        let snap = Rc::clone(&self.snap);
        let scroll = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            match snap.try_borrow_mut() {
                Ok(mut snap) => {
                    snap.handle_scroll();
                }
                Err(_) => log::trace!("scroll event dropped: controller busy"),
            }
        });
        let snap = Rc::clone(&self.snap);
        let scroll_end = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            match snap.try_borrow_mut() {
                Ok(mut snap) => {
                    snap.settle();
                }
                Err(_) => log::trace!("scrollend dropped: controller busy"),
            }
        });
        let handler = Rc::clone(&self.handler);
        let layout_change = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(f) = handler.borrow().as_ref()
                && let Err(err) = f.call1(&JsValue::NULL, &event)
            {
                log::warn!("layoutchange handler threw: {err:?}");
            }
        });

        let passive = AddEventListenerOptions::new();
        passive.set_passive(true);
        let installed = [
            container.add_event_listener_with_callback_and_add_event_listener_options(
                SCROLL,
                scroll.as_ref().unchecked_ref(),
                &passive,
            ),
            container.add_event_listener_with_callback_and_add_event_listener_options(
                SCROLL_END,
                scroll_end.as_ref().unchecked_ref(),
                &passive,
            ),
            self.host.add_event_listener_with_callback(
                LAYOUT_CHANGE,
                layout_change.as_ref().unchecked_ref(),
            ),
        ];
        for result in installed {
            if let Err(err) = result {
                log::warn!("failed to install listener: {err:?}");
            }
        }

        self.listeners = Some(Listeners {
            container,
            scroll,
            scroll_end,
            layout_change,
        });
    }

    fn unlisten(&mut self) {
        let Some(listeners) = self.listeners.take() else {
            return;
        };
        let removed = [
            listeners.container.remove_event_listener_with_callback(
                SCROLL,
                listeners.scroll.as_ref().unchecked_ref(),
            ),
            listeners.container.remove_event_listener_with_callback(
                SCROLL_END,
                listeners.scroll_end.as_ref().unchecked_ref(),
            ),
            self.host.remove_event_listener_with_callback(
                LAYOUT_CHANGE,
                listeners.layout_change.as_ref().unchecked_ref(),
            ),
        ];
        for result in removed {
            if let Err(err) = result {
                log::warn!("failed to remove listener: {err:?}");
            }
        }
    }

    /// Uses `handler` as the `onlayoutchange` callback. It receives the DOM event.
    pub fn set_on_layout_change_function(&mut self, handler: Option<Function>) {
        *self.handler.borrow_mut() = handler;
    }

    /// Compiles an `onlayoutchange` attribute expression.
    ///
    /// The expression is evaluated with `event` in scope; when it is truthy the
    /// event's default action is prevented.
    pub fn set_on_layout_change_expression(&mut self, expression: &str) {
        let body = format!("({expression})&&event.preventDefault()");
        self.set_on_layout_change_function(Some(Function::new_with_args("event", &body)));
    }

    /// Index of the currently snapped child.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.snap.borrow().current_index()
    }

    /// See [`ScrollSnap::change_layout_by_index`].
    ///
    /// # Errors
    ///
    /// [`SnapError::Reentrant`] when called from inside a layout change
    /// dispatch, otherwise as [`ScrollSnap::change_layout_by_index`].
    pub fn change_layout_by_index(&self, index: isize) -> Result<Navigation> {
        self.with_snap(|snap| snap.change_layout_by_index(index))
    }

    /// See [`ScrollSnap::previous_layout`].
    ///
    /// # Errors
    ///
    /// As [`WebScrollSnap::change_layout_by_index`].
    pub fn previous_layout(&self) -> Result<Navigation> {
        self.with_snap(ScrollSnap::previous_layout)
    }

    /// See [`ScrollSnap::next_layout`].
    ///
    /// # Errors
    ///
    /// As [`WebScrollSnap::change_layout_by_index`].
    pub fn next_layout(&self) -> Result<Navigation> {
        self.with_snap(ScrollSnap::next_layout)
    }

    /// Removes all listeners and detaches the controller.
    pub fn detach(&mut self) {
        self.unlisten();
        if let Ok(mut snap) = self.snap.try_borrow_mut() {
            snap.detach();
        }
    }

    fn with_snap(
        &self,
        f: impl FnOnce(&mut ScrollSnap<ElementMount>) -> Result<Navigation>,
    ) -> Result<Navigation> {
        let mut snap = self
            .snap
            .try_borrow_mut()
            .map_err(|_| SnapError::Reentrant)?;
        f(&mut *snap)
    }
}

impl Drop for WebScrollSnap {
    fn drop(&mut self) {
        self.unlisten();
    }
}

fn dispatch_layout_change(host: &Element, event: &mut LayoutChangeEvent<Element>) {
    let detail = Object::new();
    let fields = [
        Reflect::set(&detail, &"index".into(), &JsValue::from(event.index())),
        Reflect::set(&detail, &"target".into(), event.target()),
    ];
    if fields.iter().any(core::result::Result::is_err) {
        log::warn!("failed to build layoutchange detail");
    }

    let flags = event.init();
    let init = CustomEventInit::new();
    init.set_bubbles(flags.bubbles);
    init.set_cancelable(flags.cancelable);
    init.set_composed(flags.composed);
    init.set_detail(&detail);

    let dom_event = match CustomEvent::new_with_event_init_dict(event.name(), &init) {
        Ok(dom_event) => dom_event,
        Err(err) => {
            log::warn!("failed to create layoutchange event: {err:?}");
            return;
        }
    };
    match host.dispatch_event(&dom_event) {
        Ok(true) => {}
        Ok(false) => event.prevent_default(),
        Err(err) => log::warn!("failed to dispatch layoutchange event: {err:?}"),
    }
}
