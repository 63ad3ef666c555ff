use std::rc::Rc;

use khmer_menu::reveal::{RevealPass, RevealSurface, ANIMATED_CLASS, PENDING_SELECTOR};
use leptos::ev;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub(super) struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    pub(super) fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl RevealSurface for DomSurface {
    type Element = Element;

    fn pending(&self) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(PENDING_SELECTOR) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .or_else(|| {
                self.document
                    .document_element()
                    .map(|el| el.client_height() as f64)
            })
            .unwrap_or(0.0)
    }

    fn top_of(&self, el: &Element) -> f64 {
        el.get_bounding_client_rect().top()
    }

    fn is_animated(&self, el: &Element) -> bool {
        el.class_list().contains(ANIMATED_CLASS)
    }

    fn mark_animated(&mut self, el: &Element) {
        let _ = el.class_list().add_1(ANIMATED_CLASS);
    }
}

/// A reveal pass bound to the window's `scroll` event.
pub(super) struct ScrollListener {
    pass: Rc<RevealPass<Element>>,
    handle: WindowListenerHandle,
}

impl ScrollListener {
    /// Scans the page; registers a listener only if something is pending.
    pub(super) fn attach(ratio: f64) -> Option<Self> {
        let mut surface = DomSurface::current()?;
        let pass = Rc::new(RevealPass::scan(&mut surface, ratio)?);

        let on_scroll = Rc::clone(&pass);
        let handle = window_event_listener(ev::scroll, move |_| {
            if let Some(mut surface) = DomSurface::current() {
                on_scroll.evaluate(&mut surface);
            }
        });

        Some(Self { pass, handle })
    }

    fn is_exhausted(&self) -> bool {
        DomSurface::current().map_or(true, |surface| self.pass.is_exhausted(&surface))
    }

    pub(super) fn detach(self) {
        self.handle.remove();
    }
}

/// Scroll listeners owned by one menu section.
pub(super) struct RevealRegistry {
    ratio: f64,
    listeners: Vec<ScrollListener>,
}

impl RevealRegistry {
    pub(super) fn new(ratio: f64) -> Self {
        Self {
            ratio,
            listeners: Vec::new(),
        }
    }

    /// Drops listeners with nothing left to reveal, then scans for new elements.
    pub(super) fn rescan(&mut self) {
        let (done, live): (Vec<_>, Vec<_>) = self
            .listeners
            .drain(..)
            .partition(ScrollListener::is_exhausted);
        for listener in done {
            listener.detach();
        }
        self.listeners = live;

        if let Some(listener) = ScrollListener::attach(self.ratio) {
            self.listeners.push(listener);
        }
        debug!("scroll reveal listeners: {}", self.listeners.len());
    }

    pub(super) fn detach_all(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
    }
}
