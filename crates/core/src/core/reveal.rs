//! Scroll-triggered entrance marking.
//!
//! Elements tagged [`ANIMATE_CLASS`] start pending and become [`ANIMATED_CLASS`]
//! once their top edge rises above a fraction of the viewport height. The
//! transition is one-way.
//!
//! A [`RevealPass`] captures its candidates when it is created. Elements added
//! to the page afterwards are only picked up by a later pass.

use tracing::debug;

pub const ANIMATE_CLASS: &str = "animate-on-scroll";
pub const ANIMATED_CLASS: &str = "animated";

/// Selector for elements still waiting to be revealed.
pub const PENDING_SELECTOR: &str = ".animate-on-scroll:not(.animated)";

/// Whether an element whose top edge sits at `top` should be revealed.
pub fn is_triggered(top: f64, viewport_height: f64, ratio: f64) -> bool {
    top < viewport_height * ratio
}

/// The page as seen by the reveal helper.
pub trait RevealSurface {
    type Element: Clone;

    /// Animatable elements not yet marked, in document order.
    fn pending(&self) -> Vec<Self::Element>;

    fn viewport_height(&self) -> f64;

    /// Top edge of `el` relative to the viewport.
    fn top_of(&self, el: &Self::Element) -> f64;

    fn is_animated(&self, el: &Self::Element) -> bool;

    /// Marks `el` animated. Must be idempotent.
    fn mark_animated(&mut self, el: &Self::Element);
}

#[derive(Debug, Clone)]
pub struct RevealPass<E> {
    candidates: Vec<E>,
    ratio: f64,
}

impl<E: Clone> RevealPass<E> {
    /// Captures the pending elements and reveals those already in range.
    ///
    /// Returns `None` when nothing is pending; the caller then has nothing to
    /// listen for.
    pub fn scan<S>(surface: &mut S, ratio: f64) -> Option<Self>
    where
        S: RevealSurface<Element = E>,
    {
        let candidates = surface.pending();
        if candidates.is_empty() {
            debug!("reveal scan: nothing pending");
            return None;
        }

        let pass = Self { candidates, ratio };
        let marked = pass.evaluate(surface);
        debug!(
            "reveal scan: {} candidates, {} revealed immediately",
            pass.candidates.len(),
            marked
        );
        Some(pass)
    }

    /// Re-checks the captured candidates, typically on scroll. Returns how many
    /// were newly revealed.
    pub fn evaluate<S>(&self, surface: &mut S) -> usize
    where
        S: RevealSurface<Element = E>,
    {
        let threshold_height = surface.viewport_height();
        let mut marked = 0;
        for el in &self.candidates {
            if surface.is_animated(el) {
                continue;
            }
            if is_triggered(surface.top_of(el), threshold_height, self.ratio) {
                surface.mark_animated(el);
                marked += 1;
            }
        }
        marked
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Every captured candidate has been revealed.
    pub fn is_exhausted<S>(&self, surface: &S) -> bool
    where
        S: RevealSurface<Element = E>,
    {
        self.candidates.iter().all(|el| surface.is_animated(el))
    }
}
