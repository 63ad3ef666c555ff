//! # khmer_menu
//!
//! Host-testable model of the restaurant menu section: the static catalog,
//! the category switcher and its entrance choreography, the scroll reveal
//! helper, viewport classification and the background video autoplay guard.
//!
//! Nothing in this crate touches the DOM. Time is passed in as monotonic
//! milliseconds and the browser is reached through small traits
//! ([`reveal::RevealSurface`], [`video::MediaElement`]), so the same logic
//! drives the Leptos front end in `khmer_menu_web` and the unit tests here.
//!
//! ## Quick Start
//!
//! ```
//! use khmer_menu::prelude::*;
//!
//! let mut switcher = CategorySwitcher::new(MenuTiming::default());
//! assert_eq!(switcher.displayed(), Category::Starters);
//!
//! switcher.select(Category::Drinks, 0);
//! switcher.tick(1_000);
//! assert_eq!(switcher.displayed(), Category::Drinks);
//! assert_eq!(switcher.displayed().items()[0].name, "Teuk Ampou");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Categories and their dishes
//! - [`content`]: Section copy, calls to action and video sources
//! - [`switcher`]: Tab switching with fade/swap/stagger timing
//! - [`reveal`]: Scroll-triggered entrance marking
//! - [`viewport`]: Mobile/desktop classification
//! - [`video`]: Background video autoplay controller
//! - [`config`]: Timing and threshold configuration

#[path = "core/catalog.rs"]
pub mod catalog;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/content.rs"]
pub mod content;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/reveal.rs"]
pub mod reveal;

#[path = "core/switcher.rs"]
pub mod switcher;

#[path = "core/time.rs"]
pub mod time;

#[path = "core/video.rs"]
pub mod video;

#[path = "core/viewport.rs"]
pub mod viewport;

pub use error::MenuError;

/// Prelude module for convenient imports.
///
/// ```
/// use khmer_menu::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{Category, MenuItem};
    pub use crate::config::{MenuConfig, MenuTiming};
    pub use crate::error::MenuError;
    pub use crate::reveal::{RevealPass, RevealSurface};
    pub use crate::switcher::{CategorySwitcher, SwitchEvent, TransitionToken};
    pub use crate::time::{Clock, Millis};
    pub use crate::video::{MediaElement, PlayOutcome, PlayTrigger, VideoAutoplay};
    pub use crate::viewport::DeviceClass;
}
