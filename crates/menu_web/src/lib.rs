//! The Khmer restaurant menu section rendered with Leptos.
//!
//! Class names, row keys and stagger styles live in [`ui_model`] and are plain
//! functions of the `khmer_menu` state, so they test on the host. The
//! components, timers and DOM listeners are only compiled for `wasm32` with the
//! `web` feature; `trunk serve --features web` builds the page.

pub mod ui_model;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
