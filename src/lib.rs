//! # portfolio
//!
//! Leptos + WASM single-page portfolio site: four switchable content
//! sections, an animated particle background, and a pointer-tracked glow.
//!
//! This crate contains the application root, section views, presentational
//! components, the shared view state, and the fixed content tables. All
//! state is transient and scoped to the mounted application; there is no
//! server logic, persistence, or network layer.

pub mod app;
pub mod components;
pub mod content;
pub mod sections;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating portfolio app");

    leptos::mount::hydrate_body(App);
}
