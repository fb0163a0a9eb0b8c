//! # tarsila-client
//!
//! Leptos + WASM landing page for Tarsila, the AI assistant for drafting
//! cultural-project proposals.
//!
//! This crate contains the landing and chat hand-off pages, the pricing and
//! button components, session/loader state, and the capability seams (auth,
//! loader, navigator) that the sign-in flow is written against.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entrypoint: installs the console logger and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("tarsila landing starting");
    leptos::mount::mount_to_body(app::App);
}
