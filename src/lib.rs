//! # ainote-client
//!
//! Leptos + WASM frontend for the AI Note application: account registration
//! and login, free-text notes with AI-generated commentary, and a paginated,
//! infinitely scrolling note history.
//!
//! This crate contains pages, components, application state, the REST client,
//! and the session/route-guard logic. There is no backend here; every view
//! talks to the note API over same-origin HTTP, and session proof is an
//! opaque server-managed credential (cookie) the client never inspects.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
