//! # members-portal
//!
//! Leptos + WASM front end for the member authentication portal.
//! Replaces the old jQuery page scripts with a single authoritative
//! Rust-native UI layer: login (credentials + social redirect), member
//! info display/edit, account deletion, logout, and a generic error page.
//!
//! The crate is organised around the post-login token handoff: a JWT
//! arriving as a URL parameter is persisted to the cookie store (or
//! forwarded to the opener/parent context) and then stripped from the
//! visible URL. See [`util::handoff`] for the resolver.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging/panic hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Page failed to load. Please refresh (F5).");
        }
    }));
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(crate::app::App);
}
