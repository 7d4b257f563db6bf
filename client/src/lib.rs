//! # homefix-web
//!
//! Leptos + WASM frontend for the HomeFix home-repair marketplace: the public
//! landing page plus the admin and support portals.
//!
//! This crate contains pages, components, session/auth state, the REST
//! client and its wire types, and the bearer-token helpers. The `hydrate`
//! feature builds the browser bundle; `ssr` is consumed by `homefix-server`.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
