//! # login-client
//!
//! Leptos + WASM login form client. Collects a username and password,
//! fetches a demo user profile on submit, and renders the loading,
//! success, and error states of that single request.
//!
//! This crate contains the root component, the form component, the
//! plain state model it binds to, and the placeholder-API client.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// Browser entry point — mounts [`app::App`] onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
