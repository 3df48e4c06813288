//! # medassist-client
//!
//! Leptos + WASM browser client for the MedAssist document-analysis service.
//! The page composes three independent widgets — document upload,
//! retrieval-backed chat, and report generation — against an external HTTP
//! backend. No analysis logic runs locally; the client collects input, issues
//! the request, and renders the response.
//!
//! This crate contains the page shell, widget components, per-widget state
//! machines, and the REST boundary to the backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
