//! Syntax Checker Web Frontend
//!
//! Leptos-based WASM frontend. Renders [`checker_core::ViewState`] and wires
//! the page's form and buttons to the workflow handlers.

mod app;
mod components;
mod host;
mod logging;
mod pages;
mod settings;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(App);
}
