pub mod app;
pub mod common;
#[cfg(feature = "csr")]
pub mod frontend;
pub mod harness;
pub mod models;
pub mod router;
pub mod services;
pub mod types;

/// WASM entry point
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(frontend::App);
}
