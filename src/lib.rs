// lib.rs - Root module for the mymart_catalog library
//
// The library holds the product listing page and everything it needs.
// The same crate is compiled twice: natively with `ssr` for the Actix host,
// and to WASM with `hydrate` for the browser.

/// The Leptos application: model, API client, components and pages
pub mod web_app;

/// WASM entry point, called by the script cargo-leptos injects into the shell
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::config::CatalogConfig;
    use crate::web_app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = CatalogConfig::resolve();
    leptos::mount::hydrate_body(move || view! { <App config=config /> });
}
