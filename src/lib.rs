#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod error;
pub mod logging;
pub mod menu;
pub mod motion;
pub mod scroll;
pub mod seo;
pub mod typing;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    logging::init_client_logging();
    log::info!("hydrating portfolio");
    leptos::mount::hydrate_body(App);
}
