mod api;
mod app;
mod models;
mod state;

use app::App;
use wasm_bindgen::prelude::*;

/// Element the page is mounted into; falls back to `<body>` when absent.
const MOUNT_ID: &str = "app";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Failed to init logger: {}", e).into());
    }

    let mount = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID));

    match mount {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => yew::Renderer::<App>::new().render(),
    };

    log::info!("Blog frontend started");
    Ok(())
}
