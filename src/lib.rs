#![cfg(target_arch = "wasm32")]
use site_core::SiteConfig;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod media;
mod parallax;

/// Wire every page behavior. Each one checks for its own elements and is
/// skipped when they are missing.
fn wire_behaviors(window: &web::Window, document: &web::Document, config: &SiteConfig) {
    events::wire_mobile_nav(document, config);
    events::wire_navbar_scroll(window, document, config);
    events::wire_smooth_scroll(window, document, config);
    parallax::wire_parallax(window, document, config);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = SiteConfig::default();

    let doc_ready = document.clone();
    dom::on_ready(&document, move || {
        wire_behaviors(&window, &doc_ready, &config);
    });
    Ok(())
}
