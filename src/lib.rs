#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod countdown;
mod dom;
mod events;
mod field;
mod frame;
mod input;
mod loader;
mod page;
mod render;
mod resume;
mod sprite;
mod viewport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neon-resume starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Background first so it animates while the resume is fetched
    match frame::init_field(&window, &document) {
        Ok(Some(_)) => log::info!("[particles] running"),
        Ok(None) => {}
        Err(e) => log::error!("[particles] init error: {:?}", e),
    }

    loader::load_and_populate(&window, &document).await;
    page::init(&window, &document);
    Ok(())
}
