#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod camera;
mod cart;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod mesh;
mod overlay;
mod render;
mod viewer;

pub use cart::{add_to_cart, remove_from_cart, show_notification, update_cart_badge};
pub use viewer::stop_viewer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("garden-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;

    // Both widgets wait for the DOM so their elements can be found.
    cart::refresh_badge_when_ready(&document);
    let doc_for_viewer = document.clone();
    dom::on_ready(&document, move || {
        spawn_local(viewer::start(doc_for_viewer));
    });
    Ok(())
}
