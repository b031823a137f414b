pub mod flow;
pub mod http;
pub mod protocol;

use crate::constants::{CART_BADGE_ID, CART_ENDPOINT, CART_ENDPOINT_ATTR};
use crate::{dom, overlay};
use flow::{CartView, Severity};
use http::FetchTransport;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone, Debug)]
pub struct CartConfig {
    pub endpoint: String,
    pub badge_id: &'static str,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            endpoint: CART_ENDPOINT.to_string(),
            badge_id: CART_BADGE_ID,
        }
    }
}

impl CartConfig {
    /// Defaults, with the endpoint taken from the badge's
    /// `data-cart-endpoint` attribute when present.
    pub fn from_document(document: &web::Document) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = document
            .get_element_by_id(config.badge_id)
            .and_then(|el| el.get_attribute(CART_ENDPOINT_ATTR))
            .filter(|s| !s.trim().is_empty())
        {
            config.endpoint = endpoint;
        }
        config
    }
}

struct DomView {
    document: web::Document,
    badge_id: &'static str,
}

impl CartView for DomView {
    fn set_badge_count(&self, count: u64) {
        if let Some(badge) = self.document.get_element_by_id(self.badge_id) {
            badge.set_text_content(Some(&count.to_string()));
        }
    }

    fn notify(&self, message: &str, severity: Severity) {
        overlay::notify(&self.document, message, severity);
    }
}

fn client() -> Option<(FetchTransport, DomView)> {
    let document = dom::window_document()?;
    let config = CartConfig::from_document(&document);
    Some((
        FetchTransport::new(config.endpoint),
        DomView {
            document,
            badge_id: config.badge_id,
        },
    ))
}

// `parseInt(String(value))` input: numbers are stringified first.
fn product_id_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .unwrap_or_default()
}

pub fn refresh_badge_when_ready(document: &web::Document) {
    dom::on_ready(document, update_cart_badge);
}

#[wasm_bindgen(js_name = updateCartBadge)]
pub fn update_cart_badge() {
    spawn_local(async {
        if let Some((transport, view)) = client() {
            _ = flow::refresh_badge(&transport, &view).await;
        }
    });
}

/// Resolves to `true` once the server confirmed the item; never rejects.
#[wasm_bindgen(js_name = addToCart)]
pub async fn add_to_cart(product_id: JsValue) -> bool {
    let Some((transport, view)) = client() else {
        return false;
    };
    flow::add_item(&transport, &view, &product_id_text(&product_id))
        .await
        .is_ok()
}

#[wasm_bindgen(js_name = removeFromCart)]
pub async fn remove_from_cart(product_id: JsValue) -> bool {
    let Some((transport, view)) = client() else {
        return false;
    };
    flow::remove_item(&transport, &view, &product_id_text(&product_id))
        .await
        .is_ok()
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: &str) {
    if let Some(document) = dom::window_document() {
        overlay::notify(&document, message, Severity::from_kind(kind));
    }
}
