use super::flow::CartTransport;
use super::protocol::CartError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_network(e: JsValue) -> CartError {
    CartError::Network(format!("{:?}", e))
}

/// `fetch`-backed transport. Sends same-origin credentials so the server
/// can find the cart in its session cookie.
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl CartTransport for FetchTransport {
    async fn post_json(&self, body: &str) -> Result<String, CartError> {
        let window = web::window().ok_or_else(|| CartError::Network("no window".into()))?;

        let headers = web::Headers::new().map_err(js_network)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_network)?;
        let init = web::RequestInit::new();
        init.set_method("POST");
        init.set_credentials(web::RequestCredentials::SameOrigin);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));
        let request =
            web::Request::new_with_str_and_init(&self.endpoint, &init).map_err(js_network)?;

        let resp_val = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_network)?;
        let resp: web::Response = resp_val.dyn_into().map_err(js_network)?;
        if !resp.ok() {
            return Err(CartError::Status(resp.status()));
        }

        let text_val = JsFuture::from(resp.text().map_err(js_network)?)
            .await
            .map_err(js_network)?;
        text_val
            .as_string()
            .ok_or_else(|| CartError::Decode("response.text() was not a string".into()))
    }
}
