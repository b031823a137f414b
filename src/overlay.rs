use crate::cart::flow::Severity;
use crate::constants::{NOTIFY_DISMISS_MS, NOTIFY_STYLE};
use gloo_timers::callback::Timeout;
use web_sys as web;

/// Show a fixed-position toast in the top-right corner and remove it after
/// `NOTIFY_DISMISS_MS`. The message is inserted as text, never as markup.
pub fn notify(document: &web::Document, message: &str, severity: Severity) {
    let Some(body) = document.body() else {
        log::warn!("[notify] no <body>; dropping {:?} notification", severity);
        return;
    };
    let alert = match build_alert(document, message, severity) {
        Ok(el) => el,
        Err(e) => {
            log::error!("[notify] create alert error: {:?}", e);
            return;
        }
    };
    if let Err(e) = body.append_child(&alert) {
        log::error!("[notify] append alert error: {:?}", e);
        return;
    }
    Timeout::new(NOTIFY_DISMISS_MS, move || alert.remove()).forget();
}

fn build_alert(
    document: &web::Document,
    message: &str,
    severity: Severity,
) -> Result<web::Element, wasm_bindgen::JsValue> {
    let alert = document.create_element("div")?;
    alert.set_class_name(&format!(
        "alert {} alert-dismissible fade show",
        severity.alert_class()
    ));
    alert.set_attribute("role", "alert")?;
    alert.set_attribute("style", NOTIFY_STYLE)?;
    alert.append_child(&document.create_text_node(message))?;

    // dismissal is handled by the page's alert component
    let close = document.create_element("button")?;
    close.set_attribute("type", "button")?;
    close.set_class_name("btn-close");
    close.set_attribute("data-bs-dismiss", "alert")?;
    close.set_attribute("aria-label", "Close")?;
    alert.append_child(&close)?;
    Ok(alert)
}
