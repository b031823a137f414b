use super::protocol::{
    coerce_product_id, parse_mutation, parse_snapshot, CartError, CartRequest, CartSnapshot,
    MutationOutcome,
};
use crate::constants::{MSG_ADD_FAILED, MSG_ADD_OK, MSG_REMOVE_FAILED, MSG_REMOVE_OK};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Anything other than `"success"` is shown as an error.
    pub fn from_kind(kind: &str) -> Self {
        if kind == "success" {
            Severity::Success
        } else {
            Severity::Error
        }
    }

    pub fn alert_class(self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Error => "alert-danger",
        }
    }
}

/// Sends a JSON body to the cart endpoint and returns the raw response text.
#[allow(async_fn_in_trait)]
pub trait CartTransport {
    async fn post_json(&self, body: &str) -> Result<String, CartError>;
}

/// The page elements the cart flow writes to.
pub trait CartView {
    fn set_badge_count(&self, count: u64);
    fn notify(&self, message: &str, severity: Severity);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartAction {
    Add,
    Remove,
}

impl CartAction {
    fn request(self, product_id: i64) -> CartRequest {
        match self {
            CartAction::Add => CartRequest::Add { product_id },
            CartAction::Remove => CartRequest::Remove { product_id },
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            CartAction::Add => MSG_ADD_OK,
            CartAction::Remove => MSG_REMOVE_OK,
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            CartAction::Add => MSG_ADD_FAILED,
            CartAction::Remove => MSG_REMOVE_FAILED,
        }
    }
}

/// Fetch the cart and write its count into the badge.
///
/// On failure the error is logged and the badge keeps its previous text.
pub async fn refresh_badge<T, V>(transport: &T, view: &V) -> Result<CartSnapshot, CartError>
where
    T: CartTransport,
    V: CartView,
{
    match fetch_snapshot(transport).await {
        Ok(snapshot) => {
            log::debug!("[cart] {} item(s): {:?}", snapshot.count, snapshot.items);
            view.set_badge_count(snapshot.count);
            Ok(snapshot)
        }
        Err(e) => {
            log::error!("[cart] error updating cart badge: {}", e);
            Err(e)
        }
    }
}

pub async fn add_item<T, V>(
    transport: &T,
    view: &V,
    raw_product_id: &str,
) -> Result<MutationOutcome, CartError>
where
    T: CartTransport,
    V: CartView,
{
    apply(transport, view, CartAction::Add, raw_product_id).await
}

pub async fn remove_item<T, V>(
    transport: &T,
    view: &V,
    raw_product_id: &str,
) -> Result<MutationOutcome, CartError>
where
    T: CartTransport,
    V: CartView,
{
    apply(transport, view, CartAction::Remove, raw_product_id).await
}

// Exactly one notification per call; the badge is refreshed only after the
// server confirms the change.
async fn apply<T, V>(
    transport: &T,
    view: &V,
    action: CartAction,
    raw_product_id: &str,
) -> Result<MutationOutcome, CartError>
where
    T: CartTransport,
    V: CartView,
{
    match send_mutation(transport, action, raw_product_id).await {
        Ok(outcome) => {
            log::info!(
                "[cart] {:?} {:?} ok (server count {:?})",
                action,
                raw_product_id,
                outcome.count
            );
            view.notify(action.success_message(), Severity::Success);
            _ = refresh_badge(transport, view).await;
            Ok(outcome)
        }
        Err(e) => {
            log::error!("[cart] {:?} for {:?} failed: {}", action, raw_product_id, e);
            view.notify(action.failure_message(), Severity::Error);
            Err(e)
        }
    }
}

async fn send_mutation<T: CartTransport>(
    transport: &T,
    action: CartAction,
    raw_product_id: &str,
) -> Result<MutationOutcome, CartError> {
    let product_id = coerce_product_id(raw_product_id)?;
    let body = action.request(product_id).to_json()?;
    let text = transport.post_json(&body).await?;
    let outcome = parse_mutation(&text)?;
    if !outcome.success {
        return Err(CartError::Rejected);
    }
    Ok(outcome)
}

async fn fetch_snapshot<T: CartTransport>(transport: &T) -> Result<CartSnapshot, CartError> {
    let body = CartRequest::Get.to_json()?;
    let text = transport.post_json(&body).await?;
    parse_snapshot(&text)
}
