use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("invalid product id {0:?}")]
    InvalidProductId(String),
    #[error("request rejected by server")]
    Rejected,
}

/// Body of a POST to the cart endpoint.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum CartRequest {
    Get,
    Add { product_id: i64 },
    Remove { product_id: i64 },
}

impl CartRequest {
    pub fn to_json(&self) -> Result<String, CartError> {
        serde_json::to_string(self).map_err(|e| CartError::Decode(e.to_string()))
    }
}

/// Parsed reply to a `get` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSnapshot {
    pub count: u64,
    pub items: Vec<i64>,
}

/// Parsed reply to an `add` or `remove` request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationOutcome {
    pub success: bool,
    pub count: Option<u64>,
}

#[derive(Deserialize)]
struct GetBody {
    #[serde(default)]
    cart_count: Option<u64>,
    #[serde(default)]
    cart: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
struct MutationBody {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    cart_count: Option<u64>,
}

// A missing or null count reads as an empty cart. Item ids the server could
// not record (null entries) are skipped.
pub fn parse_snapshot(text: &str) -> Result<CartSnapshot, CartError> {
    let body: GetBody =
        serde_json::from_str(text).map_err(|e| CartError::Decode(e.to_string()))?;
    let items = body
        .cart
        .unwrap_or_default()
        .iter()
        .filter_map(serde_json::Value::as_i64)
        .collect();
    Ok(CartSnapshot {
        count: body.cart_count.unwrap_or(0),
        items,
    })
}

pub fn parse_mutation(text: &str) -> Result<MutationOutcome, CartError> {
    let body: MutationBody =
        serde_json::from_str(text).map_err(|e| CartError::Decode(e.to_string()))?;
    Ok(MutationOutcome {
        success: body.success.unwrap_or(false),
        count: body.cart_count,
    })
}

/// Coerce user-supplied text into a product id with `parseInt` rules:
/// leading whitespace and an optional sign are skipped, a `0x` prefix
/// switches to hexadecimal, and parsing stops at the first non-digit.
/// Input with no leading digits is rejected.
pub fn coerce_product_id(raw: &str) -> Result<i64, CartError> {
    let invalid = || CartError::InvalidProductId(raw.to_string());
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if end == 0 {
        return Err(invalid());
    }
    let magnitude = i64::from_str_radix(&s[..end], radix).map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}
