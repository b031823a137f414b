// Host-side tests for the cart wire format.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod protocol {
    include!("../src/cart/protocol.rs");
}

use protocol::*;
use serde_json::json;

#[test]
fn get_request_body() {
    assert_eq!(CartRequest::Get.to_json().unwrap(), r#"{"action":"get"}"#);
}

#[test]
fn mutation_request_bodies() {
    let add = serde_json::to_value(CartRequest::Add { product_id: 17 }).unwrap();
    assert_eq!(add, json!({ "product_id": 17, "action": "add" }));

    let remove = serde_json::to_value(CartRequest::Remove { product_id: -2 }).unwrap();
    assert_eq!(remove, json!({ "product_id": -2, "action": "remove" }));
}

#[test]
fn snapshot_reads_count_and_items() {
    let snap = parse_snapshot(r#"{"cart":[4,4,11],"cart_count":3}"#).unwrap();
    assert_eq!(
        snap,
        CartSnapshot {
            count: 3,
            items: vec![4, 4, 11]
        }
    );
}

#[test]
fn snapshot_skips_null_items() {
    let snap = parse_snapshot(r#"{"cart":[1,null,3],"cart_count":3}"#).unwrap();
    assert_eq!(snap.items, vec![1, 3]);
    assert_eq!(snap.count, 3);
}

#[test]
fn snapshot_defaults_to_empty() {
    assert_eq!(parse_snapshot("{}").unwrap(), CartSnapshot::default());
    assert_eq!(parse_snapshot(r#"{"cart_count":null}"#).unwrap().count, 0);
}

#[test]
fn snapshot_rejects_malformed_bodies() {
    for body in ["", "nope", "5", r#"{"cart_count":-4}"#, r#"{"cart_count":1.5}"#] {
        assert!(
            matches!(parse_snapshot(body), Err(CartError::Decode(_))),
            "body {body:?}"
        );
    }
}

#[test]
fn mutation_outcome_parsing() {
    assert_eq!(
        parse_mutation(r#"{"success":true,"cart_count":2}"#).unwrap(),
        MutationOutcome {
            success: true,
            count: Some(2)
        }
    );
    assert_eq!(
        parse_mutation(r#"{"success":false}"#).unwrap(),
        MutationOutcome {
            success: false,
            count: None
        }
    );
    assert!(!parse_mutation("{}").unwrap().success);
    assert!(parse_mutation("]").is_err());
}

#[test]
fn product_id_coercion_follows_parse_int() {
    let cases = [
        ("42", 42),
        ("  7", 7),
        ("\t\n9", 9),
        ("-3", -3),
        ("+8", 8),
        ("12abc", 12),
        ("3.9", 3),
        ("0x1A", 26),
        ("0X10", 16),
        ("007", 7),
        ("0", 0),
    ];
    for (raw, expected) in cases {
        assert_eq!(coerce_product_id(raw), Ok(expected), "input {raw:?}");
    }
}

#[test]
fn product_id_coercion_rejects_non_numbers() {
    for raw in ["", "   ", "abc", "-", "+", "0x", "x12", ".5", "99999999999999999999"] {
        assert_eq!(
            coerce_product_id(raw),
            Err(CartError::InvalidProductId(raw.to_string())),
            "input {raw:?}"
        );
    }
}

#[test]
fn errors_render_readably() {
    assert_eq!(CartError::Status(404).to_string(), "unexpected HTTP status 404");
    assert_eq!(
        CartError::InvalidProductId("x".into()).to_string(),
        "invalid product id \"x\""
    );
}
