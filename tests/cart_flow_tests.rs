// Host-side tests for the cart add/refresh flow.
// The main crate is wasm-only, so we include the pure-Rust modules directly
// and drive them with in-memory transport and view fakes.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod cart {
    pub mod protocol {
        include!("../src/cart/protocol.rs");
    }
    pub mod flow {
        include!("../src/cart/flow.rs");
    }
}

use cart::flow::*;
use cart::protocol::*;
use constants::*;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

struct FakeTransport {
    replies: RefCell<VecDeque<Result<String, CartError>>>,
    sent: RefCell<Vec<serde_json::Value>>,
}

impl FakeTransport {
    fn new(replies: Vec<Result<&str, CartError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().map(|r| r.map(str::to_string)).collect()),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<serde_json::Value> {
        self.sent.borrow().clone()
    }
}

impl CartTransport for FakeTransport {
    async fn post_json(&self, body: &str) -> Result<String, CartError> {
        self.sent
            .borrow_mut()
            .push(serde_json::from_str(body).expect("request body is JSON"));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(CartError::Network("no reply queued".into())))
    }
}

#[derive(Default)]
struct FakeView {
    badge: RefCell<Option<String>>,
    badge_sets: Cell<usize>,
    notes: RefCell<Vec<(String, Severity)>>,
}

impl FakeView {
    fn with_badge(text: &str) -> Self {
        let view = Self::default();
        *view.badge.borrow_mut() = Some(text.to_string());
        view
    }

    fn badge(&self) -> Option<String> {
        self.badge.borrow().clone()
    }

    fn notes(&self) -> Vec<(String, Severity)> {
        self.notes.borrow().clone()
    }
}

impl CartView for FakeView {
    fn set_badge_count(&self, count: u64) {
        *self.badge.borrow_mut() = Some(count.to_string());
        self.badge_sets.set(self.badge_sets.get() + 1);
    }

    fn notify(&self, message: &str, severity: Severity) {
        self.notes.borrow_mut().push((message.to_string(), severity));
    }
}

fn get_request() -> serde_json::Value {
    json!({ "action": "get" })
}

#[test]
fn refresh_writes_count_to_badge() {
    for count in [0u64, 1, 7, 42, 999, 1_000_000, u64::MAX] {
        let reply = format!(r#"{{"cart":[],"cart_count":{}}}"#, count);
        let transport = FakeTransport::new(vec![Ok(&reply)]);
        let view = FakeView::default();

        let snapshot = pollster::block_on(refresh_badge(&transport, &view)).unwrap();

        assert_eq!(snapshot.count, count);
        assert_eq!(view.badge(), Some(count.to_string()));
        assert_eq!(transport.sent(), vec![get_request()]);
    }
}

#[test]
fn refresh_shows_zero_when_count_missing_or_null() {
    for reply in [r#"{}"#, r#"{"cart":[]}"#, r#"{"cart_count":null}"#] {
        let transport = FakeTransport::new(vec![Ok(reply)]);
        let view = FakeView::with_badge("5");

        pollster::block_on(refresh_badge(&transport, &view)).unwrap();

        assert_eq!(view.badge().as_deref(), Some("0"), "reply {reply}");
    }
}

#[test]
fn refresh_failure_leaves_badge_untouched() {
    let failures = vec![
        Err(CartError::Network("offline".into())),
        Err(CartError::Status(500)),
        Ok("<html>oops</html>"),
        Ok(r#"{"cart_count":-1}"#),
        Ok(r#"{"cart_count":"three"}"#),
    ];
    for failure in failures {
        let transport = FakeTransport::new(vec![failure]);
        let view = FakeView::with_badge("7");

        let result = pollster::block_on(refresh_badge(&transport, &view));

        assert!(result.is_err());
        assert_eq!(view.badge().as_deref(), Some("7"));
        assert_eq!(view.badge_sets.get(), 0);
        assert!(view.notes().is_empty(), "refresh never notifies");
    }
}

#[test]
fn add_success_refreshes_once_and_notifies_once() {
    let transport = FakeTransport::new(vec![
        Ok(r#"{"success":true,"cart_count":4}"#),
        Ok(r#"{"cart":[3,3,9,12],"cart_count":4}"#),
    ]);
    let view = FakeView::default();

    let outcome = pollster::block_on(add_item(&transport, &view, "12")).unwrap();

    assert!(outcome.success);
    assert_eq!(
        transport.sent(),
        vec![json!({ "product_id": 12, "action": "add" }), get_request()]
    );
    assert_eq!(view.badge_sets.get(), 1);
    assert_eq!(view.badge().as_deref(), Some("4"));
    assert_eq!(view.notes(), vec![(MSG_ADD_OK.to_string(), Severity::Success)]);
}

#[test]
fn add_coerces_product_id_like_parse_int() {
    let transport = FakeTransport::new(vec![
        Ok(r#"{"success":true}"#),
        Ok(r#"{"cart_count":1}"#),
    ]);
    let view = FakeView::default();

    pollster::block_on(add_item(&transport, &view, "  12px")).unwrap();

    assert_eq!(transport.sent()[0], json!({ "product_id": 12, "action": "add" }));
}

#[test]
fn add_rejected_by_server_shows_error_without_refresh() {
    for reply in [r#"{"success":false}"#, r#"{}"#, r#"{"success":null}"#] {
        let transport = FakeTransport::new(vec![Ok(reply)]);
        let view = FakeView::with_badge("2");

        let result = pollster::block_on(add_item(&transport, &view, "3"));

        assert_eq!(result, Err(CartError::Rejected));
        assert_eq!(transport.sent().len(), 1, "no follow-up get");
        assert_eq!(view.badge_sets.get(), 0);
        assert_eq!(view.badge().as_deref(), Some("2"));
        assert_eq!(
            view.notes(),
            vec![(MSG_ADD_FAILED.to_string(), Severity::Error)]
        );
    }
}

#[test]
fn add_transport_failure_shows_one_error() {
    let failures = vec![
        Err(CartError::Network("connection reset".into())),
        Err(CartError::Status(502)),
        Ok("not json"),
    ];
    for failure in failures {
        let transport = FakeTransport::new(vec![failure]);
        let view = FakeView::default();

        let result = pollster::block_on(add_item(&transport, &view, "3"));

        assert!(result.is_err());
        assert_eq!(transport.sent().len(), 1);
        assert_eq!(view.badge_sets.get(), 0);
        assert_eq!(
            view.notes(),
            vec![(MSG_ADD_FAILED.to_string(), Severity::Error)]
        );
    }
}

#[test]
fn add_with_unparseable_id_sends_nothing() {
    let transport = FakeTransport::new(vec![]);
    let view = FakeView::default();

    let result = pollster::block_on(add_item(&transport, &view, "basil"));

    assert_eq!(result, Err(CartError::InvalidProductId("basil".into())));
    assert!(transport.sent().is_empty());
    assert_eq!(
        view.notes(),
        vec![(MSG_ADD_FAILED.to_string(), Severity::Error)]
    );
}

#[test]
fn add_success_with_failed_refresh_still_reports_success() {
    let transport = FakeTransport::new(vec![
        Ok(r#"{"success":true,"cart_count":1}"#),
        Err(CartError::Network("dropped".into())),
    ]);
    let view = FakeView::with_badge("0");

    let result = pollster::block_on(add_item(&transport, &view, "8"));

    assert!(result.is_ok());
    assert_eq!(transport.sent().len(), 2);
    assert_eq!(view.badge().as_deref(), Some("0"));
    assert_eq!(view.notes(), vec![(MSG_ADD_OK.to_string(), Severity::Success)]);
}

#[test]
fn remove_uses_remove_action() {
    let transport = FakeTransport::new(vec![
        Ok(r#"{"success":true,"cart_count":0}"#),
        Ok(r#"{"cart":[],"cart_count":0}"#),
    ]);
    let view = FakeView::with_badge("1");

    pollster::block_on(remove_item(&transport, &view, "9")).unwrap();

    assert_eq!(
        transport.sent(),
        vec![json!({ "product_id": 9, "action": "remove" }), get_request()]
    );
    assert_eq!(view.badge().as_deref(), Some("0"));
    assert_eq!(
        view.notes(),
        vec![(MSG_REMOVE_OK.to_string(), Severity::Success)]
    );
}

#[test]
fn remove_failure_uses_remove_message() {
    let transport = FakeTransport::new(vec![Ok(r#"{"success":false}"#)]);
    let view = FakeView::default();

    _ = pollster::block_on(remove_item(&transport, &view, "9"));

    assert_eq!(
        view.notes(),
        vec![(MSG_REMOVE_FAILED.to_string(), Severity::Error)]
    );
}

#[test]
fn severity_kind_mapping() {
    assert_eq!(Severity::from_kind("success"), Severity::Success);
    assert_eq!(Severity::from_kind("error"), Severity::Error);
    assert_eq!(Severity::from_kind("warning"), Severity::Error);
    assert_eq!(Severity::Success.alert_class(), "alert-success");
    assert_eq!(Severity::Error.alert_class(), "alert-danger");
}
