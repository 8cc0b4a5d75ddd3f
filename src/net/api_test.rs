use super::*;

// =============================================================
// Envelope parsing
// =============================================================

#[test]
fn parse_reads_a_well_formed_envelope() {
    let envelope = ResultEnvelope::parse(r#"{"result":true,"data":{"id":"who"},"message":null}"#);
    assert!(envelope.result);
    assert_eq!(envelope.data, serde_json::json!({"id":"who"}));
    assert!(envelope.message.is_none());
}

#[test]
fn parse_keeps_the_failure_message() {
    let envelope = ResultEnvelope::parse(r#"{"result":false,"data":null,"message":"bad token"}"#);
    assert!(!envelope.result);
    assert_eq!(envelope.message.as_deref(), Some("bad token"));
}

#[test]
fn parse_tolerates_missing_optional_fields() {
    let envelope = ResultEnvelope::parse(r#"{"result":true}"#);
    assert!(envelope.result);
    assert!(envelope.data.is_null());
    assert!(envelope.message.is_none());
}

#[test]
fn parse_never_raises_on_garbage_bodies() {
    // Property: an unparseable body still yields a usable value.
    let envelope = ResultEnvelope::parse("<html>502 Bad Gateway</html>");
    assert!(!envelope.result);
    assert_eq!(
        envelope.data,
        serde_json::Value::String("<html>502 Bad Gateway</html>".to_owned())
    );
    assert!(envelope.message.is_none());

    let empty = ResultEnvelope::parse("");
    assert_eq!(empty.data, serde_json::Value::String(String::new()));
}

#[test]
fn parse_wraps_non_envelope_json_as_raw() {
    // Valid JSON that is not an envelope gets the same raw-body treatment.
    let envelope = ResultEnvelope::parse(r#"["a","b"]"#);
    assert!(!envelope.result);
    assert_eq!(
        envelope.data,
        serde_json::Value::String(r#"["a","b"]"#.to_owned())
    );
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn is_success_is_none_safe() {
    assert!(!is_success(None));
}

#[test]
fn is_success_follows_the_result_flag() {
    let ok = ResultEnvelope::parse(r#"{"result":true}"#);
    let bad = ResultEnvelope::parse(r#"{"result":false}"#);
    assert!(is_success(Some(&ok)));
    assert!(!is_success(Some(&bad)));
}

#[test]
fn data_field_reads_string_fields() {
    let envelope = ResultEnvelope::parse(r#"{"result":true,"data":{"name":"Kim"}}"#);
    assert_eq!(data_field(&envelope, "name"), "Kim");
}

#[test]
fn data_field_stringifies_non_string_fields() {
    let envelope = ResultEnvelope::parse(r#"{"result":true,"data":{"seq":42}}"#);
    assert_eq!(data_field(&envelope, "seq"), "42");
}

#[test]
fn data_field_degrades_to_empty_string() {
    let missing_key = ResultEnvelope::parse(r#"{"result":true,"data":{}}"#);
    assert_eq!(data_field(&missing_key, "name"), "");

    let null_value = ResultEnvelope::parse(r#"{"result":true,"data":{"name":null}}"#);
    assert_eq!(data_field(&null_value, "name"), "");

    // Non-object data is a malformed-response fault, not a crash.
    let scalar_data = ResultEnvelope::parse(r#"{"result":true,"data":"jwt-here"}"#);
    assert_eq!(data_field(&scalar_data, "name"), "");
}

#[test]
fn data_str_returns_the_whole_string_payload() {
    let envelope = ResultEnvelope::parse(r#"{"result":true,"data":"ey.jwt.sig"}"#);
    assert_eq!(envelope.data_str(), "ey.jwt.sig");

    let empty = ResultEnvelope::parse(r#"{"result":true}"#);
    assert_eq!(empty.data_str(), "");
}

// =============================================================
// Outcome plumbing
// =============================================================

#[test]
fn outcome_envelope_is_present_for_done_and_fail() {
    let envelope = ResultEnvelope::parse(r#"{"result":true}"#);
    assert!(ApiOutcome::Done(envelope.clone()).envelope().is_some());
    assert!(ApiOutcome::Fail(envelope).envelope().is_some());
    assert!(ApiOutcome::Invalid("missing url").envelope().is_none());
}

#[test]
fn empty_url_is_rejected_without_dispatch() {
    // Local validation error: no transport involved, so this resolves
    // immediately even off-browser.
    let outcome = poll_ready(api_call(HttpMethod::Get, "  ", &[], None));
    assert_eq!(outcome, ApiOutcome::Invalid("missing url"));
}

#[test]
fn http_method_displays_uppercase() {
    assert_eq!(HttpMethod::Get.to_string(), "GET");
    assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
}

/// Drive a future that never actually awaits anything.
fn poll_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let waker = Waker::noop();
    let mut cx = Context::from_waker(waker);
    match pin!(fut).poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future was expected to resolve synchronously"),
    }
}
